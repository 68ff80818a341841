//! Snapshot tests for the text rendering of the overview tree.
//!
//! Any visual change requires explicit approval with `cargo insta review`.

use insta::assert_snapshot;
use orrery::format::Lexicon;
use orrery::overview::{format_tree, Overview, OverviewState, SortMode};
use orrery::system::{BodyType, LoadedSystem, Selection, SelectionRef, SystemBuilder};

fn kepler() -> SystemBuilder {
    SystemBuilder::new("Kepler")
        .body("kepler", "Kepler", BodyType::Star, None)
        .body("inner", "Inner", BodyType::RockyPlanet, Some("kepler"))
        .orbit(5e10, 5e10)
        .body("giant", "Giant", BodyType::GasGiant, Some("kepler"))
        .orbit(7.5e11, 7.5e11)
        .body("moonlet", "Moonlet", BodyType::RockyPlanet, Some("giant"))
        .orbit(4e8, 4e8)
        .body("dock", "Dock", BodyType::OrbitalStation, Some("giant"))
        .orbit(2e6, 2e6)
        .body("camp", "Camp", BodyType::SurfaceStation, Some("moonlet"))
}

fn render(loaded: &LoadedSystem, state: &OverviewState, selection: &Selection) -> String {
    let lex = Lexicon::default();
    let overview = Overview::new(&loaded.system, loaded.space.as_ref(), &lex);
    format_tree(&overview, state, None, selection)
        .trim_end()
        .to_string()
}

#[test]
fn test_orbit_order_snapshot() {
    let loaded = kepler().build().unwrap();
    let output = render(&loaded, &OverviewState::default(), &Selection::new());
    assert_snapshot!(output, @r"
    ☼ Kepler  0 m
      ● Inner  0.33 AU
      ◍ Giant ○◇  5.01 AU
        ◇ Dock  2.00 Mm
        ○ Moonlet ▲  400.00 Mm
          ▲ Camp  0 m
    ");
}

#[test]
fn test_filter_with_selection_snapshot() {
    let loaded = kepler().build().unwrap();
    let camp = loaded.system.find("camp").unwrap().id;
    let selection: Selection = [SelectionRef::Body(camp)].into_iter().collect();
    let state = OverviewState {
        filter: "DOCK".into(),
        ..Default::default()
    };

    let output = render(&loaded, &state, &selection);
    assert_snapshot!(output, @r"
    ☼ Kepler  0 m
      ◍ Giant ○◇  5.01 AU
        ◇ Dock  2.00 Mm
        ○ Moonlet ▲  400.00 Mm
          ▲ Camp  0 m  [selected]
    ");
}

#[test]
fn test_distance_order_snapshot() {
    let loaded = SystemBuilder::new("Kepler")
        .body("kepler", "Kepler", BodyType::Star, None)
        .live([0.0, 0.0, 0.0])
        .body("inner", "Inner", BodyType::RockyPlanet, Some("kepler"))
        .orbit(5e10, 5e10)
        .live([5e10, 0.0, 0.0])
        .body("giant", "Giant", BodyType::GasGiant, Some("kepler"))
        .orbit(7.5e11, 7.5e11)
        .live([-7.5e11, 0.0, 0.0])
        .body("moonlet", "Moonlet", BodyType::RockyPlanet, Some("giant"))
        .orbit(4e8, 4e8)
        .body("dock", "Dock", BodyType::OrbitalStation, Some("giant"))
        .orbit(2e6, 2e6)
        .body("camp", "Camp", BodyType::SurfaceStation, Some("moonlet"))
        .player([-7.4e11, 0.0, 0.0])
        .build()
        .unwrap();
    let state = OverviewState {
        sort_mode: SortMode::Distance,
        ..Default::default()
    };

    let output = render(&loaded, &state, &Selection::new());
    assert_snapshot!(output, @r"
    ☼ Kepler  4.95 AU
      ◍ Giant ○◇  0.07 AU
        ◇ Dock  2.00 Mm
        ○ Moonlet ▲  400.00 Mm
          ▲ Camp  0 m
      ● Inner  5.28 AU
    ");
}

#[test]
fn test_hidden_categories_snapshot() {
    let loaded = kepler().build().unwrap();
    let state = OverviewState {
        show_moons: false,
        show_stations: false,
        ..Default::default()
    };

    let output = render(&loaded, &state, &Selection::new());
    assert_snapshot!(output, @r"
    ☼ Kepler  0 m
      ● Inner  0.33 AU
      ◍ Giant ○◇  5.01 AU
    ");
}
