//! Integration tests for the TUI module.
//!
//! These tests exercise the TUI with simulated input, verifying correct
//! behavior without requiring an actual terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use orrery::config::Config;
use orrery::overview::SortMode;
use orrery::system::{builtin_sol, BodyType, SystemBuilder};
use orrery::tui::app::Mode;
use orrery::tui::event::handle_key_event;
use orrery::tui::ui::render;
use orrery::tui::App;
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn key_char(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn sol() -> App {
    App::new(builtin_sol().unwrap(), &Config::default())
}

fn labels(app: &App) -> Vec<&str> {
    app.rows.iter().map(|row| row.label.as_str()).collect()
}

fn screen(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| render(app, frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut output = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            output.push_str(buffer[(x, y)].symbol());
        }
        output.push('\n');
    }
    output
}

#[test]
fn test_tui_initial_frame() {
    let app = sol();
    let rows = labels(&app);

    assert_eq!(rows[0], "Sol");
    assert_eq!(&rows[1..4], &["Mercury", "Venus", "Earth"]);
    assert_eq!(app.rows[0].depth, 0);
    let live = |label: &str| app.rows.iter().find(|row| row.label == label).unwrap().live;
    assert!(live("Earth"));
    assert!(live("Halley Orbital"));
    assert!(!live("Saturn"));
    assert!(!live("Tranquility Base"));
}

#[test]
fn test_tui_config_initial_state() {
    let mut config = Config::default();
    config.overview.sort = SortMode::Distance;
    config.overview.show_stations = false;
    config.tui.details_panel = false;

    let app = App::new(builtin_sol().unwrap(), &config);
    assert_eq!(app.state.sort_mode, SortMode::Distance);
    assert!(!app.show_details);
    assert!(!labels(&app).contains(&"London"));
    // The player is next to Earth
    assert_eq!(labels(&app)[1], "Earth");
}

#[test]
fn test_tui_select_then_filter() {
    let mut app = sol();

    // Walk down to Phobos and select it
    while app.cursor_row().map(|row| row.label.as_str()) != Some("Phobos") {
        handle_key_event(&mut app, key(KeyCode::Down));
    }
    handle_key_event(&mut app, key(KeyCode::Enter));
    assert_eq!(app.selection.len(), 1);

    handle_key_event(&mut app, key_char('/'));
    for c in "venus".chars() {
        handle_key_event(&mut app, key_char(c));
    }
    handle_key_event(&mut app, key(KeyCode::Enter));

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(labels(&app), vec!["Sol", "Venus", "Mars", "Phobos"]);
    assert!(app.rows[3].selected);
}

#[test]
fn test_tui_focus_through_context_menu() {
    let mut app = sol();
    while app.cursor_row().map(|row| row.label.as_str()) != Some("Saturn") {
        handle_key_event(&mut app, key_char('j'));
    }

    handle_key_event(&mut app, key_char('c'));
    assert_eq!(app.mode, Mode::ContextMenu);
    handle_key_event(&mut app, key_char('j'));
    handle_key_event(&mut app, key(KeyCode::Enter));

    assert_eq!(labels(&app), vec!["Saturn", "Titan", "Titan Station"]);
    let output = screen(&app, 100, 30);
    assert!(output.contains("Sol › Saturn"));
}

#[test]
fn test_tui_toggle_keys_update_controls_line() {
    let mut app = sol();
    handle_key_event(&mut app, key_char('m'));
    handle_key_event(&mut app, key_char('o'));

    let output = screen(&app, 100, 30);
    assert!(output.contains("Moons ✗"));
    assert!(output.contains("Stations ✓"));
    assert!(output.contains("Sort: distance"));
}

#[test]
fn test_tui_details_panel_follows_cursor() {
    let mut app = sol();
    while app.cursor_row().map(|row| row.label.as_str()) != Some("Earth") {
        handle_key_event(&mut app, key(KeyCode::Down));
    }

    let output = screen(&app, 100, 30);
    assert!(output.contains("1.00 Earth masses"));
    assert!(output.contains("Rocky planet"));
    assert!(output.contains("8.10 bil"));
    assert!(output.contains("52w 1d 6h"));
}

#[test]
fn test_tui_remote_system_uses_orbits() {
    let loaded = SystemBuilder::new("Barnard")
        .body("barnard", "Barnard's Star", BodyType::Star, None)
        .body("b", "Barnard b", BodyType::RockyPlanet, Some("barnard"))
        .orbit(3e10, 3e10)
        .build()
        .unwrap();
    let app = App::new(loaded, &Config::default());

    assert!(app.rows.iter().all(|row| !row.live));
    assert_eq!(app.rows[1].distance.to_string(), "0.20 AU");
    let output = screen(&app, 100, 20);
    assert!(output.contains("Remote view"));
    assert!(output.contains("Distances are orbit midpoints"));
}

#[test]
fn test_tui_quit() {
    let mut app = sol();
    handle_key_event(&mut app, key_char('q'));
    assert!(app.should_quit);
}
