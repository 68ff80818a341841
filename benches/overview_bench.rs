//! Benchmark tests for the overview widget

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use orrery::format::Lexicon;
use orrery::overview::{format_tree, Overview, OverviewState, SortMode};
use orrery::system::{BodyType, LoadedSystem, Selection, SelectionRef, SystemBuilder};

/// Create a system with `planets` planets, each with `moons` moons and a
/// station per moon. Every other planet is live.
fn create_benchmark_system(planets: usize, moons: usize) -> LoadedSystem {
    let mut builder = SystemBuilder::new("Bench").body("star", "Star", BodyType::Star, None);

    for p in 0..planets {
        let key = format!("p{}", p);
        let orbit = 1e10 * (p + 1) as f64;
        builder = builder
            .body(key.clone(), format!("Planet {}", p), BodyType::RockyPlanet, Some("star"))
            .orbit(orbit, orbit * 1.05);
        if p % 2 == 0 {
            builder = builder.live([orbit, 0.0, 0.0]);
        }

        for m in 0..moons {
            let moon = format!("p{}m{}", p, m);
            let moon_orbit = 1e8 * (m + 1) as f64;
            builder = builder
                .body(moon.clone(), format!("Moon {}-{}", p, m), BodyType::RockyPlanet, Some(key.as_str()))
                .orbit(moon_orbit, moon_orbit)
                .body(
                    format!("{}s", moon),
                    format!("Station {}-{}", p, m),
                    BodyType::OrbitalStation,
                    Some(moon.as_str()),
                )
                .orbit(5e6, 5e6);
        }
    }

    builder.player([3e10, 0.0, 0.0]).build().unwrap()
}

fn benchmark_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    let lex = Lexicon::default();

    // Benchmark different system sizes
    for planets in [10, 50, 200].iter() {
        let loaded = create_benchmark_system(*planets, 8);
        let overview = Overview::new(&loaded.system, loaded.space.as_ref(), &lex);
        let selection = Selection::new();

        for mode in [SortMode::Orbit, SortMode::Distance] {
            let state = OverviewState {
                sort_mode: mode,
                ..Default::default()
            };
            let name = format!("{:?}", mode).to_lowercase();
            group.bench_with_input(BenchmarkId::new(name, planets), planets, |b, _| {
                b.iter(|| overview.tree(black_box(&state), None, &selection))
            });
        }
    }

    group.finish();
}

fn benchmark_filtered(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtered");
    let lex = Lexicon::default();

    let loaded = create_benchmark_system(100, 8);
    let overview = Overview::new(&loaded.system, loaded.space.as_ref(), &lex);

    let deep = loaded.system.find("p99m7s").unwrap().id;
    let selection: Selection = [SelectionRef::Body(deep)].into_iter().collect();
    let state = OverviewState {
        filter: "planet 4".into(),
        show_moons: false,
        ..Default::default()
    };

    group.bench_function("no_selection", |b| {
        b.iter(|| overview.tree(black_box(&state), None, &Selection::new()))
    });

    group.bench_function("with_selection", |b| {
        b.iter(|| overview.tree(black_box(&state), None, &selection))
    });

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let lex = Lexicon::default();
    let loaded = create_benchmark_system(50, 8);
    let overview = Overview::new(&loaded.system, loaded.space.as_ref(), &lex);
    let state = OverviewState::default();
    let selection = Selection::new();

    c.bench_function("format_tree", |b| {
        b.iter(|| format_tree(black_box(&overview), &state, None, &selection))
    });
}

criterion_group!(benches, benchmark_tree, benchmark_filtered, benchmark_render);
criterion_main!(benches);
