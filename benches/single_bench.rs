use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::{
    enumerate::PathEnumerator,
    solver::{astar::AstarSolver, GridSolver},
    verify::Verifier,
};
use grid_astar_scenarios::get_benchmark;
use std::hint::black_box;

fn maze_bench_enumerate(c: &mut Criterion) {
    let (grid, scenarios) = get_benchmark("maze").expect("Could not load benchmark");
    let enumerator = PathEnumerator::new();
    c.bench_function("maze, enumerate", |b| {
        b.iter(|| {
            for scenario in &scenarios {
                black_box(enumerator.find_all_paths(&grid, scenario.start, scenario.goal))
                    .expect("Maze is small enough to enumerate");
            }
        })
    });
}

fn maze_bench_verify(c: &mut Criterion) {
    let (grid, scenarios) = get_benchmark("maze").expect("Could not load benchmark");
    let solver = AstarSolver::new();
    let verifier = Verifier::new();
    let paths: Vec<_> = scenarios
        .iter()
        .map(|scenario| solver.find_path(&grid, scenario.start, scenario.goal))
        .collect::<Result<_, _>>()
        .expect("Scenario endpoints lie on the map");
    c.bench_function("maze, verify", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(verifier.verify(&grid, path.as_deref()))
                    .expect("Maze is small enough to enumerate");
            }
        })
    });
}

criterion_group!(benches, maze_bench_enumerate, maze_bench_verify);
criterion_main!(benches);
