use criterion::{criterion_group, criterion_main, Criterion};
use grid_astar::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};
use grid_astar_scenarios::{get_benchmark, get_benchmark_names};
use std::hint::black_box;

fn scenario_bench_solver<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    for name in get_benchmark_names() {
        let (grid, scenarios) = get_benchmark(&name).expect("Could not load benchmark");
        c.bench_function(format!("{name}, {solver_name}").as_str(), |b| {
            b.iter(|| {
                for scenario in &scenarios {
                    black_box(solver.find_path(&grid, scenario.start, scenario.goal))
                        .expect("Scenario endpoints lie on the map");
                }
            })
        });
    }
}

fn scenario_bench_astar(c: &mut Criterion) {
    scenario_bench_solver(c, "Astar", AstarSolver::new());
}

fn scenario_bench_dijkstra(c: &mut Criterion) {
    scenario_bench_solver(c, "Dijkstra", DijkstraSolver);
}

criterion_group!(benches, scenario_bench_astar, scenario_bench_dijkstra);
criterion_main!(benches);
