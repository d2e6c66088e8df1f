use grid_astar::grid::Grid;
use grid_astar::solver::{astar::AstarSolver, path_cost, GridSolver};
use grid_astar_scenarios::{get_benchmark, get_benchmark_names, Scenario};
use std::time::Instant;

fn main() {
    let solver = AstarSolver::new();
    for name in get_benchmark_names() {
        println!("Name: {}", name);
        let (grid, scenarios) = get_benchmark(&name).unwrap();
        let number_of_scenarios = scenarios.len() as u32;
        let before = Instant::now();
        run_scenarios(&solver, &grid, &scenarios);
        let elapsed = before.elapsed();
        println!(
            "\tElapsed time: {:.2?}; per scenario: {:.2?}",
            elapsed,
            elapsed / number_of_scenarios.max(1)
        );
    }
}

pub fn run_scenarios(solver: &AstarSolver, grid: &Grid, scenarios: &[Scenario]) {
    for scenario in scenarios {
        let path = solver
            .find_path(grid, scenario.start, scenario.goal)
            .unwrap()
            .expect("Scenario goal is reachable");
        let cost = path_cost(&path);
        println!(
            "\t{} -> {}: {:.3} (expected {:.3})",
            scenario.start, scenario.goal, cost, scenario.distance
        );
    }
}
