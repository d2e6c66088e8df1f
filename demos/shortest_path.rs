use grid_astar::solver::{astar::AstarSolver, path_cost, GridSolver};
use grid_astar::verify::Verifier;
use grid_astar::Point;
use grid_astar_scenarios::get_benchmark;

// Finds a path through the bundled maze and checks it against every simple path between
// its endpoints.

fn main() {
    let (grid, _) = get_benchmark("maze").unwrap();
    println!("{}", grid);
    let start = Point::new(0, 2);
    let end = Point::new(9, 9);
    let path = AstarSolver::new().find_path(&grid, start, end).unwrap();
    match &path {
        Some(path) => {
            println!("Path ({} nodes, cost {:.3}):", path.len(), path_cost(path));
            for p in path {
                println!("{}", p);
            }
        }
        None => println!("No path from {} to {}", start, end),
    }
    let verification = Verifier::new().verify(&grid, path.as_deref()).unwrap();
    println!("Simple paths: {}", verification.path_count);
    println!("Shortest: {:?} nodes", verification.shortest_len);
    println!("Lowest cost: {:?}", verification.lowest_cost);
    println!(
        "Optimal: {} (by cost: {})",
        verification.hop_optimal, verification.cost_optimal
    );
}
