use grid_astar::route::plan_route;
use grid_astar::solver::astar::AstarSolver;
use grid_astar::Point;
use grid_astar_scenarios::get_benchmark;

// Visits three targets in order, each leg starting where the previous one ended.

fn main() {
    let (grid, _) = get_benchmark("sequential").unwrap();
    println!("{}", grid);
    let start = Point::new(0, 3);
    let targets = [Point::new(5, 3), Point::new(7, 1), Point::new(6, 8)];
    let route = plan_route(&AstarSolver::new(), &grid, start, &targets).unwrap();
    for leg in &route.legs {
        println!("To {} in {} steps:", leg.target, leg.path.len() - 1);
        for p in &leg.path {
            println!("\t{}", p);
        }
    }
    for target in &route.skipped {
        println!("Skipped {}", target);
    }
    println!("Total: {} steps, cost {:.3}", route.steps(), route.cost());
}
