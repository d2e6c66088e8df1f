use grid_astar::grid::Grid;
use grid_astar::solver::{astar::AstarSolver, GridSolver};
use grid_astar::Point;

// In this example a path is found to one of two goals on a 3x3 grid with shape
//  ___
// |S G|
// | # |
// |  G|
//  ___
// where
// - \# marks an obstacle
// - S marks the start
// - G marks a goal
// The found path moves to the closest goal, which is the top one.

fn main() {
    let grid: Grid = "...\n.#.\n...".parse().unwrap();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let goals = [Point::new(2, 0), Point::new(2, 2)];
    let (selected_goal, path) = AstarSolver::new()
        .find_path_multiple_goals(&grid, start, &goals)
        .unwrap()
        .unwrap();
    println!("Selected goal: {}\n", selected_goal);
    println!("Path:");
    for p in path {
        println!("{}", p);
    }
}
