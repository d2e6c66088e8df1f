use grid_astar::grid::Grid;
use grid_astar::solver::{astar::AstarSolver, path_cost, GridSolver};
use grid_astar::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have an 8-neighborhood, but the obstacle may not be cut diagonally.

fn main() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set_walkable(Point::new(1, 1), false).unwrap();
    grid.generate_components();
    println!("{}", grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let path = AstarSolver::new()
        .find_path(&grid, start, end)
        .unwrap()
        .unwrap();
    println!("Path:");
    for p in &path {
        println!("{}", p);
    }
    println!("Cost: {:.3}", path_cost(&path));
}
