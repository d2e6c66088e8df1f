use grid_astar::grid::Grid;
use grid_astar::solver::{astar::AstarSolver, GridSolver};
use grid_astar::Point;
use rand::prelude::*;

// A walker crosses a 12x8 grid while random cells toggle between walkable and blocked.
// After every tick the path is replanned from the current position.

const TOGGLES_PER_TICK: usize = 3;
const MAX_TICKS: usize = 50;

fn main() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut grid = Grid::new(12, 8).unwrap();
    let target = Point::new(11, 7);
    let mut position = Point::new(0, 0);
    let solver = AstarSolver::new();
    for tick in 0..MAX_TICKS {
        if position == target {
            println!("Reached {} after {} ticks", target, tick);
            return;
        }
        let mut toggled = 0;
        while toggled < TOGGLES_PER_TICK {
            let p = Point::new(
                rng.gen_range(0..grid.width() as i32),
                rng.gen_range(0..grid.height() as i32),
            );
            if p != position && p != target {
                grid.toggle(p).unwrap();
                toggled += 1;
            }
        }
        grid.update();
        match solver.find_path(&grid, position, target).unwrap() {
            Some(path) => {
                position = path.get(1).copied().unwrap_or(target);
                println!("Tick {}: {} steps left, moved to {}", tick, path.len() - 1, position);
            }
            None => println!("Tick {}: no path from {}, waiting", tick, position),
        }
    }
    println!("{}", grid);
    println!("Gave up at {}", position);
}
