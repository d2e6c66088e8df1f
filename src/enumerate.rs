use fxhash::FxHashSet;
use log::debug;

use crate::grid::Grid;
use crate::{GridError, Point, Result};

/// Largest grid (in cells) [PathEnumerator::new] is willing to enumerate.
pub const DEFAULT_MAX_CELLS: usize = 144;

/// Enumerates every simple path between two cells with a depth-first search. The number
/// of paths grows exponentially with the amount of open space, so this is only meant for
/// small verification grids; larger grids are refused.
#[derive(Clone, Debug)]
pub struct PathEnumerator {
    pub max_cells: usize,
}

impl Default for PathEnumerator {
    fn default() -> PathEnumerator {
        PathEnumerator::new()
    }
}

struct Dfs<'a> {
    grid: &'a Grid,
    target: Point,
    visited: FxHashSet<Point>,
    prefix: Vec<Point>,
    paths: Vec<Vec<Point>>,
}

impl Dfs<'_> {
    fn visit(&mut self, current: Point) {
        if !self.grid.can_move_to_simple(current) || self.visited.contains(&current) {
            return;
        }
        self.visited.insert(current);
        self.prefix.push(current);
        if current == self.target {
            self.paths.push(self.prefix.clone());
        } else {
            for neighbor in self.grid.neighborhood_points(&current) {
                self.visit(neighbor);
            }
        }
        // Restore the branch state so every sibling starts from the same prefix.
        self.prefix.pop();
        self.visited.remove(&current);
    }
}

impl PathEnumerator {
    pub fn new() -> PathEnumerator {
        PathEnumerator {
            max_cells: DEFAULT_MAX_CELLS,
        }
    }

    /// All simple paths from `start` to `target` through walkable cells, using the same
    /// moves as the solvers, in depth-first discovery order. A blocked start yields no
    /// paths.
    pub fn find_all_paths(&self, grid: &Grid, start: Point, target: Point) -> Result<Vec<Vec<Point>>> {
        if grid.is_empty() {
            return Ok(Vec::new());
        }
        grid.node(start)?;
        grid.node(target)?;
        let cells = grid.width() * grid.height();
        if cells > self.max_cells {
            return Err(GridError::GridTooLarge {
                cells,
                max_cells: self.max_cells,
            });
        }
        let mut dfs = Dfs {
            grid,
            target,
            visited: FxHashSet::default(),
            prefix: Vec::new(),
            paths: Vec::new(),
        };
        dfs.visit(start);
        debug!(
            "Enumerated {} paths from {} to {}",
            dfs.paths.len(),
            start,
            target
        );
        Ok(dfs.paths)
    }
}
