use crate::grid::Grid;
use crate::search;
use crate::{is_adjacent, step_cost, Point, Result};
use itertools::Itertools;
use log::{info, warn};

pub mod astar;
pub mod dijkstra;

/// Summed move cost of a path, counting [CARDINAL_COST](crate::CARDINAL_COST) for straight
/// and [DIAGONAL_COST](crate::DIAGONAL_COST) for diagonal steps.
pub fn path_cost(path: &[Point]) -> f64 {
    path.iter()
        .tuple_windows()
        .map(|(a, b)| step_cost(a, b))
        .sum()
}

/// Number of moves in a path.
pub fn steps(path: &[Point]) -> usize {
    path.len().saturating_sub(1)
}

/// Checks that a path is non-empty, only visits walkable cells (the first one excepted),
/// consists of legal single moves and never visits a coordinate twice.
pub fn is_valid_path(grid: &Grid, path: &[Point]) -> bool {
    !path.is_empty()
        && path.iter().all(|p| grid.in_bounds(*p))
        && path.iter().skip(1).all(|p| grid.can_move_to_simple(*p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| is_adjacent(a, b) && grid.can_move_to(*b, *a))
        && path.iter().all_unique()
}

/// A search strategy on a [Grid]. Implementors decide on the heuristic and the
/// successors of a node; the search itself is shared.
pub trait GridSolver {
    type Successors: IntoIterator<Item = (Point, f64)>;

    fn heuristic(&self, p1: &Point, p2: &Point) -> f64;

    fn successors(&self, grid: &Grid, node: &Point) -> Self::Successors;

    /// Maximum number of expanded nodes before a search gives up. Unlimited by default.
    fn expansion_limit(&self) -> Option<usize> {
        None
    }

    /// Computes a path from start to target, both included. Returns `Ok(None)` if the
    /// target cannot be reached and fails if either point lies outside the grid.
    fn find_path(&self, grid: &Grid, start: Point, target: Point) -> Result<Option<Vec<Point>>> {
        if grid.is_empty() {
            return Ok(None);
        }
        grid.node(start)?;
        grid.node(target)?;
        // Components only tell something about walkable starts.
        let components_valid = !grid.components_dirty && grid.can_move_to_simple(start);
        if components_valid && grid.unreachable(&start, &target) {
            info!("{} is not reachable from {}", target, start);
            return Ok(None);
        }
        let result = search::astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &target),
            |point| *point == target,
            self.expansion_limit(),
        )?;
        if result.is_none() && components_valid {
            warn!("Reachable target could not be pathed to, are the components correct?");
        }
        Ok(result.map(|(path, _cost)| path))
    }

    /// Computes a path from the start to the closest of the given goals and returns the
    /// selected goal in addition to the found path. The heuristic is the minimum over all
    /// goals. Otherwise behaves like [find_path](Self::find_path).
    fn find_path_multiple_goals(
        &self,
        grid: &Grid,
        start: Point,
        goals: &[Point],
    ) -> Result<Option<(Point, Vec<Point>)>> {
        if goals.is_empty() || grid.is_empty() {
            return Ok(None);
        }
        grid.node(start)?;
        for goal in goals {
            grid.node(*goal)?;
        }
        let components_valid = !grid.components_dirty && grid.can_move_to_simple(start);
        if components_valid && goals.iter().all(|goal| grid.unreachable(&start, goal)) {
            info!("None of the {} goals are reachable from {}", goals.len(), start);
            return Ok(None);
        }
        let result = search::astar(
            &start,
            |node| self.successors(grid, node),
            |point| {
                goals
                    .iter()
                    .map(|goal| self.heuristic(point, goal))
                    .fold(f64::INFINITY, f64::min)
            },
            |point| goals.contains(point),
            self.expansion_limit(),
        )?;
        Ok(result.and_then(|(path, _cost)| Some((*path.last()?, path))))
    }
}
