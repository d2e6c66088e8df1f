use log::debug;

use crate::enumerate::PathEnumerator;
use crate::grid::Grid;
use crate::solver::path_cost;
use crate::{Point, Result};

/// Tolerance used when comparing summed move costs.
pub const COST_EPSILON: f64 = 1e-9;

/// Outcome of checking a path against every simple path between its endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Verification {
    /// Number of simple paths between the endpoints.
    pub path_count: usize,
    /// Node count of the shortest enumerated path, if any path exists.
    pub shortest_len: Option<usize>,
    /// Lowest summed move cost among the enumerated paths, if any path exists.
    pub lowest_cost: Option<f64>,
    /// The checked path has as few nodes as the shortest enumerated one.
    pub hop_optimal: bool,
    /// The checked path is as cheap as the cheapest enumerated one.
    pub cost_optimal: bool,
}

impl Verification {
    fn vacuous() -> Verification {
        Verification {
            path_count: 0,
            shortest_len: None,
            lowest_cost: None,
            hop_optimal: true,
            cost_optimal: true,
        }
    }
}

/// Brute-force check of solver output. Optimality is judged by node count, as in
/// [is_optimal](Self::is_optimal); the summed move cost is reported alongside since the
/// two may disagree once diagonal moves are involved.
#[derive(Clone, Debug, Default)]
pub struct Verifier {
    pub enumerator: PathEnumerator,
}

impl Verifier {
    pub fn new() -> Verifier {
        Verifier {
            enumerator: PathEnumerator::new(),
        }
    }

    /// Enumerates all paths between the endpoints of `path` and compares `path` against
    /// the best of them. A missing or empty path, or one whose endpoints are not
    /// connected at all, cannot be falsified and counts as optimal.
    pub fn verify(&self, grid: &Grid, path: Option<&[Point]>) -> Result<Verification> {
        let Some(path) = path.filter(|p| !p.is_empty()) else {
            return Ok(Verification::vacuous());
        };
        let (first, last) = (path[0], path[path.len() - 1]);
        let all_paths = self.enumerator.find_all_paths(grid, first, last)?;
        if all_paths.is_empty() {
            return Ok(Verification::vacuous());
        }
        let shortest_len = all_paths.iter().map(Vec::len).min();
        let lowest_cost = all_paths
            .iter()
            .map(|p| path_cost(p))
            .min_by(f64::total_cmp);
        let hop_optimal = shortest_len == Some(path.len());
        let cost_optimal = lowest_cost.is_some_and(|c| path_cost(path) - c <= COST_EPSILON);
        debug!(
            "Checked a {} node path against {} alternatives: hop optimal {}, cost optimal {}",
            path.len(),
            all_paths.len(),
            hop_optimal,
            cost_optimal
        );
        Ok(Verification {
            path_count: all_paths.len(),
            shortest_len,
            lowest_cost,
            hop_optimal,
            cost_optimal,
        })
    }

    /// Whether `path` has as few nodes as the shortest simple path between its endpoints.
    pub fn is_optimal(&self, grid: &Grid, path: Option<&[Point]>) -> Result<bool> {
        self.verify(grid, path).map(|v| v.hop_optimal)
    }

    /// Whether `path` is as cheap as the cheapest simple path between its endpoints.
    pub fn is_cost_optimal(&self, grid: &Grid, path: Option<&[Point]>) -> Result<bool> {
        self.verify(grid, path).map(|v| v.cost_optimal)
    }
}
