use smallvec::SmallVec;

use crate::{grid::Grid, solver::GridSolver, Point, N_SMALLVEC_SIZE};

/// Uniform-cost search: the same search as [AstarSolver](super::astar::AstarSolver)
/// without a heuristic. Useful as a reference for path costs.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Point, f64); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &Grid, node: &Point) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    fn heuristic(&self, _: &Point, _: &Point) -> f64 {
        0.0
    }
}
