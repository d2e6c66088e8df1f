use smallvec::SmallVec;

use crate::{grid::Grid, solver::GridSolver, Point, N_SMALLVEC_SIZE};

/// A* with the Chebyshev distance as heuristic. Straight moves cost 1 and diagonal
/// moves √2, so the heuristic never overestimates and expanded nodes never need to be
/// reopened.
#[derive(Clone, Debug, Default)]
pub struct AstarSolver {
    pub expansion_limit: Option<usize>,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            expansion_limit: None,
        }
    }
    pub fn with_expansion_limit(limit: usize) -> AstarSolver {
        AstarSolver {
            expansion_limit: Some(limit),
        }
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Point, f64); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &Grid, node: &Point) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    fn heuristic(&self, p1: &Point, p2: &Point) -> f64 {
        p1.move_distance(p2) as f64
    }

    fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }
}
