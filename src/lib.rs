//! # grid_astar
//!
//! Shortest paths on a walkability grid with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm). Movement is 8-directional:
//! straight moves cost [CARDINAL_COST] and diagonal moves [DIAGONAL_COST], and a
//! diagonal move is only allowed if both orthogonal cells it passes are walkable. The
//! heuristic is the [Chebyshev distance](https://en.wikipedia.org/wiki/Chebyshev_distance).
//!
//! Besides the solvers, the crate contains an exhaustive enumerator of all simple paths
//! between two cells and a [Verifier](verify::Verifier) that uses it to check on small
//! grids that A* returned a shortest path. Connected components of the grid are kept up
//! to date to avoid flood-filling behaviour if no path exists.
//!
//! ```
//! use grid_astar::{grid::Grid, solver::{astar::AstarSolver, GridSolver}, Point};
//!
//! let grid: Grid = "....\n.##.\n....".parse().unwrap();
//! let path = AstarSolver::new()
//!     .find_path(&grid, Point::new(0, 0), Point::new(3, 2))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(path.first(), Some(&Point::new(0, 0)));
//! assert_eq!(path.last(), Some(&Point::new(3, 2)));
//! ```
pub mod enumerate;
mod error;
pub mod grid;
pub mod node;
mod point;
pub mod route;
mod search;
pub mod solver;
pub mod verify;

pub use error::{GridError, Result};
pub use grid_util::point::Point;
pub use point::{is_adjacent, is_diagonal, step_cost, MOORE_OFFSETS};

/// Cost of a horizontal or vertical move.
pub const CARDINAL_COST: f64 = 1.0;
/// Cost of a diagonal move.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

const N_SMALLVEC_SIZE: usize = 8;
