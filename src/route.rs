use log::info;

use crate::grid::Grid;
use crate::solver::{path_cost, steps, GridSolver};
use crate::{Point, Result};

/// One successfully planned segment of a [Route].
#[derive(Clone, Debug, PartialEq)]
pub struct Leg {
    pub target: Point,
    pub path: Vec<Point>,
}

/// The result of visiting several targets in order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Route {
    pub legs: Vec<Leg>,
    /// Targets that could not be reached from where the route stood at the time.
    pub skipped: Vec<Point>,
}

impl Route {
    pub fn steps(&self) -> usize {
        self.legs.iter().map(|leg| steps(&leg.path)).sum()
    }
    pub fn cost(&self) -> f64 {
        self.legs.iter().map(|leg| path_cost(&leg.path)).sum()
    }
    /// Where the route ends, if any leg was planned.
    pub fn end(&self) -> Option<Point> {
        self.legs.last().map(|leg| leg.target)
    }
    /// The concatenated path of all legs without repeating the shared endpoints.
    pub fn full_path(&self) -> Vec<Point> {
        let mut full: Vec<Point> = Vec::new();
        for leg in &self.legs {
            let skip = usize::from(full.last() == leg.path.first());
            full.extend(leg.path.iter().skip(skip));
        }
        full
    }
}

/// Visits `targets` in the given order, starting from `start`. Each leg departs from the
/// last target that was reached; targets without a path are skipped.
pub fn plan_route<S: GridSolver>(
    solver: &S,
    grid: &Grid,
    start: Point,
    targets: &[Point],
) -> Result<Route> {
    let mut route = Route::default();
    let mut origin = start;
    for &target in targets {
        match solver.find_path(grid, origin, target)? {
            Some(path) => {
                route.legs.push(Leg { target, path });
                origin = target;
            }
            None => {
                info!("Skipping {}: not reachable from {}", target, origin);
                route.skipped.push(target);
            }
        }
    }
    Ok(route)
}
