use grid_util::point::Point;

use crate::{CARDINAL_COST, DIAGONAL_COST};

/// Offsets of the Moore neighbourhood in the order neighbours are reported:
/// `dx` from -1 to 1 in the outer loop, `dy` from -1 to 1 in the inner loop.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether `b` is one king move away from `a`.
pub fn is_adjacent(a: &Point, b: &Point) -> bool {
    a.move_distance(b) == 1
}

/// Whether the step from `a` to `b` changes both coordinates.
pub fn is_diagonal(a: &Point, b: &Point) -> bool {
    a.x != b.x && a.y != b.y
}

/// Cost of a single move between two adjacent points.
pub fn step_cost(a: &Point, b: &Point) -> f64 {
    if is_diagonal(a, b) {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_dx_major() {
        let around: Vec<Point> = MOORE_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(5 + dx, 5 + dy))
            .collect();
        assert_eq!(around[0], Point::new(4, 4));
        assert_eq!(around[1], Point::new(4, 5));
        assert_eq!(around[7], Point::new(6, 6));
        assert!(!around.contains(&Point::new(5, 5)));
        assert!(around.iter().all(|p| is_adjacent(&Point::new(5, 5), p)));
    }

    #[test]
    fn step_costs() {
        let p = Point::new(1, 1);
        assert_eq!(step_cost(&p, &Point::new(1, 2)), CARDINAL_COST);
        assert_eq!(step_cost(&p, &Point::new(2, 2)), DIAGONAL_COST);
        assert!(!is_adjacent(&p, &Point::new(3, 1)));
        assert!(!is_adjacent(&p, &p));
    }
}
