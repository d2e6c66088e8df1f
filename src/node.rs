use crate::Point;
use std::hash::{Hash, Hasher};

/// A single grid cell. Identity is the coordinate; the walkability flag is the only
/// mutable state and is changed through [Grid](crate::grid::Grid).
#[derive(Copy, Clone, Debug)]
pub struct Node {
    point: Point,
    pub(crate) walkable: bool,
}

impl Node {
    pub fn new(point: Point, walkable: bool) -> Node {
        Node { point, walkable }
    }
    pub fn point(&self) -> Point {
        self.point
    }
    pub fn walkable(&self) -> bool {
        self.walkable
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state);
    }
}
