use core::fmt;
use std::str::FromStr;

use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::node::Node;
use crate::{is_adjacent, is_diagonal, step_cost, GridError, Point, Result, MOORE_OFFSETS};

/// [Grid] owns one [Node] per coordinate of a `width` x `height` rectangle. Cells are
/// either walkable or blocked; the set of coordinates never changes after construction.
///
/// In addition to the raw walkability it maintains connected components in a
/// [UnionFind] structure, which lets solvers reject unreachable targets without
/// flood-filling the grid.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    nodes: Vec<Node>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for Grid {
    fn default() -> Grid {
        Grid {
            width: 0,
            height: 0,
            nodes: Vec::new(),
            components: UnionFind::new(0),
            components_dirty: false,
        }
    }
}

/// Converts a cell index along one axis into a coordinate.
fn coord(v: usize, width: usize, height: usize) -> Result<i32> {
    i32::try_from(v).map_err(|_| GridError::DimensionsTooLarge { width, height })
}

impl Grid {
    /// Creates a grid on which every cell is walkable. Fails if a coordinate along either
    /// axis would not fit an `i32`.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        coord(width, width, height)?;
        coord(height, width, height)?;
        let cells = width
            .checked_mul(height)
            .ok_or(GridError::DimensionsTooLarge { width, height })?;
        let nodes = (0..cells)
            .map(|ix| {
                let x = coord(ix / height, width, height)?;
                let y = coord(ix % height, width, height)?;
                Ok(Node::new(Point::new(x, y), true))
            })
            .collect::<Result<Vec<Node>>>()?;
        let mut grid = Grid {
            width,
            height,
            nodes,
            components: UnionFind::new(cells),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    /// Builds a grid from a 0/1 matrix indexed as `matrix[x][y]`, where 0 marks a walkable
    /// and 1 a blocked cell. An empty matrix gives a zero-sized grid.
    pub fn from_matrix<R: AsRef<[u8]>>(matrix: &[R]) -> Result<Grid> {
        let width = matrix.len();
        let height = matrix.first().map_or(0, |column| column.as_ref().len());
        let mut grid = Grid::new(width, height)?;
        for (x, column) in matrix.iter().enumerate() {
            let column = column.as_ref();
            if column.len() != height {
                return Err(GridError::RaggedMatrix {
                    column: x,
                    expected: height,
                    found: column.len(),
                });
            }
            for (y, &value) in column.iter().enumerate() {
                let ix = grid.get_ix(x, y);
                grid.nodes[ix].walkable = match value {
                    0 => true,
                    1 => false,
                    _ => {
                        return Err(GridError::InvalidCell {
                            point: Point::new(coord(x, width, height)?, coord(y, width, height)?),
                            value,
                        })
                    }
                };
            }
        }
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }
    fn get_ix(&self, x: usize, y: usize) -> usize {
        x * self.height + y
    }
    fn get_ix_point(&self, point: &Point) -> usize {
        self.get_ix(point.x as usize, point.y as usize)
    }
    fn check_bounds(&self, point: Point) -> Result<()> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(GridError::InvalidCoordinate {
                point,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn node(&self, point: Point) -> Result<&Node> {
        self.check_bounds(point)?;
        Ok(&self.nodes[self.get_ix_point(&point)])
    }
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
    pub fn is_walkable(&self, point: Point) -> Result<bool> {
        self.node(point).map(Node::walkable)
    }
    /// Walkability of a coordinate, treating everything outside the grid as blocked.
    pub fn can_move_to_simple(&self, point: Point) -> bool {
        self.in_bounds(point) && self.nodes[self.get_ix_point(&point)].walkable
    }
    /// Whether a single move from `from` to the adjacent `to` is allowed. Diagonal moves
    /// additionally require both orthogonal cells next to the corner to be walkable.
    pub fn can_move_to(&self, to: Point, from: Point) -> bool {
        debug_assert!(is_adjacent(&from, &to));
        self.can_move_to_simple(to)
            && (!is_diagonal(&from, &to)
                || (self.can_move_to_simple(Point::new(to.x, from.y))
                    && self.can_move_to_simple(Point::new(from.x, to.y))))
    }

    /// Walkable neighbours of `point` that can be entered with one move, in offset order
    /// (`dx` outer, `dy` inner, both from -1 to 1). The walkability of `point` itself is
    /// not taken into account.
    pub fn neighbors(&self, point: Point) -> Result<SmallVec<[Point; 8]>> {
        self.check_bounds(point)?;
        Ok(self.neighborhood_points(&point))
    }
    pub(crate) fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; 8]> {
        MOORE_OFFSETS
            .iter()
            .map(|&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.can_move_to(*p, *point))
            .collect()
    }
    /// Neighbours paired with the cost of moving to them.
    pub(crate) fn neighborhood_points_and_cost(&self, point: &Point) -> SmallVec<[(Point, f64); 8]> {
        self.neighborhood_points(point)
            .into_iter()
            .map(|p| (p, step_cost(point, &p)))
            .collect()
    }

    /// Updates the walkability of a cell. Joins newly connected components and flags the
    /// components as dirty if they are (potentially) broken apart into multiple.
    pub fn set_walkable(&mut self, point: Point, walkable: bool) -> Result<()> {
        self.check_bounds(point)?;
        let ix = self.get_ix_point(&point);
        if self.nodes[ix].walkable == walkable {
            return Ok(());
        }
        self.nodes[ix].walkable = walkable;
        if walkable {
            for n in self.neighborhood_points(&point) {
                self.components.union(ix, self.get_ix_point(&n));
            }
        } else {
            self.components_dirty = true;
        }
        Ok(())
    }
    /// Flips the walkability of a cell and returns the new value.
    pub fn toggle(&mut self, point: Point) -> Result<bool> {
        let walkable = !self.is_walkable(point)?;
        self.set_walkable(point, walkable)?;
        Ok(walkable)
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> Result<usize> {
        self.check_bounds(*point)?;
        Ok(self.components.find(self.get_ix_point(point)))
    }
    /// Checks if start and goal are on the same component. Only meaningful while the
    /// components are not dirty, see [update](Self::update).
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.can_move_to_simple(*start) && self.can_move_to_simple(*goal) {
            let start_ix = self.get_ix_point(start);
            let goal_ix = self.get_ix_point(goal);
            !self.components.equiv(start_ix, goal_ix)
        } else {
            start != goal
        }
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.width * self.height);
        self.components_dirty = false;
        for ix in 0..self.nodes.len() {
            let node = self.nodes[ix];
            if !node.walkable {
                continue;
            }
            let point = node.point();
            // Looking forward is enough, every backward link is someone else's forward one.
            for p in [
                Point::new(point.x, point.y + 1),
                Point::new(point.x + 1, point.y - 1),
                Point::new(point.x + 1, point.y),
                Point::new(point.x + 1, point.y + 1),
            ] {
                if self.can_move_to(p, point) {
                    let n_ix = self.get_ix_point(&p);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let walkable = self.nodes[self.get_ix(x, y)].walkable;
                write!(f, "{}", if walkable { '.' } else { '#' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses an ASCII map with one text line per row `y`. `.` is walkable and `#` blocked;
/// the markers `S`, `G` and `T` are read as walkable cells.
impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Grid> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.chars().count());
        let mut grid = Grid::new(width, height)?;
        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(GridError::RaggedMatrix {
                    column: y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                let ix = grid.get_ix(x, y);
                grid.nodes[ix].walkable = match c {
                    '.' | 'S' | 'G' | 'T' => true,
                    '#' => false,
                    value => {
                        return Err(GridError::InvalidMapChar {
                            point: Point::new(coord(x, width, height)?, coord(y, width, height)?),
                            value,
                        })
                    }
                };
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}
