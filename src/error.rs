use crate::Point;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("Coordinate {point} lies outside the {width}x{height} grid")]
    InvalidCoordinate {
        point: Point,
        width: usize,
        height: usize,
    },
    #[error("A {width}x{height} grid has coordinates that do not fit an i32")]
    DimensionsTooLarge { width: usize, height: usize },
    #[error("Matrix column {column} has {found} cells, expected {expected}")]
    RaggedMatrix {
        column: usize,
        expected: usize,
        found: usize,
    },
    #[error("Cell {point} holds {value}, expected 0 (walkable) or 1 (blocked)")]
    InvalidCell { point: Point, value: u8 },
    #[error("Unexpected map character {value:?} at {point}")]
    InvalidMapChar { point: Point, value: char },
    #[error("Refusing to enumerate paths on {cells} cells (limit is {max_cells})")]
    GridTooLarge { cells: usize, max_cells: usize },
    #[error("Search gave up after expanding {limit} nodes")]
    ExpansionLimitReached { limit: usize },
}
