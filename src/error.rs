//! Error kinds shared by every data structure and algorithm in the crate.

use crate::point::Point;

/// Grid axis named in an out-of-range error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{axis} index {index} out of bounds for grid of size {n}")]
    OutOfRange { axis: Axis, index: usize, n: usize },

    #[error("{0} underflow")]
    EmptyContainer(&'static str),

    #[error("duplicate point {0}")]
    DuplicatePoint(Point),

    #[error("expected {expected} points, missing point #{index}")]
    MissingPoint { index: usize, expected: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
