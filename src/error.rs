//! Error types

use thiserror::Error;

/// Contract violations raised by the maze engine
///
/// Rejected moves and empty search results are not errors; they are
/// reported through return values instead.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze dimensions {width}x{height} are too small, both must be at least 3")]
    InvalidDimensions { width: usize, height: usize },

    #[error("maze dimensions {width}x{height} must both be odd for generation")]
    EvenDimensions { width: usize, height: usize },

    #[error("cell x={x}, y={y} is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("unexpected character `{symbol}` at x={x}, y={y}")]
    UnexpectedSymbol { symbol: char, x: usize, y: usize },

    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("maze text is empty")]
    Empty,

    #[error("unknown direction `{0}`, expected one of U, R, D, L")]
    UnknownDirection(char),
}

pub type Result<T> = std::result::Result<T, MazeError>;
