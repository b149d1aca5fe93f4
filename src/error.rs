//! Error types for malformed puzzle input.

use thiserror::Error;

use crate::board::MAX_SIZE;

/// A board that cannot be searched.
///
/// Raised before any search starts; a search never produces one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPuzzle {
    #[error("board size {0} is outside the supported range 2..={max}", max = MAX_SIZE)]
    UnsupportedSize(usize),
    #[error("board must be square, got {width}x{height}")]
    NotSquare { width: usize, height: usize },
    #[error("a {size}x{size} board needs {expected} cells, found {found}")]
    CellCount {
        size: usize,
        expected: usize,
        found: usize,
    },
    #[error("tile {tile} is out of range for a board of {cells} cells")]
    TileOutOfRange { tile: u32, cells: usize },
    #[error("tile {0} appears more than once")]
    DuplicateTile(u8),
    #[error("board has no blank (0) cell")]
    MissingBlank,
    #[error("board has {0} blank (0) cells, expected exactly one")]
    MultipleBlanks(usize),
    #[error("goal is {goal}x{goal} but the start board is {start}x{start}")]
    GoalSizeMismatch { start: usize, goal: usize },
}
