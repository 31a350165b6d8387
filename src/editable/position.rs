//! Row/column and direction types for cursor navigation.

use serde::{Deserialize, Serialize};

/// A row/column location in newline-delimited text (both 0-indexed).
///
/// Columns count characters from the start of the row, not visual cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RowCol {
    pub row: usize,
    pub col: usize,
}

impl RowCol {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Direction of a single navigation step.
///
/// For row moves `Backward` is up and `Forward` is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    /// Signed step applied to an offset or row
    pub const fn delta(self) -> isize {
        match self {
            Direction::Backward => -1,
            Direction::Forward => 1,
        }
    }
}
