//! Row/column addressing for square boards.

use serde::{Deserialize, Serialize};

/// A cell address on a square board, zero-based.
///
/// A position carries no board size of its own; whether it is on the
/// board is decided by [`Position::is_within`] against a concrete side
/// length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Checks that both coordinates are below `size`.
    pub fn is_within(self, size: usize) -> bool {
        self.row < size && self.column < size
    }

    /// Checks if the position lies on the main diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// Checks if the position lies on the anti-diagonal of a `size` board.
    pub fn on_anti_diagonal(self, size: usize) -> bool {
        self.row + self.column + 1 == size
    }

    /// Row-major index into a `size` board.
    pub(crate) fn index(self, size: usize) -> usize {
        self.row * size + self.column
    }

    /// Inverse of [`Position::index`].
    pub(crate) fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
