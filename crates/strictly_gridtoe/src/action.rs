//! First-class move types.
//!
//! Moves are domain events, not side effects. An accepted move is
//! recorded in the engine's history; a rejected one is reported as a
//! [`MoveError`] and leaves the engine untouched.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when applying a move.
///
/// Every variant is recoverable: the host reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position is outside `[0, size)` on at least one axis.
    #[display("Position ({}, {}) is outside the {}x{} board", row, column, size, size)]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        column: isize,
        /// Side length of the board.
        size: usize,
    },

    /// The cell at the position already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl MoveError {
    /// Out-of-bounds error for an unsigned position.
    pub(crate) fn out_of_bounds(pos: Position, size: usize) -> Self {
        Self::OutOfBounds {
            row: isize::try_from(pos.row).unwrap_or(isize::MAX),
            column: isize::try_from(pos.column).unwrap_or(isize::MAX),
            size,
        }
    }
}

impl std::error::Error for MoveError {}
