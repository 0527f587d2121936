//! Strictly Gridtoe - generalized tic-tac-toe game logic
//!
//! Two players alternate placing marks on a square board of side 3, 5 or 7.
//! The first player to fill a row, column, main diagonal or anti-diagonal
//! wins; a full board with no completed line is a draw.
//!
//! # Architecture
//!
//! - **Board**: fixed-size grid of [`Cell`]s addressed by [`Position`]
//! - **GameEngine**: move validation, turn order and terminal detection
//! - **Rules**: pure win/draw checks over a [`Board`]
//! - **Observer**: start/update/end notifications driven by a [`Session`]
//!
//! # Example
//!
//! ```
//! use strictly_gridtoe::{BoardSize, GameEngine, Player, Position};
//!
//! let mut game = GameEngine::with_size(BoardSize::Small);
//! for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     game.apply_move(Position::new(row, column))?;
//! }
//! assert!(game.is_terminal());
//! assert_eq!(game.winner(), Some(Player::X));
//! # Ok::<(), strictly_gridtoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod game;
mod invariants;
mod observer;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{Move, MoveError};
pub use board::{Board, BoardError};
pub use game::GameEngine;
pub use invariants::{EngineInvariants, Invariant, InvariantSet, InvariantViolation};
pub use observer::{GameObserver, TracingObserver};
pub use position::Position;
pub use rules::Line;
pub use session::Session;
pub use types::{BoardSize, Cell, GameStatus, Player};
