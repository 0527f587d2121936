//! Game rules for generalized tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board. Rules are
//! separated from board storage so the engine, the invariant checks and
//! hosts can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, all_lines, check_winner, line_winner, lines_through, winner_through};
