//! Win detection logic.

use crate::{Board, Cell, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A line of `size` cells that wins when filled by one mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// A horizontal line.
    #[display("row {}", _0)]
    Row(usize),
    /// A vertical line.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Positions along this line on a `size` board.
    pub fn positions(self, size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(move |i| match self {
            Line::Row(row) => Position::new(row, i),
            Line::Column(column) => Position::new(i, column),
            Line::MainDiagonal => Position::new(i, i),
            Line::AntiDiagonal => Position::new(i, size - 1 - i),
        })
    }
}

/// Lines passing through `pos`, in evaluation order.
///
/// Row, then column, then the main diagonal and the anti-diagonal for
/// positions that lie on them.
pub fn lines_through(pos: Position, size: usize) -> impl Iterator<Item = Line> {
    [
        Some(Line::Row(pos.row)),
        Some(Line::Column(pos.column)),
        pos.on_main_diagonal().then_some(Line::MainDiagonal),
        pos.on_anti_diagonal(size).then_some(Line::AntiDiagonal),
    ]
    .into_iter()
    .flatten()
}

/// Every line on a `size` board.
pub fn all_lines(size: usize) -> impl Iterator<Item = Line> {
    (0..size)
        .map(Line::Row)
        .chain((0..size).map(Line::Column))
        .chain([Line::MainDiagonal, Line::AntiDiagonal])
}

/// Returns the player owning every cell of `line`, if there is one.
pub fn line_winner(board: &Board, line: Line) -> Option<Player> {
    let mut cells = line.positions(board.size()).map(|pos| board.get(pos).ok());
    let first = cells.next()??.mark()?;
    cells
        .all(|cell| cell == Some(Cell::Occupied(first)))
        .then_some(first)
}

/// Checks the lines through the last move for a winner.
///
/// Only lines containing `pos` can have been completed by a move there,
/// so the rest of the board is not inspected. The first complete line in
/// [`lines_through`] order decides.
#[instrument(skip(board), fields(size = board.size()))]
pub fn winner_through(board: &Board, pos: Position) -> Option<(Player, Line)> {
    lines_through(pos, board.size())
        .find_map(|line| line_winner(board, line).map(|player| (player, line)))
}

/// Scans the whole board for a winner.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner(board: &Board) -> Option<Player> {
    all_lines(board.size()).find_map(|line| line_winner(board, line))
}
