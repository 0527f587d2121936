//! The game engine: turn order, move validation and terminal detection.

use crate::contracts::{Contract, MoveContract};
use crate::rules::{Line, winner_through};
use crate::{Board, BoardError, BoardSize, Cell, GameStatus, Move, MoveError, Player, Position};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Generalized tic-tac-toe engine.
///
/// Owns the board and everything needed to decide whose turn it is and
/// whether the game is over. Once the status leaves
/// [`GameStatus::InProgress`] it never changes again and every further
/// move is rejected with [`MoveError::GameAlreadyOver`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    moves_played: usize,
    last_move: Option<Position>,
    status: GameStatus,
    winning_line: Option<Line>,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new game on an empty board with the given side length.
    ///
    /// Hosts normally pick one of the [`BoardSize`]s; the engine itself
    /// accepts any side of at least 2.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if `size` is below 2.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self::from_board(Board::new(size)?))
    }

    /// Creates a new game on one of the supported board types.
    #[instrument]
    pub fn with_size(size: BoardSize) -> Self {
        Self::from_board(Board::with_size(size))
    }

    fn from_board(board: Board) -> Self {
        info!(size = board.size(), "Starting new game");
        Self {
            board,
            current_player: Player::X,
            moves_played: 0,
            last_move: None,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
        }
    }

    /// Replays a sequence of positions from a fresh game.
    ///
    /// # Errors
    ///
    /// Returns the first [`MoveError`] raised by the sequence.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(size: BoardSize, moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::with_size(size);
        for pos in moves {
            game.apply_move(*pos)?;
        }
        Ok(game)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success the turn passes to the other player and the lines
    /// through `pos` are checked for a win, then the board for a draw.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameAlreadyOver`] if the game has been won or drawn
    /// - [`MoveError::OutOfBounds`] if `pos` is off the board
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    ///
    /// The engine is unchanged after any error.
    #[instrument(skip(self), fields(position = %pos, player = %self.current_player))]
    pub fn apply_move(&mut self, pos: Position) -> Result<(), MoveError> {
        MoveContract::pre(self, &pos).inspect_err(|e| warn!(error = %e, "Move rejected"))?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        self.board
            .set(pos, Cell::Occupied(player))
            .map_err(|_| MoveError::out_of_bounds(pos, self.board.size()))?;
        self.moves_played += 1;
        self.last_move = Some(pos);
        self.history.push(Move::new(player, pos));
        self.current_player = player.opponent();
        debug!(moves_played = self.moves_played, "Move applied");

        self.evaluate(pos);

        #[cfg(debug_assertions)]
        crate::contracts::assert_postconditions(&before, self);

        Ok(())
    }

    /// Places the current player's mark at signed coordinates.
    ///
    /// Entry point for hosts reading raw integers: negative coordinates
    /// are reported as [`MoveError::OutOfBounds`] rather than wrapping.
    ///
    /// # Errors
    ///
    /// Same as [`GameEngine::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_coordinates(&mut self, row: isize, column: isize) -> Result<(), MoveError> {
        if self.is_terminal() {
            warn!("Move rejected after game end");
            return Err(MoveError::GameAlreadyOver);
        }
        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(column)) else {
            warn!("Negative coordinates rejected");
            return Err(MoveError::OutOfBounds {
                row,
                column,
                size: self.size(),
            });
        };
        self.apply_move(Position::new(r, c))
    }

    /// Updates the status after a move at `pos`.
    fn evaluate(&mut self, pos: Position) {
        if let Some((winner, line)) = winner_through(&self.board, pos) {
            info!(%winner, %line, moves_played = self.moves_played, "Line completed");
            self.status = GameStatus::Won(winner);
            self.winning_line = Some(line);
        } else if self.moves_played == self.board.capacity() {
            info!(moves_played = self.moves_played, "Board full, game drawn");
            self.status = GameStatus::Draw;
        }
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// The winner, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// The player whose turn it is.
    ///
    /// After the game ends this is the player who would have moved next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of accepted moves.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Position of the most recent accepted move.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The line that decided the game, if it was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.board.size()
    }
}
