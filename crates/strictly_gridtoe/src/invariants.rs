//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. They are checked in debug builds and can be tested independently.

use crate::rules::{check_winner, is_draw};
use crate::{GameEngine, GameStatus, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: the move counter matches the board and the history.
pub struct MoveCountConsistent;

impl Invariant<GameEngine> for MoveCountConsistent {
    fn holds(game: &GameEngine) -> bool {
        let played = game.moves_played();
        played == game.board().occupied_count() && played == game.history().len()
    }

    fn description() -> &'static str {
        "Moves played equals marked cells and history length"
    }
}

/// Invariant: players alternate X, O, X, ... and the turn follows.
pub struct AlternatingTurn;

impl Invariant<GameEngine> for AlternatingTurn {
    fn holds(game: &GameEngine) -> bool {
        let history = game.history();
        let alternates = history.iter().enumerate().all(|(i, action)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            action.player == expected
        });
        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        alternates && game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariant: the recorded status agrees with the board.
pub struct StatusMatchesBoard;

impl Invariant<GameEngine> for StatusMatchesBoard {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::InProgress => check_winner(board).is_none() && !board.is_full(),
            GameStatus::Won(player) => check_winner(board) == Some(player),
            GameStatus::Draw => is_draw(board),
        }
    }

    fn description() -> &'static str {
        "Game status agrees with the lines on the board"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (MoveCountConsistent, AlternatingTurn, StatusMatchesBoard);
