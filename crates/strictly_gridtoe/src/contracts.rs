//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, action)} action {Q(before, after)}.

use crate::invariants::{EngineInvariants, InvariantSet, InvariantViolation};
use crate::{GameEngine, MoveError, Position};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Contract for placing the current player's mark.
///
/// Preconditions, checked in order:
/// - the game is still in progress
/// - the position is on the board
/// - the cell is empty
///
/// Postconditions:
/// - exactly one more move has been played
/// - marks already on the board are unchanged
/// - all [`EngineInvariants`] hold
pub struct MoveContract;

impl Contract<GameEngine, Position> for MoveContract {
    #[instrument(skip(game))]
    fn pre(game: &GameEngine, pos: &Position) -> Result<(), MoveError> {
        if game.is_terminal() {
            return Err(MoveError::GameAlreadyOver);
        }
        if !game.board().contains(*pos) {
            return Err(MoveError::out_of_bounds(*pos, game.size()));
        }
        if !game.board().is_empty(*pos) {
            return Err(MoveError::CellOccupied(*pos));
        }
        Ok(())
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = EngineInvariants::check_all(after).err().unwrap_or_default();

        if after.moves_played() != before.moves_played() + 1 {
            violations.push(InvariantViolation::new("Exactly one move is added per turn"));
        }

        let monotonic = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .all(|(old, new)| old.is_empty() || old == new);
        if !monotonic {
            violations.push(InvariantViolation::new("Marks are never removed or changed"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Panics if the move postconditions fail. Debug builds only.
#[cfg(debug_assertions)]
pub(crate) fn assert_postconditions(before: &GameEngine, after: &GameEngine) {
    if let Err(violations) = MoveContract::post(before, after) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::error!(%descriptions, "Move postcondition failed");
        panic!("Move postcondition failed: {}", descriptions);
    }
}
