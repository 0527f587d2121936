//! Observer capability for game lifecycle notifications.

use crate::GameEngine;
use tracing::info;

/// Receives lifecycle notifications for one game.
///
/// Observers are driven by the host (see [`crate::Session`]), never by
/// the engine. They get a shared reference only, so nothing an observer
/// does can change the game.
pub trait GameObserver {
    /// Called once when the game starts.
    fn on_start(&mut self, _game: &GameEngine) {}

    /// Called after every accepted move.
    fn on_update(&mut self, _game: &GameEngine) {}

    /// Called once when the game reaches a terminal state.
    fn on_end(&mut self, _game: &GameEngine) {}
}

/// Observer that records lifecycle events as tracing events.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    name: String,
}

impl TracingObserver {
    /// Creates an observer labelling its events with `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl GameObserver for TracingObserver {
    fn on_start(&mut self, game: &GameEngine) {
        info!(game = %self.name, size = game.size(), "Game did start");
    }

    fn on_update(&mut self, game: &GameEngine) {
        info!(
            game = %self.name,
            moves_played = game.moves_played(),
            last_move = ?game.last_move(),
            next = %game.current_player(),
            "Game did update"
        );
    }

    fn on_end(&mut self, game: &GameEngine) {
        info!(game = %self.name, status = %game.status(), "Game did end");
    }
}
