//! A single game driven from start to terminal state.

use crate::{GameEngine, GameObserver, MoveError, Position};
use tracing::{debug, instrument};

/// One game plus the observers watching it.
///
/// The session notifies `on_start` on construction, `on_update` after
/// every accepted move and `on_end` exactly once when the game ends.
/// Rejected moves produce no notification.
pub struct Session {
    engine: GameEngine,
    observers: Vec<Box<dyn GameObserver>>,
    ended: bool,
}

impl Session {
    /// Starts a session, notifying every observer.
    #[instrument(skip_all, fields(size = engine.size(), observers = observers.len()))]
    pub fn new(engine: GameEngine, observers: Vec<Box<dyn GameObserver>>) -> Self {
        let mut session = Self {
            engine,
            observers,
            ended: false,
        };
        session.notify(|observer, game| observer.on_start(game));
        session.finish_if_terminal();
        session
    }

    /// Applies a move and notifies observers if it was accepted.
    ///
    /// # Errors
    ///
    /// Propagates the engine's [`MoveError`] unchanged.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        self.engine.apply_move(pos)?;
        self.after_move();
        Ok(())
    }

    /// Applies a move given as signed coordinates.
    ///
    /// # Errors
    ///
    /// Propagates the engine's [`MoveError`] unchanged.
    #[instrument(skip(self))]
    pub fn play_coordinates(&mut self, row: isize, column: isize) -> Result<(), MoveError> {
        self.engine.apply_coordinates(row, column)?;
        self.after_move();
        Ok(())
    }

    /// The game being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Ends the session, returning the game.
    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    fn after_move(&mut self) {
        self.notify(|observer, game| observer.on_update(game));
        self.finish_if_terminal();
    }

    fn finish_if_terminal(&mut self) {
        if self.engine.is_terminal() && !self.ended {
            self.ended = true;
            debug!(status = %self.engine.status(), "Session finished");
            self.notify(|observer, game| observer.on_end(game));
        }
    }

    fn notify(&mut self, event: impl Fn(&mut Box<dyn GameObserver>, &GameEngine)) {
        for observer in &mut self.observers {
            event(observer, &self.engine);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("engine", &self.engine)
            .field("observers", &self.observers.len())
            .field("ended", &self.ended)
            .finish()
    }
}
