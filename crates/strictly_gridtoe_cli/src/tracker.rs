//! Observer that prints game progress to the terminal.

use crate::render_board;
use std::io::Write;
use strictly_gridtoe::{GameEngine, GameObserver};
use tracing::warn;

/// Prints start, board updates and end of a game.
///
/// Write failures are logged and otherwise ignored; they never reach
/// the game.
pub struct TerminalTracker {
    name: String,
    out: Box<dyn Write>,
}

impl TerminalTracker {
    /// Creates a tracker writing to `out`.
    pub fn new(name: impl Into<String>, out: Box<dyn Write>) -> Self {
        Self {
            name: name.into(),
            out,
        }
    }

    /// Creates a tracker writing to standard output.
    pub fn stdout(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(std::io::stdout()))
    }

    fn emit(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            warn!(error = %e, "Tracker output failed");
        }
    }
}

impl GameObserver for TerminalTracker {
    fn on_start(&mut self, _game: &GameEngine) {
        let text = format!("{} did start!", self.name);
        self.emit(&text);
    }

    fn on_update(&mut self, game: &GameEngine) {
        let text = format!("Game did update:\n{}", render_board(game.board()));
        self.emit(&text);
    }

    fn on_end(&mut self, _game: &GameEngine) {
        let text = format!("{} did end", self.name);
        self.emit(&text);
    }
}

impl std::fmt::Debug for TerminalTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalTracker")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;
    use std::rc::Rc;
    use strictly_gridtoe::{BoardSize, Position, Session};

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::other("closed"))
        }
    }

    #[test]
    fn test_tracker_output() {
        let buf = SharedBuf::default();
        let tracker = TerminalTracker::new("TicTacToe", Box::new(buf.clone()));
        let mut session = Session::new(
            strictly_gridtoe::GameEngine::new(2).unwrap(),
            vec![Box::new(tracker)],
        );
        session.play(Position::new(0, 0)).unwrap();
        session.play(Position::new(1, 0)).unwrap();
        session.play(Position::new(0, 1)).unwrap();

        let output = String::from_utf8(buf.0.borrow().clone()).unwrap();
        assert!(output.starts_with("TicTacToe did start!\n"));
        assert_eq!(output.matches("Game did update:").count(), 3);
        assert!(output.ends_with("┗━━━┻━━━┛\nTicTacToe did end\n"));
    }

    #[test]
    fn test_write_failure_does_not_affect_game() {
        let tracker = TerminalTracker::new("TicTacToe", Box::new(Broken));
        let mut session = Session::new(
            strictly_gridtoe::GameEngine::with_size(BoardSize::Small),
            vec![Box::new(tracker)],
        );
        session.play(Position::new(1, 1)).unwrap();
        assert_eq!(session.engine().moves_played(), 1);
    }
}
