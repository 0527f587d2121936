//! The game host: greets the players, sets up the board and runs turns.

use crate::input::{InputProvider, parse_board_size, parse_move};
use crate::GameConfig;
use anyhow::{Context, Result};
use std::io::Write;
use strictly_gridtoe::{BoardSize, GameEngine, GameObserver, Player, Session};
use tracing::{debug, info, instrument, warn};

/// How a hosted game ended.
#[derive(Debug)]
pub enum HostOutcome {
    /// The game reached a win or a draw.
    Finished(GameEngine),
    /// Input ran out before the game ended.
    Abandoned,
}

/// Runs one game between two players sharing an input source.
///
/// Setup is a straight sequence: welcome, both player names, board type,
/// then moves until the game ends. Names and board type already present
/// in the config are not asked for.
pub struct GameHost<I, W> {
    config: GameConfig,
    input: I,
    out: W,
}

impl<I: InputProvider, W: Write> GameHost<I, W> {
    /// Creates a new host.
    pub fn new(config: GameConfig, input: I, out: W) -> Self {
        Self { config, input, out }
    }

    /// Plays one game to the end, notifying `observers` along the way.
    #[instrument(skip_all, fields(game = %self.config.game_name()))]
    pub fn run(&mut self, observers: Vec<Box<dyn GameObserver>>) -> Result<HostOutcome> {
        writeln!(self.out, "Welcome to {}!", self.config.game_name())?;

        let Some(player_x) = self.player_name(self.config.player_x().clone())? else {
            return self.goodbye();
        };
        let Some(player_o) = self.player_name(self.config.player_o().clone())? else {
            return self.goodbye();
        };
        let Some(size) = self.board_size()? else {
            return self.goodbye();
        };
        info!(%player_x, %player_o, %size, "Setup complete");

        let mut session = Session::new(GameEngine::with_size(size), observers);
        while !session.engine().is_terminal() {
            let player = session.engine().current_player();
            let name = match player {
                Player::X => &player_x,
                Player::O => &player_o,
            };
            let prompt = format!("{} ({}), input comma-separated row and column: ", name, player);
            let Some(line) = self.prompt(&prompt)? else {
                return self.goodbye();
            };

            let Some((row, column)) = parse_move(&line) else {
                debug!(%line, "Unparseable move");
                writeln!(self.out, "Please try again.")?;
                continue;
            };
            if let Err(e) = session.play_coordinates(row, column) {
                warn!(error = %e, row, column, "Move rejected");
                writeln!(self.out, "{}. Please try again.", e)?;
            }
        }

        let game = session.into_engine();
        match game.winner() {
            Some(Player::X) => writeln!(self.out, "{} (X) wins!", player_x)?,
            Some(Player::O) => writeln!(self.out, "{} (O) wins!", player_o)?,
            None => writeln!(self.out, "It's a draw!")?,
        }
        info!(status = %game.status(), moves_played = game.moves_played(), "Game over");
        Ok(HostOutcome::Finished(game))
    }

    /// Uses `preset` or asks until a non-empty name is given, then greets.
    fn player_name(&mut self, preset: Option<String>) -> Result<Option<String>> {
        let name = match preset {
            Some(name) => name,
            None => loop {
                match self.prompt("Input your name 👉: ")? {
                    None => return Ok(None),
                    Some(line) if line.trim().is_empty() => continue,
                    Some(line) => break line.trim().to_string(),
                }
            },
        };
        writeln!(self.out, "Hi {}!", name)?;
        Ok(Some(name))
    }

    /// Uses the configured board type or asks until a valid one is given.
    fn board_size(&mut self) -> Result<Option<BoardSize>> {
        if let Some(size) = self.config.board_size() {
            return Ok(Some(*size));
        }
        let prompt = format!(
            "Please select type of board for {}\n(input \"small\", \"middle\" or \"large\") 👉: ",
            self.config.game_name()
        );
        loop {
            match self.prompt(&prompt)? {
                None => return Ok(None),
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => match parse_board_size(&line) {
                    Some(size) => return Ok(Some(size)),
                    None => writeln!(self.out, "\nPlease try again.")?,
                },
            }
        }
    }

    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        self.input.read_line(prompt).context("Failed to read input")
    }

    fn goodbye(&mut self) -> Result<HostOutcome> {
        info!("Input closed before game end");
        writeln!(self.out, "\nGoodbye stranger...")?;
        Ok(HostOutcome::Abandoned)
    }
}
