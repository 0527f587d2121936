//! Line-based input from the players.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use strictly_gridtoe::BoardSize;
use tracing::{debug, instrument};

/// Source of player input, one line per prompt.
pub trait InputProvider {
    /// Shows `prompt` and reads one line without its line ending.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Input provider over any buffered reader, prompting on a writer.
#[derive(Debug)]
pub struct LineInput<R, W> {
    reader: R,
    prompt_out: W,
}

impl<R: BufRead, W: Write> LineInput<R, W> {
    /// Creates a new line input.
    pub fn new(reader: R, prompt_out: W) -> Self {
        Self { reader, prompt_out }
    }
}

impl LineInput<io::StdinLock<'static>, io::Stdout> {
    /// Reads from standard input, prompting on standard output.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputProvider for LineInput<R, W> {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.prompt_out, "{}", prompt)?;
        self.prompt_out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            debug!("Input exhausted");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']);
        Ok(Some(trimmed.to_string()))
    }
}

/// Parses a move typed as `row, column`.
///
/// Whitespace anywhere is ignored and components after the second are
/// dropped. Returns `None` unless the first two components are integers.
#[instrument]
pub fn parse_move(input: &str) -> Option<(isize, isize)> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parts = compact.split(',');
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    Some((row, column))
}

/// Parses a board type name (`small`, `middle` or `large`).
#[instrument]
pub fn parse_board_size(input: &str) -> Option<BoardSize> {
    BoardSize::from_str(input.trim()).ok()
}
