//! Terminal host for strictly_gridtoe.
//!
//! Everything a two-player keyboard game needs around the engine:
//!
//! - **Cli**: command-line flags
//! - **Config**: optional TOML settings file
//! - **Input**: line-based prompts and move parsing
//! - **Render**: box-drawing board renderer
//! - **Tracker**: observer that prints game progress
//! - **Host**: the linear setup sequence and move loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod host;
mod input;
mod render;
mod tracker;

pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, GameConfig};
pub use host::{GameHost, HostOutcome};
pub use input::{InputProvider, LineInput, parse_board_size, parse_move};
pub use render::render_board;
pub use tracker::TerminalTracker;
