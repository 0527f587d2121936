//! Command-line interface for gridtoe.

use clap::Parser;
use std::path::PathBuf;
use strictly_gridtoe::BoardSize;

/// Gridtoe - two-player tic-tac-toe on 3x3, 5x5 or 7x7 boards
#[derive(Parser, Debug)]
#[command(name = "gridtoe")]
#[command(about = "Two-player tic-tac-toe on small, middle or large boards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board type (small, middle or large). Prompts if not given.
    #[arg(short, long)]
    pub size: Option<BoardSize>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Name of the player using X. Prompts if not given.
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name of the player using O. Prompts if not given.
    #[arg(long)]
    pub player_o: Option<String>,

    /// Print the final game state as JSON
    #[arg(long)]
    pub json: bool,
}
