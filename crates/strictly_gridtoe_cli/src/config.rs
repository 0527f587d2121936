//! Game settings loaded from TOML and overridden by command-line flags.

use crate::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_gridtoe::BoardSize;
use tracing::{debug, info, instrument};

/// Settings file read when `--config` is not given, if it exists.
pub const DEFAULT_CONFIG_PATH: &str = "gridtoe.toml";

/// Settings for one run of the game.
///
/// Every field is optional in the file. Unset names and board size are
/// asked for interactively.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name announced by the tracker.
    #[serde(default = "default_game_name")]
    game_name: String,

    /// Board type; prompts when unset.
    #[serde(default)]
    board_size: Option<BoardSize>,

    /// Name of the player using X; prompts when unset.
    #[serde(default)]
    player_x: Option<String>,

    /// Name of the player using O; prompts when unset.
    #[serde(default)]
    player_o: Option<String>,

    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_game_name() -> String {
    "TicTacToe".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            game_name: default_game_name(),
            board_size: None,
            player_x: None,
            player_o: None,
            log_filter: default_log_filter(),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(game_name = %config.game_name, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves the settings for a run.
    ///
    /// An explicit `--config` path must exist. Without one, the default
    /// path is used if present and built-in defaults otherwise. Flags
    /// given on the command line win over file values.
    #[instrument(skip(cli))]
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => {
                debug!("No config file, using defaults");
                Self::default()
            }
        };
        Ok(config.with_overrides(cli))
    }

    /// Applies command-line overrides.
    #[instrument(skip(self, cli))]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(size) = cli.size {
            self.board_size = Some(size);
        }
        if let Some(name) = &cli.player_x {
            self.player_x = Some(name.clone());
        }
        if let Some(name) = &cli.player_o {
            self.player_o = Some(name.clone());
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
