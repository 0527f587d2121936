//! Gridtoe - two players, one keyboard.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_gridtoe::{GameObserver, TracingObserver};
use strictly_gridtoe_cli::{Cli, GameConfig, GameHost, HostOutcome, LineInput, TerminalTracker};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "Starting gridtoe");

    let observers: Vec<Box<dyn GameObserver>> = vec![
        Box::new(TerminalTracker::stdout(config.game_name().clone())),
        Box::new(TracingObserver::new(config.game_name().clone())),
    ];

    let mut host = GameHost::new(config, LineInput::stdio(), std::io::stdout());
    match host.run(observers)? {
        HostOutcome::Finished(game) if cli.json => {
            let json = serde_json::to_string_pretty(&game).context("Failed to serialize game")?;
            println!("{}", json);
        }
        HostOutcome::Finished(_) | HostOutcome::Abandoned => {}
    }

    Ok(())
}
