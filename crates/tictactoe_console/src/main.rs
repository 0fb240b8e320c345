//! Tic-tac-toe against a minimax opponent.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use tictactoe_console::{Cli, Console, GameConfig, TurnController};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;

    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout().lock(), *config.color());
    let mut controller = TurnController::new(console, config);

    let end = controller.run().context("Game session aborted")?;
    info!(?end, scoreboard = %controller.scoreboard(), "Session finished");

    Ok(())
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    info!("Loading game configuration");

    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let config = cli.apply(config);
    config.validate().context("Invalid settings")?;

    info!(?config, "Configuration ready");
    Ok(config)
}

/// Logs go to stderr so they never mix with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
