//! Command-line interface for the tic-tac-toe console.

use crate::config::GameConfig;
use crate::layout::Layout;
use crate::seat::Seat;
use clap::Parser;
use std::path::PathBuf;
use tracing::instrument;

/// Play tic-tac-toe against an unbeatable minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (skipped if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Your one-character board token (prompted for if omitted)
    #[arg(short, long)]
    pub symbol: Option<char>,

    /// Token shown for the computer's marks
    #[arg(long)]
    pub computer_token: Option<char>,

    /// How the digits 1-9 map onto the board
    #[arg(short, long, value_enum)]
    pub layout: Option<Layout>,

    /// Let the computer open the first round
    #[arg(long)]
    pub computer_first: bool,

    /// Stop after this many rounds
    #[arg(short, long)]
    pub rounds: Option<u32>,

    /// Disable colored result messages
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Layers the flags that were given on top of `config`.
    #[instrument(skip(self, config))]
    pub fn apply(&self, config: GameConfig) -> GameConfig {
        let mut config = config;
        if let Some(symbol) = self.symbol {
            config = config.with_symbol(symbol);
        }
        if let Some(token) = self.computer_token {
            config = config.with_computer_token(token);
        }
        if let Some(layout) = self.layout {
            config = config.with_layout(layout);
        }
        if self.computer_first {
            config = config.with_first_player(Seat::Computer);
        }
        if let Some(rounds) = self.rounds {
            config = config.with_max_rounds(rounds);
        }
        if self.no_color {
            config = config.with_color(false);
        }
        config
    }
}
