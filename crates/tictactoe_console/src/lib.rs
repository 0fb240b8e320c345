//! Tic-tac-toe console - play against the minimax engine in a terminal.
//!
//! # Architecture
//!
//! - **Controller**: [`TurnController`] owns the board and alternates turns
//! - **Console**: [`Console`] handles prompts and board output
//! - **Layout**: [`Layout`] maps typed digits to cells
//! - **Config**: [`GameConfig`] from TOML, overridden by [`Cli`] flags
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_console::{Console, GameConfig, SessionEnd, TurnController};
//!
//! let console = Console::new(Cursor::new(b"x\nq\n".to_vec()), Vec::new(), false);
//! let mut controller = TurnController::new(console, GameConfig::new());
//! assert_eq!(controller.run().unwrap(), SessionEnd::Terminated);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod controller;
mod layout;
mod scoreboard;
mod seat;

// Crate-level exports - Configuration
pub use cli::Cli;
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Console I/O
pub use console::{Console, ConsoleError, MoveInput};
pub use layout::Layout;

// Crate-level exports - Game flow
pub use controller::{SessionEnd, TurnController, TurnState};
pub use scoreboard::{RoundResult, Scoreboard};
pub use seat::Seat;
