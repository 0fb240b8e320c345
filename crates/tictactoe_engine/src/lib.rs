//! Tic-tac-toe engine - board evaluation and exhaustive minimax search.
//!
//! The board is a fixed 3x3 grid whose cells carry the values `+1`
//! ([`Cell::PlayerOne`]), `-1` ([`Cell::PlayerTwo`]) and `0` ([`Cell::Empty`]).
//! Those values are what the evaluator sums along each line, so a line adding
//! up to `+3` or `-3` is a win.
//!
//! # Architecture
//!
//! - **Types**: [`Cell`], [`Move`] and [`BoardError`]
//! - **Board**: the grid with checked placement and scoped mutation
//! - **Rules**: [`evaluate`] and [`reset`]
//! - **Search**: [`minimax`] and [`find_best_move`]
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{find_best_move, Board, Cell, Move};
//!
//! let mut board = Board::from_values([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]).unwrap();
//! let best = find_best_move(&mut board, Cell::PlayerOne);
//! assert_eq!(best, Some(Move::new(0, 2)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod rules;
mod search;
mod types;

// Crate-level exports - Core types
pub use board::{Board, BOARD_SIZE};
pub use types::{BoardError, Cell, Move};

// Crate-level exports - Rules
pub use rules::{evaluate, is_full, line_sums, reset, winner, GameOutcome};

// Crate-level exports - Search
pub use search::{find_best_move, minimax, terminal_score, WIN_SCORE};
