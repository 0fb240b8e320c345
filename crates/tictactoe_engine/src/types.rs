//! Core domain types for tic-tac-toe.

use crate::board::BOARD_SIZE;
use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
///
/// Each variant maps to the integer used by line sums: `Empty` is `0`,
/// `PlayerOne` is `+1` and `PlayerTwo` is `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// Mark of the maximizing player (`+1`).
    PlayerOne,
    /// Mark of the minimizing player (`-1`).
    PlayerTwo,
}

impl Cell {
    /// Returns the numeric value summed by the evaluator.
    pub const fn value(self) -> i32 {
        match self {
            Cell::Empty => 0,
            Cell::PlayerOne => 1,
            Cell::PlayerTwo => -1,
        }
    }

    /// Converts a `+1` / `-1` / `0` literal into a cell.
    pub const fn from_value(value: i8) -> Option<Self> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::PlayerOne),
            -1 => Some(Cell::PlayerTwo),
            _ => None,
        }
    }

    /// Returns the other player's mark. `Empty` has no opponent.
    pub const fn opponent(self) -> Self {
        match self {
            Cell::Empty => Cell::Empty,
            Cell::PlayerOne => Cell::PlayerTwo,
            Cell::PlayerTwo => Cell::PlayerOne,
        }
    }

    /// True for the side that seeks the highest minimax score.
    pub const fn is_maximizing(self) -> bool {
        matches!(self, Cell::PlayerOne)
    }

    /// Returns the mark placed by the side to move.
    pub const fn mover(maximizing: bool) -> Self {
        if maximizing {
            Cell::PlayerOne
        } else {
            Cell::PlayerTwo
        }
    }
}

/// Zero-based board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Move {
    /// Creates a move. Bounds are checked when the move is placed.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns true if the coordinates fall inside the board.
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Every cell coordinate in row-major scan order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Move::new(row, col)))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Error raised by checked board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The move points outside the grid.
    #[display("Move {} is outside the {}x{} board", _0, BOARD_SIZE, BOARD_SIZE)]
    OutOfBounds(Move),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),

    /// A literal other than `-1`, `0` or `1` was supplied.
    #[display("Invalid cell value {}", _0)]
    InvalidValue(i8),
}

impl std::error::Error for BoardError {}
