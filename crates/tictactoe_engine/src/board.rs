//! The 3x3 grid and its mutation primitives.

use crate::types::{BoardError, Cell, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// Fixed-size tic-tac-toe board.
///
/// Every cell always holds exactly one [`Cell`] value. The search engine
/// mutates the board in place through [`Board::with_move`], which restores the
/// cell before returning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from `+1` / `-1` / `0` literals, one array per row.
    pub fn from_values(values: [[i8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for (row, line) in values.iter().enumerate() {
            for (col, &value) in line.iter().enumerate() {
                board.cells[row][col] =
                    Cell::from_value(value).ok_or(BoardError::InvalidValue(value))?;
            }
        }
        Ok(board)
    }

    /// Returns the cell at `mv`, or `None` when out of bounds.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Checks if the cell at `mv` is on the board and unoccupied.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Overwrites a cell without any rule checks.
    ///
    /// # Panics
    ///
    /// Panics if `mv` is out of bounds.
    pub fn set(&mut self, mv: Move, cell: Cell) {
        self.cells[mv.row][mv.col] = cell;
    }

    /// Places a mark on an empty cell.
    #[instrument(skip(self))]
    pub fn place(&mut self, mv: Move, cell: Cell) -> Result<(), BoardError> {
        match self.get(mv) {
            None => Err(BoardError::OutOfBounds(mv)),
            Some(Cell::Empty) => {
                self.set(mv, cell);
                Ok(())
            }
            Some(_) => Err(BoardError::CellOccupied(mv)),
        }
    }

    /// Applies `cell` at `mv`, runs `f`, then clears the cell again.
    ///
    /// `mv` must point at an empty cell; the cell is restored to `Empty`.
    pub fn with_move<R>(&mut self, mv: Move, cell: Cell, f: impl FnOnce(&mut Self) -> R) -> R {
        debug_assert!(self.is_empty(mv), "hypothetical move on occupied cell {mv}");
        self.set(mv, cell);
        let result = f(self);
        self.set(mv, Cell::Empty);
        result
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        debug!("Board reset");
    }

    /// Rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().filter(|&mv| self.is_empty(mv))
    }

    /// Number of empty cells.
    pub fn empty_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Empty)
            .count()
    }

    /// Formats the board as a bordered grid.
    ///
    /// Empty cells render as `0`; `player_one` and `player_two` are the
    /// tokens shown for each side's marks.
    pub fn render(&self, player_one: &str, player_two: &str) -> String {
        let rule = format!("{}-\n", "----".repeat(BOARD_SIZE));
        let mut result = rule.clone();
        for row in &self.cells {
            result.push('|');
            for cell in row {
                let token = match cell {
                    Cell::Empty => "0",
                    Cell::PlayerOne => player_one,
                    Cell::PlayerTwo => player_two,
                };
                result.push(' ');
                result.push_str(token);
                result.push_str(" |");
            }
            result.push('\n');
            result.push_str(&rule);
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render("*", "X"))
    }
}
