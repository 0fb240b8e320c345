//! Win detection via line sums.
//!
//! Cells are `+1`, `-1` or `0`, so a line is won exactly when its sum is
//! `+BOARD_SIZE` or `-BOARD_SIZE`. Mixed or partially empty lines can never
//! reach either bound.

use crate::board::{Board, BOARD_SIZE};
use crate::types::Cell;

/// Number of lines that can be won: every row, every column, two diagonals.
pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

const WIN_SUM: i32 = BOARD_SIZE as i32;

/// Sums of every row, then every column, then the main and anti diagonals.
pub fn line_sums(board: &Board) -> [i32; LINE_COUNT] {
    let rows = board.rows();
    let mut sums = [0; LINE_COUNT];
    for (i, row) in rows.iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            sums[i] += cell.value();
            sums[BOARD_SIZE + j] += cell.value();
        }
        sums[2 * BOARD_SIZE] += rows[i][i].value();
        sums[2 * BOARD_SIZE + 1] += rows[i][BOARD_SIZE - 1 - i].value();
    }
    sums
}

/// Returns the mark owning a complete line, if any.
pub fn winner(board: &Board) -> Option<Cell> {
    line_sums(board).into_iter().find_map(|sum| match sum {
        WIN_SUM => Some(Cell::PlayerOne),
        s if s == -WIN_SUM => Some(Cell::PlayerTwo),
        _ => None,
    })
}
