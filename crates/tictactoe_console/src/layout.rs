//! Digit-to-cell coordinate schemes.
//!
//! The player types a digit from 1 to 9 to pick a cell. Two schemes are
//! supported: plain row-major numbering, and a numeric-keypad table where
//! 7 8 9 form the top row.

use serde::{Deserialize, Serialize};
use tictactoe_engine::{Move, BOARD_SIZE};
use tracing::instrument;

/// Cell addressed by each digit on a numeric keypad, indexed by `digit - 1`.
const KEYPAD: [Move; BOARD_SIZE * BOARD_SIZE] = [
    Move::new(2, 0),
    Move::new(2, 1),
    Move::new(2, 2),
    Move::new(1, 0),
    Move::new(1, 1),
    Move::new(1, 2),
    Move::new(0, 0),
    Move::new(0, 1),
    Move::new(0, 2),
];

/// How typed digits map onto the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Layout {
    /// `1` is the top-left cell, counting left to right then top to bottom.
    #[default]
    RowMajor,
    /// Laid out like a numeric keypad: `7` is top-left, `3` bottom-right.
    Keypad,
}

impl Layout {
    /// Largest digit accepted as input.
    pub const MAX_INPUT: u32 = (BOARD_SIZE * BOARD_SIZE) as u32;

    /// Maps a typed number to a cell, or `None` if it is out of range.
    #[instrument]
    pub fn to_move(self, input: u32) -> Option<Move> {
        if !(1..=Self::MAX_INPUT).contains(&input) {
            return None;
        }
        let index = (input - 1) as usize;
        Some(match self {
            Layout::RowMajor => Move::new(index / BOARD_SIZE, index % BOARD_SIZE),
            Layout::Keypad => KEYPAD[index],
        })
    }

    /// Number the player types to reach `mv`.
    #[instrument]
    pub fn input_for(self, mv: Move) -> Option<u32> {
        if !mv.in_bounds() {
            return None;
        }
        match self {
            Layout::RowMajor => Some((mv.row * BOARD_SIZE + mv.col + 1) as u32),
            Layout::Keypad => KEYPAD
                .iter()
                .position(|&key| key == mv)
                .map(|index| index as u32 + 1),
        }
    }

    /// Grid of input numbers, one board row per line.
    pub fn legend(self) -> String {
        let mut legend = String::new();
        for row in 0..BOARD_SIZE {
            let line: Vec<String> = (0..BOARD_SIZE)
                .filter_map(|col| self.input_for(Move::new(row, col)))
                .map(|n| format!("{n:<2}"))
                .collect();
            legend.push_str(line.join(" ").trim_end());
            legend.push('\n');
        }
        legend
    }
}
