//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates the board except
//! [`reset`], which is the round-boundary operation.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{line_sums, winner};

use crate::board::Board;
use crate::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// A line sums to `+3`.
    PlayerOneWins,
    /// A line sums to `-3`.
    PlayerTwoWins,
    /// Board full, no winning line.
    Draw,
    /// At least one empty cell and no winning line.
    InProgress,
}

impl GameOutcome {
    /// True once the game has concluded.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    /// Returns the winning mark, if any.
    pub fn winner(self) -> Option<Cell> {
        match self {
            GameOutcome::PlayerOneWins => Some(Cell::PlayerOne),
            GameOutcome::PlayerTwoWins => Some(Cell::PlayerTwo),
            GameOutcome::Draw | GameOutcome::InProgress => None,
        }
    }
}

/// Evaluates the board.
///
/// Win lines are checked before fullness, since a full board can also be won.
pub fn evaluate(board: &Board) -> GameOutcome {
    match winner(board) {
        Some(Cell::PlayerOne) => GameOutcome::PlayerOneWins,
        Some(Cell::PlayerTwo) => GameOutcome::PlayerTwoWins,
        _ if is_full(board) => GameOutcome::Draw,
        _ => GameOutcome::InProgress,
    }
}

/// Clears the board for the next round.
#[instrument(skip(board))]
pub fn reset(board: &mut Board) {
    board.reset();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    #[test]
    fn test_evaluate_is_pure() {
        let board = Board::from_values([[1, -1, 0], [0, 1, 0], [-1, 0, 0]]).unwrap();
        let snapshot = board.clone();
        let first = evaluate(&board);
        let second = evaluate(&board);
        assert_eq!(first, second);
        assert_eq!(first, GameOutcome::InProgress);
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_full_and_won_is_a_win() {
        // X O X / O X O / O X X -> main diagonal
        let board = Board::from_values([[1, -1, 1], [-1, 1, -1], [-1, 1, 1]]).unwrap();
        assert_eq!(evaluate(&board), GameOutcome::PlayerOneWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_values([[1, -1, 1], [-1, 1, 1], [-1, 1, -1]]).unwrap();
        assert_eq!(evaluate(&board), GameOutcome::Draw);
    }

    #[test]
    fn test_player_two_column() {
        let board = Board::from_values([[1, -1, 1], [0, -1, 0], [1, -1, 0]]).unwrap();
        assert_eq!(evaluate(&board), GameOutcome::PlayerTwoWins);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::from_values([[1, -1, 1], [-1, 1, 1], [-1, 1, -1]]).unwrap();
        reset(&mut board);
        assert_eq!(evaluate(&board), GameOutcome::InProgress);
        assert!(Move::all().all(|mv| board.get(mv) == Some(Cell::Empty)));
    }

    #[test]
    fn test_outcome_helpers() {
        assert!(GameOutcome::Draw.is_terminal());
        assert!(!GameOutcome::InProgress.is_terminal());
        assert_eq!(GameOutcome::PlayerTwoWins.winner(), Some(Cell::PlayerTwo));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }
}
