//! Exhaustive minimax search.
//!
//! No pruning and no heuristics: every continuation is explored down to a
//! terminal board. Terminal scores are depth adjusted so that a quicker win
//! outranks a slower one and a slower loss outranks a quicker one. The
//! adjustment never changes whether a line is scored as a win, loss or draw.

use crate::board::Board;
use crate::rules::{evaluate, GameOutcome};
use crate::types::{Cell, Move};
use tracing::{debug, instrument, warn};

/// Score of an immediate win for [`Cell::PlayerOne`].
pub const WIN_SCORE: i32 = 10;

/// Score of a terminal outcome reached `depth` plies below the root.
///
/// Returns `None` while the game is still in progress.
pub fn terminal_score(outcome: GameOutcome, depth: u32) -> Option<i32> {
    let depth = depth as i32;
    match outcome {
        GameOutcome::PlayerOneWins => Some(WIN_SCORE - depth),
        GameOutcome::PlayerTwoWins => Some(depth - WIN_SCORE),
        GameOutcome::Draw => Some(0),
        GameOutcome::InProgress => None,
    }
}

/// Scores `board` assuming both sides play perfectly from here.
///
/// `maximizing` says whether [`Cell::PlayerOne`] is to move. The board is
/// mutated during the search and restored before returning.
pub fn minimax(board: &mut Board, depth: u32, maximizing: bool) -> i32 {
    if let Some(score) = terminal_score(evaluate(board), depth) {
        return score;
    }
    debug_assert!(
        board.empty_count() > 0,
        "non-terminal board without empty cells"
    );

    let mover = Cell::mover(maximizing);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for mv in Move::all() {
        if !board.is_empty(mv) {
            continue;
        }
        let score = board.with_move(mv, mover, |b| minimax(b, depth + 1, !maximizing));
        if improves(score, best, maximizing) {
            best = score;
        }
    }
    best
}

/// Picks the move with the best minimax score for `symbol`.
///
/// Cells are tried in row-major order and only a strictly better score
/// replaces the incumbent, so ties go to the first cell scanned. Returns
/// `None` when the board has no empty cell or `symbol` is [`Cell::Empty`].
#[instrument(skip(board), fields(empty = board.empty_count()))]
pub fn find_best_move(board: &mut Board, symbol: Cell) -> Option<Move> {
    if symbol == Cell::Empty {
        warn!("Asked for a move on behalf of an empty cell");
        return None;
    }

    let maximizing = symbol.is_maximizing();
    let mut best: Option<(Move, i32)> = None;
    for mv in Move::all() {
        if !board.is_empty(mv) {
            continue;
        }
        let score = board.with_move(mv, symbol, |b| minimax(b, 0, !maximizing));
        match best {
            Some((_, incumbent)) if !improves(score, incumbent, maximizing) => {}
            _ => best = Some((mv, score)),
        }
    }

    match best {
        Some((mv, score)) => {
            debug!(%mv, score, "Best move selected");
            Some(mv)
        }
        None => {
            warn!("No empty cell left to play");
            None
        }
    }
}

/// Strict comparison in the direction the mover wants.
fn improves(candidate: i32, incumbent: i32, maximizing: bool) -> bool {
    if maximizing {
        candidate > incumbent
    } else {
        candidate < incumbent
    }
}
