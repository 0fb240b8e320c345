//! Tests for minimax move selection.

use tictactoe_engine::{evaluate, find_best_move, minimax, Board, Cell, GameOutcome, Move};

#[test]
fn test_win_preferred_over_block() {
    let mut board = Board::from_values([[1, 1, 0], [-1, -1, 0], [0, 0, 0]]).unwrap();
    assert_eq!(find_best_move(&mut board, Cell::PlayerOne), Some(Move::new(0, 2)));
}

#[test]
fn test_player_two_takes_its_own_win() {
    let mut board = Board::from_values([[1, 1, 0], [-1, -1, 0], [1, 0, 0]]).unwrap();
    assert_eq!(find_best_move(&mut board, Cell::PlayerTwo), Some(Move::new(1, 2)));
}

#[test]
fn test_blocks_when_no_win_available() {
    let mut board = Board::from_values([[-1, -1, 0], [0, 1, 0], [0, 0, 0]]).unwrap();
    assert_eq!(find_best_move(&mut board, Cell::PlayerOne), Some(Move::new(0, 2)));
}

#[test]
fn test_first_move_is_corner_or_center() {
    const STRONG: [Move; 5] = [
        Move::new(0, 0),
        Move::new(0, 2),
        Move::new(1, 1),
        Move::new(2, 0),
        Move::new(2, 2),
    ];

    for symbol in [Cell::PlayerOne, Cell::PlayerTwo] {
        let mut board = Board::new();
        let mv = find_best_move(&mut board, symbol).expect("empty board has moves");
        assert!(STRONG.contains(&mv), "{symbol:?} opened with {mv}");
    }
}

#[test]
fn test_ties_break_in_row_major_order() {
    // Every opening draws under perfect play, so the first cell scanned wins.
    let mut board = Board::new();
    assert_eq!(find_best_move(&mut board, Cell::PlayerOne), Some(Move::new(0, 0)));
}

#[test]
fn test_search_leaves_board_untouched() {
    let mut board = Board::from_values([[1, 0, 0], [0, -1, 0], [0, 0, 0]]).unwrap();
    let snapshot = board.clone();

    find_best_move(&mut board, Cell::PlayerOne);
    assert_eq!(board, snapshot);

    minimax(&mut board, 0, true);
    assert_eq!(board, snapshot);
}

#[test]
fn test_full_board_has_no_move() {
    let mut board = Board::from_values([[1, -1, 1], [-1, 1, 1], [-1, 1, -1]]).unwrap();
    assert_eq!(find_best_move(&mut board, Cell::PlayerOne), None);
}

#[test]
fn test_prefers_faster_win() {
    // PlayerOne can win now at (0, 2); any other move only delays it.
    let mut board = Board::from_values([[1, 1, 0], [-1, 0, 0], [-1, 0, 0]]).unwrap();
    let fast = board.with_move(Move::new(0, 2), Cell::PlayerOne, |b| minimax(b, 0, false));
    let slow = board.with_move(Move::new(1, 1), Cell::PlayerOne, |b| minimax(b, 0, false));
    assert!(fast > slow, "fast {fast} should beat slow {slow}");
    assert_eq!(find_best_move(&mut board, Cell::PlayerOne), Some(Move::new(0, 2)));
}

/// Plays every possible opponent line against the engine and asserts the
/// engine never loses.
fn assert_engine_never_loses(board: &mut Board, engine: Cell, to_move: Cell) {
    match evaluate(board) {
        GameOutcome::InProgress => {}
        outcome => {
            assert_ne!(
                outcome.winner(),
                Some(engine.opponent()),
                "engine lost on\n{board}"
            );
            return;
        }
    }

    if to_move == engine {
        let mv = find_best_move(board, engine).expect("game in progress");
        board.with_move(mv, engine, |b| {
            assert_engine_never_loses(b, engine, engine.opponent())
        });
    } else {
        let replies: Vec<Move> = board.empty_cells().collect();
        for mv in replies {
            board.with_move(mv, to_move, |b| assert_engine_never_loses(b, engine, engine));
        }
    }
}

#[test]
fn test_engine_never_loses_moving_first() {
    let mut board = Board::new();
    assert_engine_never_loses(&mut board, Cell::PlayerOne, Cell::PlayerOne);
}

#[test]
fn test_engine_never_loses_moving_second() {
    let mut board = Board::new();
    assert_engine_never_loses(&mut board, Cell::PlayerOne, Cell::PlayerTwo);
}

#[test]
fn test_engine_as_minimizer_never_loses() {
    let mut board = Board::new();
    assert_engine_never_loses(&mut board, Cell::PlayerTwo, Cell::PlayerOne);
}
