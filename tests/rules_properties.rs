//! Rules engine properties checked over every reachable board

mod common;

use common::{occupies_a_line, play_moves, reachable_boards};
use elite_tictactoe::tictactoe::{Board, Player, empty_cells, has_won, is_full};

#[test]
fn reachable_board_count_is_known() {
    // 5,478 distinct legal positions in X-first tic-tac-toe
    assert_eq!(reachable_boards().len(), 5478);
}

#[test]
fn has_won_matches_independent_line_check() {
    for (board, _) in reachable_boards() {
        for side in [Player::X, Player::O] {
            assert_eq!(
                has_won(&board, side),
                occupies_a_line(&board, side),
                "board {} side {side}",
                board.encode()
            );
        }
    }
}

#[test]
fn is_full_iff_no_empty_cells() {
    for (board, _) in reachable_boards() {
        assert_eq!(is_full(&board), empty_cells(&board).is_empty());
    }
}

#[test]
fn empty_cells_are_ascending_and_empty() {
    for (board, _) in reachable_boards() {
        let cells = empty_cells(&board);
        assert!(cells.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(cells.iter().all(|&idx| board.is_empty(idx)));
        assert_eq!(cells.len() + board.occupied_count(), 9);
    }
}

#[test]
fn reachable_boards_keep_piece_invariant() {
    for (board, side) in reachable_boards() {
        let count = board.count_pieces();
        assert!(count.x == count.o || count.x == count.o + 1);
        assert_eq!(board.side_to_move().unwrap(), side);
        assert!(board.is_valid(), "board {}", board.encode());
    }
}

#[test]
fn never_both_winners() {
    for (board, _) in reachable_boards() {
        assert!(!(has_won(&board, Player::X) && has_won(&board, Player::O)));
    }
}

#[test]
fn full_board_without_winner_is_a_draw() {
    let board = play_moves(Player::X, &[0, 1, 2, 4, 3, 6, 5, 8, 7]);
    assert!(is_full(&board));
    assert!(!has_won(&board, Player::X));
    assert!(!has_won(&board, Player::O));
    assert_eq!(
        board.outcome(),
        Some(elite_tictactoe::tictactoe::GameOutcome::Draw)
    );
}

#[test]
fn placing_does_not_touch_the_original() {
    let board = Board::from_string("X...O....").unwrap();
    let snapshot = board;
    let _ = board.place(8, Player::X).unwrap();
    assert_eq!(board, snapshot);
}
