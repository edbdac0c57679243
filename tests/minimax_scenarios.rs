//! Optimal play scenarios

mod common;

use common::reachable_boards;
use elite_tictactoe::{
    search::{self, DRAW_SCORE, LOSS_SCORE, WIN_SCORE},
    selector::{MoveSelector, Policy, select_move},
    tictactoe::{Board, GameOutcome, Player, winning_moves},
};

fn self_play(first: Player) -> (GameOutcome, Vec<usize>) {
    let mut board = Board::new();
    let mut side = first;
    let mut moves = Vec::new();
    let mut selector = MoveSelector::with_seed(Policy::Optimal, 0);

    while board.outcome().is_none() {
        let index = selector.select_move(&board, side);
        assert!(board.is_empty(index));
        moves.push(index);
        board = board.place(index, side).unwrap();
        side = side.opponent();
    }

    (board.outcome().unwrap(), moves)
}

#[test]
fn optimal_self_play_draws() {
    let (outcome, moves) = self_play(Player::X);
    assert_eq!(outcome, GameOutcome::Draw, "moves {moves:?}");
    assert_eq!(moves.len(), 9);
}

#[test]
fn optimal_self_play_draws_when_o_opens() {
    let (outcome, _) = self_play(Player::O);
    assert_eq!(outcome, GameOutcome::Draw);
}

#[test]
fn empty_board_root_score_is_draw() {
    let outcome = search::search(&Board::new(), Player::X);
    assert_eq!(outcome.score, DRAW_SCORE);
    assert!(outcome.index.is_some());
}

#[test]
fn empty_board_ties_go_to_the_first_cell() {
    // Every opening draws on a full board, so score and plies all tie
    for side in [Player::X, Player::O] {
        let outcome = search::search(&Board::new(), side);
        assert_eq!(outcome.index, Some(0), "side {side}");
        assert_eq!(outcome.score, DRAW_SCORE);
        assert_eq!(outcome.plies, 9);
    }
}

#[test]
fn equal_wins_go_to_the_lower_cell() {
    // XX.
    // X.O
    // .OO
    // X completes the top row at 2 or the left column at 6
    let board = Board::from_string("XX.X.O.OO").unwrap();
    let moves = search::evaluate_moves(&board, Player::X);
    let wins: Vec<usize> = moves
        .iter()
        .filter(|m| m.score == LOSS_SCORE && m.plies == 1)
        .map(|m| m.index)
        .collect();
    assert_eq!(wins, vec![2, 6]);

    let outcome = search::search(&board, Player::X);
    assert_eq!(outcome.index, Some(2));
    assert_eq!(outcome.score, LOSS_SCORE);
    assert_eq!(outcome.plies, 1);
}

#[test]
fn immediate_win_beats_lower_index_slower_win() {
    // X.O
    // ..O
    // XOX
    // Cell 1 keeps both X threats and wins two plies later; 3 and 4 win now.
    let board = Board::from_string("X.O..OXOX").unwrap();
    let moves = search::evaluate_moves(&board, Player::X);
    let slow = moves.iter().find(|m| m.index == 1).unwrap();
    assert_eq!((slow.score, slow.plies), (LOSS_SCORE, 3));

    let outcome = search::search(&board, Player::X);
    assert_eq!(outcome.index, Some(3));
    assert_eq!(outcome.plies, 1);
}

#[test]
fn completes_row_for_the_win() {
    // XX.
    // OO.
    // ...
    let board = Board::from_string("XX.OO....").unwrap();
    let outcome = search::search(&board, Player::O);
    assert_eq!(outcome.index, Some(5));
    assert_eq!(outcome.score, WIN_SCORE);
    assert_eq!(select_move(&board, Player::O, Policy::Optimal), 5);
}

#[test]
fn x_wins_on_same_board() {
    // With X to move instead, X completes the top row
    let board = Board::from_string("XX.OO....").unwrap();
    let outcome = search::search(&board, Player::X);
    assert_eq!(outcome.index, Some(2));
    assert_eq!(outcome.score, LOSS_SCORE);
}

#[test]
fn optimal_is_idempotent() {
    for text in ["X........", "X...O....", "XO..X....", "X.O.O.X.."] {
        let board = Board::from_string(text).unwrap();
        let side = board.side_to_move().unwrap();
        let first = select_move(&board, side, Policy::Optimal);
        let second = select_move(&board, side, Policy::Optimal);
        assert_eq!(first, second, "board {text}");
    }
}

#[test]
fn optimal_wins_or_blocks_single_threat() {
    for (board, side) in reachable_boards() {
        if board.is_terminal() || board.occupied_count() < 3 {
            continue;
        }

        let own_wins = winning_moves(&board, side);
        let threats = winning_moves(&board, side.opponent());
        let chosen = search::search(&board, side).index.unwrap();

        if !own_wins.is_empty() {
            assert!(
                own_wins.contains(&chosen),
                "board {} side {side}: chose {chosen}, wins at {own_wins:?}",
                board.encode()
            );
        } else if threats.len() == 1 {
            assert_eq!(
                chosen,
                threats[0],
                "board {} side {side}: should block",
                board.encode()
            );
        }
    }
}

#[test]
fn root_scores_are_three_valued() {
    for (board, side) in reachable_boards() {
        if board.occupied_count() < 4 {
            continue;
        }
        let score = search::search(&board, side).score;
        assert!([LOSS_SCORE, DRAW_SCORE, WIN_SCORE].contains(&score));
    }
}

#[test]
fn hint_matches_optimal_and_leaves_board_alone() {
    let board = Board::from_string("X...O...X").unwrap();
    let copy = board;
    let hint = search::hint(&board, Player::O);
    assert_eq!(board, copy);
    assert_eq!(hint, Some(select_move(&board, Player::O, Policy::Optimal)));
}
