//! Common test utilities for the tic-tac-toe test suite.

#![allow(dead_code)]

use std::collections::HashSet;

use elite_tictactoe::tictactoe::{Board, Player, WINNING_LINES};

/// Every board reachable from the empty board with X opening, paired with
/// the side to move. Terminal boards are included.
pub fn reachable_boards() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(Board::new(), Player::X)];
    let mut boards = Vec::new();

    while let Some((board, side)) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push((board, side));
        if board.is_terminal() {
            continue;
        }
        for pos in board.empty_cells() {
            let next = board.place(pos, side).expect("empty cell accepts a mark");
            stack.push((next, side.opponent()));
        }
    }

    boards
}

/// Independent line check used to cross-validate the rules engine
pub fn occupies_a_line(board: &Board, side: Player) -> bool {
    let cell = side.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board.get(idx) == cell))
}

/// Play a sequence of moves, alternating from `first`
pub fn play_moves(first: Player, moves: &[usize]) -> Board {
    let mut board = Board::new();
    let mut side = first;
    for &pos in moves {
        board = board.place(pos, side).expect("scripted move must be legal");
        side = side.opponent();
    }
    board
}
