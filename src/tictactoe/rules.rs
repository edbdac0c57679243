//! Rules engine entry points
//!
//! Pure functions over a board snapshot. These are what the move selector and
//! the application layer use to decide whether a game is over.

use super::{Board, Player, lines::LineAnalyzer};

/// True iff `side` fully occupies one of the eight winning lines
pub fn has_won(board: &Board, side: Player) -> bool {
    board.has_won(side)
}

/// True iff no cell is empty
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// Indices of empty cells, ascending
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board.empty_cells()
}

/// Cells that would complete a line for `side` on its next move
pub fn winning_moves(board: &Board, side: Player) -> Vec<usize> {
    LineAnalyzer::winning_moves(&board.cells, side)
}
