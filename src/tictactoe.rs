//! Tic-Tac-Toe rules engine

pub mod board;
pub mod game;
pub mod lines;
pub mod rules;
pub mod validation;

pub use board::{Board, Cell, PieceCount, Player};
pub use game::{GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use rules::{empty_cells, has_won, is_full, winning_moves};
