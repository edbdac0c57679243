//! The eight winning lines and queries over them

use std::collections::BTreeSet;

use super::{Cell, Player};

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Line queries over a raw cell array
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// True when `player` holds all three cells of some line
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        let mark = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == mark))
    }

    /// Cells that complete a line for `player` on the next move, ascending.
    ///
    /// A cell shared by two open lines appears once.
    pub fn winning_moves(cells: &[Cell; 9], player: Player) -> Vec<usize> {
        let mark = player.to_cell();
        let completions: BTreeSet<usize> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().filter(|&&idx| cells[idx] == mark).count() == 2)
            .filter_map(|line| line.iter().copied().find(|&idx| cells[idx] == Cell::Empty))
            .collect();
        completions.into_iter().collect()
    }
}
