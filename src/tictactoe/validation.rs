//! Board consistency checks

use super::board::{Board, Player};

impl Board {
    /// Check that the board could arise from alternating play.
    ///
    /// Either side may have opened, so piece counts may differ by one in
    /// either direction. A winner must have moved last, and two winning
    /// lines for one side must share the cell that completed them.
    pub fn is_valid(&self) -> bool {
        let count = self.count_pieces();
        if count.x.abs_diff(count.o) > 1 {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        if x_wins && count.o > count.x {
            return false;
        }
        if o_wins && count.x > count.o {
            return false;
        }

        if x_wins && !self.winning_lines_share_cell(Player::X) {
            return false;
        }
        if o_wins && !self.winning_lines_share_cell(Player::O) {
            return false;
        }

        true
    }

    /// Check if all winning lines for a player share at least one cell
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        let cell = player.to_cell();
        let lines: Vec<&[usize; 3]> = super::WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.cells[idx] == cell))
            .collect();

        match lines.split_first() {
            None => true,
            Some((first, rest)) => first
                .iter()
                .any(|idx| rest.iter().all(|line| line.contains(idx))),
        }
    }
}
