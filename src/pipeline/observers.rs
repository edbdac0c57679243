//! Observers for arena matches

use indicatif::{ProgressBar, ProgressStyle};
use tracing::trace;

use crate::{
    Result,
    ports::Observer,
    tictactoe::{Board, GameOutcome, Player},
};

/// Progress bar observer - shows match progress and the running tally
#[derive(Default)]
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl ProgressObserver {
    pub fn new() -> Self {
        Self::default()
    }

    fn tally(&self) -> String {
        format!("X:{} O:{} D:{}", self.x_wins, self.o_wins, self.draws)
    }
}

impl Observer for ProgressObserver {
    fn on_match_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, outcome: GameOutcome) -> Result<()> {
        match outcome {
            GameOutcome::Win(Player::X) => self.x_wins += 1,
            GameOutcome::Win(Player::O) => self.o_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }

        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64);
            pb.set_message(self.tally());
        }
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        if let Some(pb) = &self.progress_bar {
            pb.finish_with_message(self.tally());
        }
        Ok(())
    }
}

/// Emits every move as a `trace` event
#[derive(Default)]
pub struct MoveTraceObserver;

impl Observer for MoveTraceObserver {
    fn on_move(
        &mut self,
        game_num: usize,
        board: &Board,
        player: Player,
        position: usize,
    ) -> Result<()> {
        trace!(
            game_num,
            board = %board.encode(),
            player = %player,
            position,
            "arena move"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_observer_tallies_outcomes() {
        let mut observer = ProgressObserver::new();
        observer.on_match_start(3).unwrap();
        observer.on_game_end(1, GameOutcome::Win(Player::X)).unwrap();
        observer.on_game_end(2, GameOutcome::Draw).unwrap();
        observer.on_game_end(3, GameOutcome::Draw).unwrap();
        observer.on_match_end().unwrap();
        assert_eq!(observer.tally(), "X:1 O:0 D:2");
    }
}
