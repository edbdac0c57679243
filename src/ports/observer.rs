//! Observer port - abstraction for match observation
//!
//! Observers let the arena report progress and collect data without
//! coupling game logic to a particular output format.

use crate::{
    Result,
    tictactoe::{Board, GameOutcome, Player},
};

/// Observer trait for monitoring arena matches
///
/// # Event Sequence
///
/// 1. `on_match_start(total_games)` - once at the beginning
/// 2. For each game:
///    - `on_move(...)` for each move
///    - `on_game_end(game_num, outcome)`
/// 3. `on_match_end()` - once at the end
///
/// All methods default to no-ops, so implementors only override the events
/// they care about.
///
/// # Examples
///
/// ```no_run
/// use elite_tictactoe::{ports::Observer, tictactoe::GameOutcome};
///
/// struct DrawCounter {
///     draws: usize,
/// }
///
/// impl Observer for DrawCounter {
///     fn on_game_end(
///         &mut self,
///         _game_num: usize,
///         outcome: GameOutcome,
///     ) -> elite_tictactoe::Result<()> {
///         if outcome == GameOutcome::Draw {
///             self.draws += 1;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    fn on_match_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called before `position` is applied to `board`
    fn on_move(
        &mut self,
        _game_num: usize,
        _board: &Board,
        _player: Player,
        _position: usize,
    ) -> Result<()> {
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn on_match_end(&mut self) -> Result<()> {
        Ok(())
    }
}
