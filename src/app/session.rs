//! Game session: the mutable state the presentation layer drives.
//!
//! The session owns the board, whose turn it is, whether the game is still
//! running and the turn timer. The rules engine and move selector only ever
//! see copies of the board.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::{
    config::{GameConfig, GameMode},
    timer::{TimerPhase, TurnTimer},
};
use crate::{
    Error, Result, search,
    selector::{Difficulty, MoveSelector},
    tictactoe::{Board, GameOutcome, Move, Player},
};

/// Side controlled by the synthetic opponent in [`GameMode::Ai`]
pub const AI_SIDE: Player = Player::O;

/// Result of applying one move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub applied: Move,
    /// Set when this move ended the game
    pub outcome: Option<GameOutcome>,
}

/// What a timer tick produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Idle,
    /// Surface this cell as a hint; fires at most once per turn
    HintDue(usize),
    /// The player ran out of time and the turn passed on
    TurnSkipped { skipped: Player, next: Player },
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    current: Player,
    active: bool,
    mode: GameMode,
    difficulty: Difficulty,
    timer: TurnTimer,
    hint_shown: bool,
    history: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Session {
    /// Start a fresh game: empty board, X to move
    pub fn new(config: &GameConfig) -> Result<Self> {
        Self::started_at(config, Instant::now())
    }

    /// # Errors
    ///
    /// Returns error if `config` fails [`GameConfig::validate`].
    pub fn started_at(config: &GameConfig, now: Instant) -> Result<Self> {
        config.validate()?;
        info!(mode = %config.mode, difficulty = %config.difficulty, "game started");
        Ok(Self {
            board: Board::new(),
            current: Player::X,
            active: true,
            mode: config.mode,
            difficulty: config.difficulty,
            timer: TurnTimer::new(config.hint_after(), config.skip_after(), now),
            hint_shown: false,
            history: Vec::new(),
            outcome: None,
        })
    }

    /// Snapshot of the board
    pub fn board(&self) -> Board {
        self.board
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn timer(&self) -> &TurnTimer {
        &self.timer
    }

    /// True when the synthetic opponent is due to move
    pub fn is_ai_turn(&self) -> bool {
        self.active && self.mode == GameMode::Ai && self.current == AI_SIDE
    }

    /// Apply a human move for the current player
    pub fn play(&mut self, index: usize) -> Result<MoveReport> {
        self.play_at(index, Instant::now())
    }

    /// # Errors
    ///
    /// Returns error if the game is over, it is the AI's turn, or the cell is
    /// out of range or occupied.
    pub fn play_at(&mut self, index: usize, now: Instant) -> Result<MoveReport> {
        if !self.active {
            return Err(Error::GameOver);
        }
        if self.is_ai_turn() {
            return Err(Error::NotYourTurn {
                player: "the human player".to_string(),
            });
        }
        self.apply(index, now)
    }

    /// Let the synthetic opponent move
    pub fn play_ai(&mut self, selector: &mut MoveSelector) -> Result<MoveReport> {
        self.play_ai_at(selector, Instant::now())
    }

    /// # Errors
    ///
    /// Returns error if the game is over or it is not the AI's turn.
    pub fn play_ai_at(&mut self, selector: &mut MoveSelector, now: Instant) -> Result<MoveReport> {
        if !self.active {
            return Err(Error::GameOver);
        }
        if !self.is_ai_turn() {
            return Err(Error::NotYourTurn {
                player: "the AI".to_string(),
            });
        }
        let index = selector.select_move(&self.board, self.current);
        self.apply(index, now)
    }

    /// Best move for the side to move. Advisory only: nothing is changed.
    pub fn hint(&self) -> Option<usize> {
        if !self.active {
            return None;
        }
        search::hint(&self.board, self.current)
    }

    /// Advance the turn timer
    pub fn tick(&mut self, now: Instant) -> TimerEvent {
        if !self.active {
            return TimerEvent::Idle;
        }

        match self.timer.phase(now) {
            TimerPhase::Expired => {
                let skipped = self.current;
                warn!(player = %skipped, "turn timed out");
                self.pass_turn(now);
                TimerEvent::TurnSkipped {
                    skipped,
                    next: self.current,
                }
            }
            TimerPhase::HintDue if !self.hint_shown && !self.is_ai_turn() => {
                self.hint_shown = true;
                self.hint().map_or(TimerEvent::Idle, TimerEvent::HintDue)
            }
            _ => TimerEvent::Idle,
        }
    }

    /// Status line for the presentation layer
    pub fn status(&self) -> String {
        match self.outcome {
            Some(outcome) => outcome.to_string(),
            None => format!("Player {}'s Turn", self.current),
        }
    }

    fn apply(&mut self, index: usize, now: Instant) -> Result<MoveReport> {
        let player = self.current;
        self.board = self.board.place(index, player)?;
        let applied = Move {
            position: index,
            player,
        };
        self.history.push(applied);
        debug!(player = %player, position = index, board = %self.board.encode(), "move applied");

        let outcome = if self.board.has_won(player) {
            Some(GameOutcome::Win(player))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        };

        match outcome {
            Some(outcome) => {
                self.active = false;
                self.outcome = Some(outcome);
                info!(%outcome, moves = self.history.len(), "game over");
            }
            None => self.pass_turn(now),
        }

        Ok(MoveReport { applied, outcome })
    }

    fn pass_turn(&mut self, now: Instant) {
        self.current = self.current.opponent();
        self.timer.restart(now);
        self.hint_shown = false;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::selector::Policy;

    fn pvp() -> GameConfig {
        GameConfig::default().with_mode(GameMode::Pvp)
    }

    #[test]
    fn moves_alternate_and_restart_timer() {
        let start = Instant::now();
        let mut session = Session::started_at(&pvp(), start).unwrap();
        assert_eq!(session.status(), "Player X's Turn");

        let later = start + Duration::from_secs(10);
        session.play_at(4, later).unwrap();
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.timer().elapsed(later), Duration::ZERO);
        assert_eq!(session.status(), "Player O's Turn");
    }

    #[test]
    fn rejects_occupied_cell_without_changing_turn() {
        let mut session = Session::new(&pvp()).unwrap();
        session.play(0).unwrap();
        let err = session.play(0).unwrap_err();
        assert!(matches!(err, Error::InvalidMove { position: 0 }));
        assert_eq!(session.current_player(), Player::O);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn win_ends_the_game() {
        let mut session = Session::new(&pvp()).unwrap();
        for index in [0, 3, 1, 4] {
            assert!(session.play(index).unwrap().outcome.is_none());
        }
        let report = session.play(2).unwrap();
        assert_eq!(report.outcome, Some(GameOutcome::Win(Player::X)));
        assert!(!session.is_active());
        assert_eq!(session.status(), "Player X Wins!");
        assert!(matches!(session.play(5), Err(Error::GameOver)));
        assert_eq!(session.hint(), None);
    }

    #[test]
    fn human_cannot_move_for_ai() {
        let mut session = Session::new(&GameConfig::default()).unwrap();
        session.play(4).unwrap();
        assert!(session.is_ai_turn());
        assert!(matches!(session.play(0), Err(Error::NotYourTurn { .. })));

        let mut selector = MoveSelector::with_seed(Policy::Optimal, 1);
        let report = session.play_ai(&mut selector).unwrap();
        assert_eq!(report.applied.player, Player::O);
        assert!(!session.is_ai_turn());
        assert!(matches!(
            session.play_ai(&mut selector),
            Err(Error::NotYourTurn { .. })
        ));
    }

    #[test]
    fn hint_fires_once_then_turn_skips() {
        let start = Instant::now();
        let mut session = Session::started_at(&pvp(), start).unwrap();
        session.play_at(0, start).unwrap();
        session.play_at(4, start).unwrap();
        session.play_at(1, start).unwrap();
        let board_before = session.board();

        assert_eq!(session.tick(start + Duration::from_secs(5)), TimerEvent::Idle);
        // O must block the top row
        assert_eq!(
            session.tick(start + Duration::from_secs(15)),
            TimerEvent::HintDue(2)
        );
        assert_eq!(session.tick(start + Duration::from_secs(16)), TimerEvent::Idle);
        assert_eq!(session.board(), board_before);

        assert_eq!(
            session.tick(start + Duration::from_secs(30)),
            TimerEvent::TurnSkipped {
                skipped: Player::O,
                next: Player::X
            }
        );
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.board(), board_before);
    }

    #[test]
    fn rejects_timer_that_would_never_hint() {
        let config = pvp().with_timer(30, 30);
        assert!(matches!(
            Session::new(&config),
            Err(Error::InvalidConfiguration { .. })
        ));

        let config = pvp().with_optimal_probability(1.5);
        assert!(matches!(
            Session::new(&config),
            Err(Error::InvalidProbability { .. })
        ));
    }
}
