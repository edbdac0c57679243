//! Repeated games between two agents

use std::{fs::File, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    Error, Result,
    ports::{Agent, Observer},
    tictactoe::{Board, GameOutcome, Player},
};

/// Match configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Which player opens each game
    pub first_player: Player,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            games: 100,
            seed: None,
            first_player: Player::X,
        }
    }
}

/// Tally of a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub x_agent: String,
    pub o_agent: String,
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub x_win_rate: f64,
    pub o_win_rate: f64,
    pub draw_rate: f64,
}

impl MatchResult {
    pub fn new(
        x_agent: impl Into<String>,
        o_agent: impl Into<String>,
        x_wins: usize,
        o_wins: usize,
        draws: usize,
    ) -> Self {
        let total_games = x_wins + o_wins + draws;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            x_agent: x_agent.into(),
            o_agent: o_agent.into(),
            total_games,
            x_wins,
            o_wins,
            draws,
            x_win_rate: rate(x_wins),
            o_win_rate: rate(o_wins),
            draw_rate: rate(draws),
        }
    }

    /// Save result to JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Io {
            operation: format!("create match result file {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Load result from JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            operation: format!("open match result file {}", path.display()),
            source,
        })?;
        let result = serde_json::from_reader(file)?;
        Ok(result)
    }
}

/// Plays a series of games between an X agent and an O agent
pub struct Arena {
    config: MatchConfig,
    observers: Vec<Box<dyn Observer>>,
}

impl Arena {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the arena
    pub fn with_observer(mut self, observer: Box<dyn Observer>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Play all configured games.
    ///
    /// With a seed, X is seeded with it and O with the next value, so the
    /// two agents never share a random stream.
    ///
    /// # Errors
    ///
    /// Returns error if an agent fails or picks an illegal cell, or an
    /// observer fails.
    pub fn run(&mut self, x_agent: &mut dyn Agent, o_agent: &mut dyn Agent) -> Result<MatchResult> {
        if let Some(seed) = self.config.seed {
            x_agent.set_rng_seed(seed)?;
            o_agent.set_rng_seed(seed.wrapping_add(1))?;
        }

        info!(
            x = x_agent.name(),
            o = o_agent.name(),
            games = self.config.games,
            first = %self.config.first_player,
            "match started"
        );

        for observer in &mut self.observers {
            observer.on_match_start(self.config.games)?;
        }

        let (mut x_wins, mut o_wins, mut draws) = (0, 0, 0);
        for game_num in 1..=self.config.games {
            let outcome = self.play_game(game_num, x_agent, o_agent)?;
            match outcome {
                GameOutcome::Win(Player::X) => x_wins += 1,
                GameOutcome::Win(Player::O) => o_wins += 1,
                GameOutcome::Draw => draws += 1,
            }

            for observer in &mut self.observers {
                observer.on_game_end(game_num, outcome)?;
            }
        }

        for observer in &mut self.observers {
            observer.on_match_end()?;
        }

        let result = MatchResult::new(x_agent.name(), o_agent.name(), x_wins, o_wins, draws);
        info!(
            x_wins = result.x_wins,
            o_wins = result.o_wins,
            draws = result.draws,
            "match finished"
        );
        Ok(result)
    }

    fn play_game(
        &mut self,
        game_num: usize,
        x_agent: &mut dyn Agent,
        o_agent: &mut dyn Agent,
    ) -> Result<GameOutcome> {
        let mut board = Board::new();
        let mut current = self.config.first_player;

        loop {
            if let Some(outcome) = board.outcome() {
                debug!(game_num, %outcome, board = %board.encode(), "game finished");
                return Ok(outcome);
            }

            let agent: &mut dyn Agent = match current {
                Player::X => &mut *x_agent,
                Player::O => &mut *o_agent,
            };

            let position = agent.select_move(&board, current)?;
            if position >= 9 || !board.is_empty(position) {
                return Err(Error::IllegalAgentMove {
                    agent: agent.name().to_string(),
                    position,
                    reason: format!("not an empty cell on {}", board.encode()),
                });
            }

            for observer in &mut self.observers {
                observer.on_move(game_num, &board, current, position)?;
            }

            board = board.place(position, current)?;
            current = current.opponent();
        }
    }
}
