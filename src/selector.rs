//! Move selection policies for the synthetic opponent
//!
//! Three policies are available:
//! - `Random`: uniform over the empty cells
//! - `Blended`: optimal with a configurable probability, random otherwise
//! - `Optimal`: full-depth minimax

use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, prelude::IndexedRandom, random, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    Error, Result,
    ports::Agent,
    search,
    tictactoe::{Board, Player},
};

/// Chance that the blended policy defers to the optimal one
pub const DEFAULT_OPTIMAL_PROBABILITY: f64 = 0.6;

/// Which strategy picks the move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    Random,
    Blended,
    Optimal,
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Policy::Random => "random",
            Policy::Blended => "blended",
            Policy::Optimal => "optimal",
        })
    }
}

impl FromStr for Policy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(Policy::Random),
            "blended" | "mixed" => Ok(Policy::Blended),
            "optimal" | "minimax" => Ok(Policy::Optimal),
            _ => Err(Error::ParseToken {
                kind: "policy",
                input: s.to_string(),
                expected: "random, blended, optimal".to_string(),
            }),
        }
    }
}

/// Player-facing difficulty tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    #[default]
    Hard,
}

impl Difficulty {
    pub fn policy(self) -> Policy {
        match self {
            Difficulty::Easy => Policy::Random,
            Difficulty::Medium => Policy::Blended,
            Difficulty::Hard => Policy::Optimal,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::ParseToken {
                kind: "difficulty",
                input: s.to_string(),
                expected: "easy, medium, hard".to_string(),
            }),
        }
    }
}

/// A selected move and the strategy that actually produced it.
///
/// `via` is never `Blended`: a blended selector reports whichever of the
/// random or optimal strategies it delegated to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub index: usize,
    pub via: Policy,
}

/// Check a probability is usable by the blended policy
pub fn validate_probability(value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::InvalidProbability { value })
    }
}

/// Stateful move selector owning its random number generator
pub struct MoveSelector {
    name: String,
    policy: Policy,
    optimal_probability: f64,
    rng: StdRng,
}

impl MoveSelector {
    /// Create a selector seeded from system entropy
    pub fn new(policy: Policy) -> Self {
        Self::with_seed(policy, random())
    }

    /// Create a selector with a deterministic seed
    pub fn with_seed(policy: Policy, seed: u64) -> Self {
        Self {
            name: policy.to_string(),
            policy,
            optimal_probability: DEFAULT_OPTIMAL_PROBABILITY,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Set the blended policy's chance of deferring to the optimal policy.
    ///
    /// # Errors
    ///
    /// Returns error unless `probability` lies within [0, 1].
    pub fn with_optimal_probability(mut self, probability: f64) -> Result<Self> {
        self.optimal_probability = validate_probability(probability)?;
        Ok(self)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn optimal_probability(&self) -> f64 {
        self.optimal_probability
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Pick a move and report which strategy produced it.
    ///
    /// # Panics
    ///
    /// Panics if the board has no empty cell or already has a winner. Callers
    /// must check for game over before asking for a move.
    pub fn choose(&mut self, board: &Board, side: Player) -> Choice {
        assert_playable(board);

        let via = match self.policy {
            Policy::Random => Policy::Random,
            Policy::Optimal => Policy::Optimal,
            Policy::Blended => {
                if self.rng.random_bool(self.optimal_probability) {
                    Policy::Optimal
                } else {
                    Policy::Random
                }
            }
        };

        let index = match via {
            Policy::Optimal => optimal_cell(board, side),
            _ => random_cell(board, &mut self.rng),
        };

        debug!(
            selector = %self.name,
            policy = %self.policy,
            via = %via,
            side = %side,
            index,
            "selected move"
        );

        Choice { index, via }
    }

    /// Pick a move under the configured policy.
    ///
    /// # Panics
    ///
    /// Panics on a finished board, like [`MoveSelector::choose`].
    pub fn select_move(&mut self, board: &Board, side: Player) -> usize {
        self.choose(board, side).index
    }
}

impl Agent for MoveSelector {
    fn select_move(&mut self, board: &Board, side: Player) -> Result<usize> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }
        Ok(self.choose(board, side).index)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.reseed(seed);
        Ok(())
    }
}

/// Pick a move for `side` under `policy` using a freshly seeded generator.
///
/// The blended policy uses [`DEFAULT_OPTIMAL_PROBABILITY`]; build a
/// [`MoveSelector`] to change it or to make choices reproducible.
///
/// # Panics
///
/// Panics if the board has no empty cell or already has a winner.
pub fn select_move(board: &Board, side: Player, policy: Policy) -> usize {
    MoveSelector::new(policy).select_move(board, side)
}

fn assert_playable(board: &Board) {
    assert!(
        !board.is_full(),
        "move requested on a full board: {}",
        board.encode()
    );
    assert!(
        board.winner().is_none(),
        "move requested on a decided board: {}",
        board.encode()
    );
}

fn random_cell(board: &Board, rng: &mut StdRng) -> usize {
    let cells = board.empty_cells();
    *cells
        .choose(rng)
        .expect("playable board has at least one empty cell")
}

fn optimal_cell(board: &Board, side: Player) -> usize {
    search::search(board, side)
        .index
        .expect("search over a playable board always picks a move")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_only_picks_empty_cells() {
        let board = Board::from_string("XOXOX....").unwrap();
        let mut selector = MoveSelector::with_seed(Policy::Random, 7);
        for _ in 0..200 {
            let index = selector.select_move(&board, Player::O);
            assert!(board.is_empty(index), "picked occupied cell {index}");
        }
    }

    #[test]
    fn random_covers_every_empty_cell() {
        let board = Board::from_string("XO.......").unwrap();
        let mut selector = MoveSelector::with_seed(Policy::Random, 11);
        let mut seen = [0usize; 9];
        for _ in 0..2_000 {
            seen[selector.select_move(&board, Player::X)] += 1;
        }
        assert_eq!(seen[0], 0);
        assert_eq!(seen[1], 0);
        for (index, &hits) in seen.iter().enumerate().skip(2) {
            // 7 cells, expected ~286 each
            assert!((200..380).contains(&hits), "cell {index} hit {hits} times");
        }
    }

    #[test]
    fn optimal_is_deterministic() {
        let board = Board::from_string("X...O....").unwrap();
        let mut a = MoveSelector::with_seed(Policy::Optimal, 1);
        let mut b = MoveSelector::with_seed(Policy::Optimal, 2);
        let first = a.select_move(&board, Player::X);
        assert_eq!(first, a.select_move(&board, Player::X));
        assert_eq!(first, b.select_move(&board, Player::X));
    }

    #[test]
    fn blended_reports_delegate() {
        let board = Board::from_string("XX.OO....").unwrap();
        let mut selector = MoveSelector::with_seed(Policy::Blended, 3);
        for _ in 0..100 {
            let choice = selector.choose(&board, Player::O);
            assert_ne!(choice.via, Policy::Blended);
            if choice.via == Policy::Optimal {
                assert_eq!(choice.index, 5);
            }
        }
    }

    #[test]
    fn blended_extremes_collapse_to_single_policy() {
        let board = Board::from_string("XX.OO....").unwrap();

        let mut always = MoveSelector::with_seed(Policy::Blended, 5)
            .with_optimal_probability(1.0)
            .unwrap();
        let mut never = MoveSelector::with_seed(Policy::Blended, 5)
            .with_optimal_probability(0.0)
            .unwrap();
        for _ in 0..50 {
            assert_eq!(always.choose(&board, Player::O).via, Policy::Optimal);
            assert_eq!(never.choose(&board, Player::O).via, Policy::Random);
        }
    }

    #[test]
    fn rejects_out_of_range_probability() {
        assert!(
            MoveSelector::new(Policy::Blended)
                .with_optimal_probability(1.5)
                .is_err()
        );
        assert!(validate_probability(f64::NAN).is_err());
        assert!(validate_probability(-0.1).is_err());
        assert_eq!(validate_probability(0.6).unwrap(), 0.6);
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn panics_on_full_board() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        select_move(&board, Player::X, Policy::Random);
    }

    #[test]
    #[should_panic(expected = "decided board")]
    fn panics_on_won_board() {
        let board = Board::from_string("XXXOO....").unwrap();
        select_move(&board, Player::O, Policy::Optimal);
    }

    #[test]
    fn agent_interface_errors_instead_of_panicking() {
        let board = Board::from_string("XXXOO....").unwrap();
        let mut selector = MoveSelector::with_seed(Policy::Optimal, 0);
        let err = Agent::select_move(&mut selector, &board, Player::O).unwrap_err();
        assert!(matches!(err, Error::GameOver));
    }

    #[test]
    fn parses_policy_and_difficulty_tokens() {
        assert_eq!("Minimax".parse::<Policy>().unwrap(), Policy::Optimal);
        assert_eq!("blended".parse::<Policy>().unwrap(), Policy::Blended);
        assert!("smart".parse::<Policy>().is_err());

        assert_eq!("medium".parse::<Difficulty>().unwrap().policy(), Policy::Blended);
        assert_eq!(Difficulty::Easy.policy(), Policy::Random);
        assert_eq!(Difficulty::default().policy(), Policy::Optimal);
    }
}
