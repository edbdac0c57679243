//! Configuration for interactive games.

use std::{fmt, path::Path, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    selector::{DEFAULT_OPTIMAL_PROBABILITY, Difficulty, validate_probability},
};

/// Who controls O
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans share the board
    Pvp,
    /// Human plays X, the synthetic opponent plays O
    #[default]
    Ai,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GameMode::Pvp => "pvp",
            GameMode::Ai => "ai",
        })
    }
}

impl FromStr for GameMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pvp" => Ok(GameMode::Pvp),
            "ai" | "pve" => Ok(GameMode::Ai),
            _ => Err(Error::ParseToken {
                kind: "game mode",
                input: s.to_string(),
                expected: "pvp, ai".to_string(),
            }),
        }
    }
}

/// Configuration for an interactive game session.
///
/// # Examples
///
/// ```
/// use elite_tictactoe::app::{GameConfig, GameMode};
/// use elite_tictactoe::selector::Difficulty;
///
/// let config = GameConfig::default()
///     .with_mode(GameMode::Ai)
///     .with_difficulty(Difficulty::Medium)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Chance that the medium opponent plays the optimal move
    pub optimal_probability: f64,
    /// Seconds into a turn before a hint is surfaced
    pub hint_after_secs: u64,
    /// Seconds into a turn before the turn passes to the other side
    pub skip_after_secs: u64,
    /// Cosmetic pause before an AI move is shown
    pub ai_delay_ms: u64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            optimal_probability: DEFAULT_OPTIMAL_PROBABILITY,
            hint_after_secs: 15,
            skip_after_secs: 30,
            ai_delay_ms: 600,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn with_optimal_probability(mut self, probability: f64) -> Self {
        self.optimal_probability = probability;
        self
    }

    pub fn with_timer(mut self, hint_after_secs: u64, skip_after_secs: u64) -> Self {
        self.hint_after_secs = hint_after_secs;
        self.skip_after_secs = skip_after_secs;
        self
    }

    pub fn with_ai_delay_ms(mut self, delay: u64) -> Self {
        self.ai_delay_ms = delay;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn hint_after(&self) -> Duration {
        Duration::from_secs(self.hint_after_secs)
    }

    pub fn skip_after(&self) -> Duration {
        Duration::from_secs(self.skip_after_secs)
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Check the values are usable.
    ///
    /// # Errors
    ///
    /// Returns error if the probability is outside [0, 1], the skip timeout
    /// is zero, or the hint would arrive at or after the skip.
    pub fn validate(&self) -> Result<()> {
        validate_probability(self.optimal_probability)?;

        if self.skip_after_secs == 0 {
            return Err(Error::InvalidConfiguration {
                message: "skip_after_secs must be positive".to_string(),
            });
        }

        if self.hint_after_secs >= self.skip_after_secs {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "hint_after_secs ({}) must be less than skip_after_secs ({})",
                    self.hint_after_secs, self.skip_after_secs
                ),
            });
        }

        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config file {}", path.display()),
            source,
        })?;
        let config: GameConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create config file {}", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
