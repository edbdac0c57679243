//! Application layer: configuration, the game session and its turn timer.
//!
//! The presentation layer owns a [`Session`] and drives it:
//!
//! ```
//! use elite_tictactoe::app::{GameConfig, GameMode, Session};
//!
//! let config = GameConfig::default().with_mode(GameMode::Pvp);
//! let mut session = Session::new(&config)?;
//! session.play(4)?;
//! assert_eq!(session.status(), "Player O's Turn");
//! # Ok::<(), elite_tictactoe::Error>(())
//! ```

pub mod config;
pub mod session;
pub mod timer;

pub use config::{GameConfig, GameMode};
pub use session::{AI_SIDE, MoveReport, Session, TimerEvent};
pub use timer::{TimerBand, TimerPhase, TurnTimer};
