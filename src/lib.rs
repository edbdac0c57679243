//! Tic-Tac-Toe engine with synthetic opponents
//!
//! This crate provides:
//! - A pure rules engine over a fixed 3x3 board
//! - Full-depth minimax search and hints
//! - Random, blended and optimal move selection policies
//! - A game session with turn timer for presentation layers to drive
//! - An arena for playing policies against each other
//!
//! ```
//! use elite_tictactoe::{
//!     selector::{Policy, select_move},
//!     tictactoe::{Board, Player, has_won},
//! };
//!
//! let board = Board::from_string("XX.OO....")?;
//! assert!(!has_won(&board, Player::O));
//! assert_eq!(select_move(&board, Player::O, Policy::Optimal), 5);
//! # Ok::<(), elite_tictactoe::Error>(())
//! ```

pub mod app;
pub mod cli;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod search;
pub mod selector;
pub mod tictactoe;

pub use error::{Error, Result};
pub use search::{SearchOutcome, hint, search};
pub use selector::{Difficulty, MoveSelector, Policy, select_move};
pub use tictactoe::{Board, Cell, GameOutcome, Player, empty_cells, has_won, is_full};
