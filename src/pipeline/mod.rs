//! Match pipeline
//!
//! This module provides:
//! - An arena that plays repeated games between two agents
//! - Observers for progress reporting during matches

pub mod arena;
pub mod observers;

pub use arena::{Arena, MatchConfig, MatchResult};
pub use observers::{MoveTraceObserver, ProgressObserver};

pub use crate::ports::{Agent, Observer};
