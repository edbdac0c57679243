//! Command-line presentation layer
//!
//! Interactive play, one-shot hint and analysis queries, and AI-vs-AI
//! matches.

pub mod commands;
pub mod output;
