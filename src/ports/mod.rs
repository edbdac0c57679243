//! Ports (trait boundaries) between the game core and its drivers.
//!
//! Move sources and match observers are defined here and implemented by the
//! selector, the CLI and the pipeline observers.

pub mod agent;
pub mod observer;

pub use agent::Agent;
pub use observer::Observer;
