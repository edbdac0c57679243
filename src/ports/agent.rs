//! Agent port - abstraction over anything that picks moves
//!
//! The arena plays games between two agents without knowing whether they
//! search, roll dice, or read from a terminal.

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Agent trait - unified interface for move sources
///
/// # Examples
///
/// ```no_run
/// use elite_tictactoe::{
///     ports::Agent,
///     tictactoe::{Board, Player},
/// };
///
/// fn first_reply(agent: &mut dyn Agent) -> elite_tictactoe::Result<usize> {
///     let board = Board::new().place(4, Player::X)?;
///     agent.select_move(&board, Player::O)
/// }
/// ```
pub trait Agent: Send {
    /// Select a move for `side` on the given board.
    ///
    /// The agent should return the position (0-8) of an empty cell.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is already decided, or if the agent
    /// cannot produce a move (e.g. its input source closed).
    fn select_move(&mut self, board: &Board, side: Player) -> Result<usize>;

    /// Get the agent's name.
    ///
    /// Used for identification in match summaries and logging.
    fn name(&self) -> &str;

    /// Seed the agent's internal random number generator.
    ///
    /// Arenas call this when supplied with a deterministic seed.
    /// Deterministic agents can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
