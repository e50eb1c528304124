//! Errors raised by the referee and the turn loop.

use crate::controller::ControllerError;

/// Errors surfaced while committing rounds or running a turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArbiterError {
    /// A round was committed after the game ended.
    #[error("game is over after {rounds} rounds; no further rounds can be committed")]
    GameOver { rounds: u32 },

    /// The controller call failed or returned something unusable.
    #[error("controller failed: {0}")]
    Controller(#[from] ControllerError),
}
