//! Core types: moves, configuration, RNG, state, errors.
//!
//! Nothing in here performs I/O. The referee is the only writer of
//! `GameState`; everything else reads `StateView` snapshots.

pub mod config;
pub mod error;
pub mod moves;
pub mod rng;
pub mod state;

pub use config::{GameConfig, DEFAULT_MAX_ROUNDS};
pub use error::ArbiterError;
pub use moves::{Move, ParseMoveError, Side, Winner};
pub use rng::{GameRng, RandomSource};
pub use state::{GameState, ParseScoreError, RoundRecord, Score, StateView};
