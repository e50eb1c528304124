//! Rules engine: pure functions for the game's rules.
//!
//! - `validate_move`: raw input to a checked `Move`
//! - `resolve_round`: two moves to a round `Winner`
//! - `choose_bot_move`: the bot's policy
//!
//! The referee calls into these but never reimplements them.

pub mod bot;
pub mod engine;

pub use bot::choose_bot_move;
pub use engine::{resolve_round, validate_move, GameResult};
