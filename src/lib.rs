//! # rps-arbiter
//!
//! A deterministic referee for Rock-Paper-Scissors with a once-per-game bomb,
//! narrated by an untrusted conversational controller.
//!
//! ## Design Principles
//!
//! 1. **Controller narrates, referee decides**: The controller may only
//!    request actions. The moves used for a commit always come from the rules
//!    engine, never from the request.
//!
//! 2. **One writer**: `Referee` is the only code that mutates `GameState`,
//!    and each commit is all-or-nothing.
//!
//! 3. **Injected randomness**: The bot draws from a `RandomSource`, so games
//!    are reproducible from a seed and tests can script every draw.
//!
//! ## Modules
//!
//! - `core`: Moves, configuration, RNG, state, errors
//! - `rules`: Move validation, round resolution, bot policy
//! - `referee`: The state mutator
//! - `protocol`: Action requests, responses and the adapter
//! - `controller`: The controller boundary and an offline controller
//! - `session`: Turn orchestration

pub mod controller;
pub mod core;
pub mod protocol;
pub mod referee;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ArbiterError, GameConfig, GameRng, GameState, Move, RandomSource, RoundRecord, Score, Side, StateView,
    Winner,
};

pub use crate::rules::{choose_bot_move, resolve_round, validate_move, GameResult};

pub use crate::referee::{Referee, RoundOutcome};

pub use crate::protocol::{ActionRequest, ActionResponse, ActionSpec, Adapter, TurnContext, TurnTruth};

pub use crate::controller::{Controller, ControllerError, ControllerReply, ControllerRequest, ScriptedController};

pub use crate::session::{Session, TurnReport};
