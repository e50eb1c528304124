//! Mediation protocol between the referee and an untrusted controller.
//!
//! ## Flow
//!
//! 1. The controller emits `ActionRequest`s (name + advisory args)
//! 2. `Adapter::dispatch` maps each onto the referee, taking moves from the
//!    turn's `TurnTruth` rather than from the request
//! 3. The result comes back as a serializable `ActionResponse`
//!
//! Unknown names produce `{"error": "unknown action: <name>"}`.
//!
//! ```
//! use rps_arbiter::core::Move;
//! use rps_arbiter::protocol::{ActionRequest, Adapter, TurnContext, TurnTruth};
//! use rps_arbiter::referee::Referee;
//!
//! let mut referee = Referee::default();
//! let mut ctx = TurnContext::for_turn(TurnTruth { user_move: Move::Rock, bot_move: Move::Scissors });
//!
//! // The controller claims the bot threw a bomb; the referee ignores it.
//! let response = Adapter::new().dispatch(&mut referee, &ActionRequest::commit("rock", "bomb"), &mut ctx);
//! assert_eq!(response.to_json()["round_winner"], "user");
//! ```

mod action;
mod adapter;
mod response;

pub use action::{ActionKind, ActionRequest, ActionSpec, COMMIT_ROUND, READ_STATE};
pub use adapter::{Adapter, TurnContext, TurnTruth};
pub use response::{ActionError, ActionResponse};
