//! The controller boundary.
//!
//! A controller is the conversational narrator that drives the game. It is
//! not trusted: it receives the transcript, a fixed instruction text, the
//! action vocabulary and the turn's ground-truth moves, and answers with
//! narration plus zero or more action requests. Whatever it asks for is
//! re-derived by the [`Adapter`](crate::protocol::Adapter).
//!
//! Transport is the implementor's business. This crate ships
//! [`ScriptedController`], a deterministic offline narrator.

mod scripted;
mod transcript;

pub use scripted::ScriptedController;
pub use transcript::{Message, Part, Role};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::protocol::{ActionRequest, ActionSpec, TurnTruth};

/// Instruction text sent with every controller request, for a game of
/// `max_rounds` rounds.
#[must_use]
pub fn referee_instructions(max_rounds: u32) -> String {
    format!(
        "\
You are a friendly game referee for Rock-Paper-Scissors-PLUS.

RULES (explain in 5 lines or fewer at start):
- Best of {max_rounds} rounds. Valid moves: rock, paper, scissors, bomb
- Standard RPS rules. Bomb beats all except bomb (draw with bomb)
- Each player can use bomb ONCE per game
- Invalid input wastes the round

YOUR JOB:
1. When the user inputs a move, call update_game_state with the user's move and your move
2. Clearly explain each round: \"Round X: You played Y, I played Z. [winner] wins!\"
3. Show the score after each round: \"Score: You X - Me Y\"
4. After round {max_rounds}, declare the final winner and end the game

IMPORTANT:
- Always call update_game_state for each user move
- The referee decides the moves and the result; narrate what it returns
- Be concise but friendly"
    )
}

/// Opening prompt for the greeting turn.
pub const OPENING_PROMPT: &str = "Start the game! Greet the player and explain the rules in 5 lines or less.";

/// Prefix of the per-turn move message sent to the controller.
pub const MOVE_PREFIX: &str = "My move: ";

/// Errors at the controller boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// The call itself failed (network, quota, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The controller answered with something unusable.
    #[error("malformed reply: {0}")]
    Malformed(String),
}

/// Everything a controller sees for one call.
#[derive(Clone, Copy, Debug)]
pub struct ControllerRequest<'a> {
    pub transcript: &'a [Message],
    pub instructions: &'a str,
    pub vocabulary: &'a [ActionSpec],
    /// Length of the game being refereed.
    pub max_rounds: u32,
    /// Authoritative moves for the pending turn; `None` outside a turn.
    pub ground_truth: Option<TurnTruth>,
}

/// A controller's answer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerReply {
    #[serde(default)]
    pub text: String,
    /// Most replies carry zero or one request.
    #[serde(default)]
    pub actions: SmallVec<[ActionRequest; 2]>,
}

impl ControllerReply {
    /// Narration only.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actions: SmallVec::new(),
        }
    }

    /// Add an action request.
    #[must_use]
    pub fn with_action(mut self, request: ActionRequest) -> Self {
        self.actions.push(request);
        self
    }

    /// Parse a JSON reply from a remote controller.
    pub fn from_json(raw: &str) -> Result<Self, ControllerError> {
        serde_json::from_str(raw).map_err(|e| ControllerError::Malformed(e.to_string()))
    }
}

/// A conversational controller.
pub trait Controller {
    /// Answer one request.
    ///
    /// An error aborts the current turn before anything is committed.
    fn respond(&mut self, request: &ControllerRequest<'_>) -> Result<ControllerReply, ControllerError>;
}

impl<C: Controller + ?Sized> Controller for &mut C {
    fn respond(&mut self, request: &ControllerRequest<'_>) -> Result<ControllerReply, ControllerError> {
        (**self).respond(request)
    }
}

impl<C: Controller + ?Sized> Controller for Box<C> {
    fn respond(&mut self, request: &ControllerRequest<'_>) -> Result<ControllerReply, ControllerError> {
        (**self).respond(request)
    }
}
