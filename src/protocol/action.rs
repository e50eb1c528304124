//! Action requests: what a controller may ask the referee to do.
//!
//! A request is a name plus a free-form argument map. Only two names are
//! recognised; argument values are advisory and never trusted.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Wire name for committing a round.
pub const COMMIT_ROUND: &str = "update_game_state";

/// Wire name for reading the scoreboard.
pub const READ_STATE: &str = "get_game_state";

/// The recognised actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    CommitRound,
    ReadState,
}

impl ActionKind {
    /// Look up an action by wire name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            COMMIT_ROUND => Some(ActionKind::CommitRound),
            READ_STATE => Some(ActionKind::ReadState),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::CommitRound => COMMIT_ROUND,
            ActionKind::ReadState => READ_STATE,
        }
    }
}

/// A controller-issued action request.
///
/// ```
/// use rps_arbiter::protocol::{ActionKind, ActionRequest};
///
/// let req = ActionRequest::commit("rock", "paper");
/// assert_eq!(req.kind(), Some(ActionKind::CommitRound));
/// assert_eq!(req.arg_str("bot_move"), Some("paper"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub name: String,
    #[serde(default)]
    pub args: Map<String, Value>,
}

impl ActionRequest {
    /// Request with no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Map::new(),
        }
    }

    /// Commit request carrying the controller's (advisory) moves.
    #[must_use]
    pub fn commit(user_move: &str, bot_move: &str) -> Self {
        Self::new(COMMIT_ROUND)
            .with_arg("user_move", user_move)
            .with_arg("bot_move", bot_move)
    }

    /// State read request.
    #[must_use]
    pub fn read_state() -> Self {
        Self::new(READ_STATE)
    }

    /// Add an argument.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> Option<ActionKind> {
        ActionKind::from_name(&self.name)
    }

    /// String argument, if present and a string.
    #[must_use]
    pub fn arg_str(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(Value::as_str)
    }
}

/// Declaration of one action in the controller's vocabulary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionSpec {
    pub name: String,
    pub description: String,
    /// JSON schema of the argument object.
    pub parameters: Value,
}

impl ActionSpec {
    /// The full vocabulary offered to a controller.
    #[must_use]
    pub fn vocabulary() -> Vec<ActionSpec> {
        vec![
            ActionSpec {
                name: COMMIT_ROUND.to_string(),
                description: "Updates game state after a round. Call this when user makes a move.".to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "user_move": {
                            "type": "string",
                            "description": "User's move: rock, paper, scissors, bomb, or invalid",
                            "enum": ["rock", "paper", "scissors", "bomb", "invalid"]
                        },
                        "bot_move": {
                            "type": "string",
                            "description": "Bot's move: rock, paper, scissors, or bomb",
                            "enum": ["rock", "paper", "scissors", "bomb"]
                        }
                    },
                    "required": ["user_move", "bot_move"]
                }),
            },
            ActionSpec {
                name: READ_STATE.to_string(),
                description: "Get current game state.".to_string(),
                parameters: json!({ "type": "object", "properties": {} }),
            },
        ]
    }
}
