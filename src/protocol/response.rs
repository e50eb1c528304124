//! Structured responses returned to the controller.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::ArbiterError;
use crate::core::state::StateView;
use crate::referee::RoundOutcome;

/// Why an action request was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("no move is pending; a round can only be committed during a turn")]
    NoPendingMove,

    #[error("round already committed this turn")]
    AlreadyCommitted,

    #[error("{0}")]
    Rejected(#[from] ArbiterError),
}

/// Response to one action request.
///
/// Serializes to a flat object of primitive fields: the round confirmation,
/// the state snapshot, or `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionResponse {
    Round(RoundOutcome),
    State(StateView),
    Error { error: String },
}

impl ActionResponse {
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, ActionResponse::Error { .. })
    }

    /// The committed round, if this response carries one.
    #[must_use]
    pub fn round(&self) -> Option<&RoundOutcome> {
        match self {
            ActionResponse::Round(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// JSON form handed across the narration boundary.
    #[must_use]
    pub fn to_json(&self) -> Value {
        // Every variant is a plain struct of primitives; this cannot fail.
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl From<ActionError> for ActionResponse {
    fn from(err: ActionError) -> Self {
        ActionResponse::Error {
            error: err.to_string(),
        }
    }
}
