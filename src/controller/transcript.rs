//! Conversation transcript exchanged with the controller.

use serde::{Deserialize, Serialize};

use crate::protocol::{ActionRequest, ActionResponse};

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The player, or the referee speaking on the player's side (action results).
    User,
    /// The controller.
    Model,
}

/// One piece of a message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Part {
    Text { text: String },
    ActionCall { request: ActionRequest },
    ActionResult { name: String, response: ActionResponse },
}

/// A transcript entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Message {
    #[must_use]
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    #[must_use]
    pub fn model_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            parts: vec![Part::Text { text: text.into() }],
        }
    }

    /// Concatenated text parts.
    #[must_use]
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Action results carried by this message.
    pub fn results(&self) -> impl Iterator<Item = &ActionResponse> {
        self.parts.iter().filter_map(|part| match part {
            Part::ActionResult { response, .. } => Some(response),
            _ => None,
        })
    }
}
