//! Deterministic offline controller.
//!
//! Behaves like a well-mannered narrator: greets, asks for a commit on every
//! move message, and narrates whatever the referee returned. Its guess of
//! the bot's move is deliberately made up; the adapter overrides it.

use std::fmt::Write as _;

use super::transcript::Message;
use super::{Controller, ControllerError, ControllerReply, ControllerRequest, MOVE_PREFIX};
use crate::core::moves::{Move, Winner};
use crate::protocol::{ActionRequest, ActionResponse};
use crate::referee::RoundOutcome;

fn greeting(max_rounds: u32) -> String {
    format!(
        "\
Welcome to Rock-Paper-Scissors-PLUS! I'm your referee.
- Best of {max_rounds} rounds. Valid moves: rock, paper, scissors, bomb
- Rock beats scissors, scissors beat paper, paper beats rock
- Bomb beats everything except another bomb, and each of us may use it once
- Anything else wastes the round. Make your first move!"
    )
}

/// Offline narrator.
#[derive(Clone, Debug)]
pub struct ScriptedController {
    guessed_bot_move: Move,
}

impl ScriptedController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            guessed_bot_move: Move::Rock,
        }
    }

    /// Use a specific (advisory) bot move in commit requests.
    #[must_use]
    pub fn with_guess(mut self, guessed_bot_move: Move) -> Self {
        self.guessed_bot_move = guessed_bot_move;
        self
    }
}

impl Default for ScriptedController {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for ScriptedController {
    fn respond(&mut self, request: &ControllerRequest<'_>) -> Result<ControllerReply, ControllerError> {
        let last = request
            .transcript
            .last()
            .ok_or_else(|| ControllerError::Malformed("empty transcript".to_string()))?;

        let results: Vec<&ActionResponse> = last.results().collect();
        if !results.is_empty() {
            return Ok(ControllerReply::text(narrate(&results)));
        }

        if request.ground_truth.is_none() {
            return Ok(ControllerReply::text(greeting(request.max_rounds)));
        }

        let said = last.text();
        let raw = said.strip_prefix(MOVE_PREFIX).unwrap_or(&said).trim();
        Ok(ControllerReply::text("Let's see how that plays out...")
            .with_action(ActionRequest::commit(raw, self.guessed_bot_move.as_str())))
    }
}

fn narrate(results: &[&ActionResponse]) -> String {
    let mut out = String::new();
    for response in results {
        if !out.is_empty() {
            out.push('\n');
        }
        match response {
            ActionResponse::Round(outcome) => narrate_round(&mut out, outcome),
            ActionResponse::State(view) => {
                let _ = write!(
                    out,
                    "We've played {} of {} rounds. Score: You {} - Me {}",
                    view.round, view.max_rounds, view.user_score, view.bot_score
                );
            }
            ActionResponse::Error { error } => {
                let _ = write!(out, "Hmm, the referee refused that: {error}");
            }
        }
    }
    out
}

fn narrate_round(out: &mut String, outcome: &RoundOutcome) {
    let verdict = match outcome.round_winner {
        Winner::User => "You win this round!",
        Winner::Bot if outcome.user_move == Move::Invalid => "That wasn't a valid move, so the round goes to me.",
        Winner::Bot => "I win this round!",
        Winner::Draw => "It's a draw!",
    };

    let _ = write!(
        out,
        "Round {}: You played {}, I played {}. {}\nScore: You {} - Me {}",
        outcome.round_number, outcome.user_move, outcome.bot_move, verdict, outcome.user_score, outcome.bot_score
    );

    if outcome.game_over {
        out.push_str("\nThat was the final round!");
    }
}
