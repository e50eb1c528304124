//! Dispatch of controller action requests onto the referee.
//!
//! The controller's arguments are never used. For a commit, the moves come
//! from the turn's [`TurnTruth`], computed by the rules engine before the
//! controller was consulted.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::action::{ActionKind, ActionRequest};
use super::response::{ActionError, ActionResponse};
use crate::core::moves::Move;
use crate::referee::Referee;

/// Authoritative moves for the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnTruth {
    /// Validated user move (`Invalid` when validation failed).
    pub user_move: Move,
    /// Bot move chosen by the rules engine.
    pub bot_move: Move,
}

/// Per-turn dispatch context.
#[derive(Clone, Debug, Default)]
pub struct TurnContext {
    truth: Option<TurnTruth>,
    committed: bool,
}

impl TurnContext {
    /// Context for a turn with pending moves.
    #[must_use]
    pub fn for_turn(truth: TurnTruth) -> Self {
        Self {
            truth: Some(truth),
            committed: false,
        }
    }

    /// Context with no pending moves (read-only dispatch).
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn truth(&self) -> Option<TurnTruth> {
        self.truth
    }

    /// Whether this turn has already committed its round.
    #[must_use]
    pub fn committed(&self) -> bool {
        self.committed
    }
}

/// Translates action requests into referee operations.
#[derive(Clone, Copy, Debug, Default)]
pub struct Adapter;

impl Adapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Dispatch one request.
    ///
    /// Never panics and never silently ignores a request: every outcome,
    /// including refusals, comes back as an `ActionResponse`.
    pub fn dispatch(&self, referee: &mut Referee, request: &ActionRequest, ctx: &mut TurnContext) -> ActionResponse {
        debug!(action = %request.name, "dispatching action");

        let result = match request.kind() {
            Some(ActionKind::CommitRound) => self.commit(referee, request, ctx),
            Some(ActionKind::ReadState) => Ok(ActionResponse::State(referee.snapshot())),
            None => Err(ActionError::UnknownAction(request.name.clone())),
        };

        result.unwrap_or_else(|err| {
            warn!(action = %request.name, %err, "action refused");
            err.into()
        })
    }

    fn commit(&self, referee: &mut Referee, request: &ActionRequest, ctx: &mut TurnContext) -> Result<ActionResponse, ActionError> {
        let truth = ctx.truth.ok_or(ActionError::NoPendingMove)?;
        if ctx.committed {
            return Err(ActionError::AlreadyCommitted);
        }

        warn_on_mismatch(request, "user_move", truth.user_move);
        warn_on_mismatch(request, "bot_move", truth.bot_move);

        let outcome = referee.commit_round(truth.user_move, truth.bot_move)?;
        ctx.committed = true;
        Ok(ActionResponse::Round(outcome))
    }
}

fn warn_on_mismatch(request: &ActionRequest, key: &str, actual: Move) {
    match request.arg_str(key) {
        Some(proposed) if proposed.trim().eq_ignore_ascii_case(actual.as_str()) => {}
        proposed => warn!(arg = key, ?proposed, %actual, "controller argument overridden"),
    }
}
