//! One game driven by a controller.

use im::Vector;
use tracing::{debug, info, warn};

use crate::controller::{
    referee_instructions, Controller, ControllerReply, ControllerRequest, Message, Part, Role, MOVE_PREFIX, OPENING_PROMPT,
};
use crate::core::config::GameConfig;
use crate::core::error::ArbiterError;
use crate::core::moves::{Move, Side};
use crate::core::rng::RandomSource;
use crate::core::state::{RoundRecord, StateView};
use crate::protocol::{ActionResponse, ActionSpec, Adapter, TurnContext, TurnTruth};
use crate::referee::{Referee, RoundOutcome};
use crate::rules::{choose_bot_move, validate_move, GameResult};

/// What a completed turn produced.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    /// Narration to show the player.
    pub narration: String,
    /// Ground truth the turn was played with.
    pub truth: TurnTruth,
    /// Whether the raw input passed validation.
    pub valid_input: bool,
    /// Responses to each action the controller requested, in order.
    pub responses: Vec<ActionResponse>,
    /// The round committed this turn, if the controller asked for one.
    pub outcome: Option<RoundOutcome>,
}

/// A single game: referee, controller, bot RNG and transcript.
///
/// Turns are strictly sequential. Each turn works on a staged copy of the
/// referee and transcript; the copy replaces the live one only after every
/// controller call in the turn has succeeded.
pub struct Session<C, R> {
    referee: Referee,
    controller: C,
    rng: R,
    adapter: Adapter,
    instructions: String,
    vocabulary: Vec<ActionSpec>,
    transcript: Vec<Message>,
}

impl<C: Controller, R: RandomSource> Session<C, R> {
    /// Start a new game.
    pub fn new(config: GameConfig, controller: C, rng: R) -> Self {
        Self {
            instructions: referee_instructions(config.max_rounds),
            referee: Referee::new(config),
            controller,
            rng,
            adapter: Adapter::new(),
            vocabulary: ActionSpec::vocabulary(),
            transcript: Vec::new(),
        }
    }

    /// Ask the controller for the opening greeting.
    ///
    /// No moves are pending, so any commit it requests is refused.
    pub fn greet(&mut self) -> Result<String, ArbiterError> {
        let mut transcript = self.transcript.clone();
        transcript.push(Message::user_text(OPENING_PROMPT));

        let reply = self.call(&transcript, None)?;
        let mut referee = self.referee.clone();
        let mut ctx = TurnContext::idle();
        let narration = self.settle(&mut referee, &mut transcript, reply, &mut ctx, None)?.0;

        self.transcript = transcript;
        self.referee = referee;
        Ok(narration)
    }

    /// Play one turn from the player's raw input.
    ///
    /// Blank input counts as `invalid`. A controller failure aborts the turn
    /// with nothing committed; the same turn can then be retried.
    pub fn play_turn(&mut self, raw_input: &str) -> Result<TurnReport, ArbiterError> {
        if self.referee.is_game_over() {
            return Err(ArbiterError::GameOver {
                rounds: self.referee.snapshot().round,
            });
        }

        let input = match raw_input.trim() {
            "" => Move::Invalid.as_str(),
            trimmed => trimmed,
        };

        let view = self.referee.snapshot();
        let (valid_input, user_move) = validate_move(input, view.bomb_used(Side::User));
        let bot_move = choose_bot_move(&view, self.referee.config(), &mut self.rng);
        let truth = TurnTruth { user_move, bot_move };
        debug!(round = view.round + 1, %user_move, %bot_move, valid_input, "turn ground truth");

        let mut transcript = self.transcript.clone();
        transcript.push(Message::user_text(format!("{MOVE_PREFIX}{input}")));

        let reply = self.call(&transcript, Some(truth))?;
        let mut referee = self.referee.clone();
        let mut ctx = TurnContext::for_turn(truth);
        let (narration, responses) = self.settle(&mut referee, &mut transcript, reply, &mut ctx, Some(truth))?;

        if !ctx.committed() {
            warn!(round = view.round + 1, "controller did not commit the round");
        }

        self.transcript = transcript;
        self.referee = referee;

        let outcome = responses.iter().find_map(ActionResponse::round).copied();
        if let Some(outcome) = &outcome {
            info!(round = outcome.round_number, game_over = outcome.game_over, "turn complete");
        }

        Ok(TurnReport {
            narration,
            truth,
            valid_input,
            responses,
            outcome,
        })
    }

    /// Dispatch the reply's actions against the staged referee and, if any
    /// were requested, ask the controller to narrate the results.
    fn settle(
        &mut self,
        referee: &mut Referee,
        transcript: &mut Vec<Message>,
        reply: ControllerReply,
        ctx: &mut TurnContext,
        truth: Option<TurnTruth>,
    ) -> Result<(String, Vec<ActionResponse>), ArbiterError> {
        if reply.actions.is_empty() {
            transcript.push(Message::model_text(reply.text.clone()));
            return Ok((reply.text, Vec::new()));
        }

        let mut call_parts = Vec::with_capacity(reply.actions.len() + 1);
        if !reply.text.is_empty() {
            call_parts.push(Part::Text { text: reply.text });
        }

        let mut result_parts = Vec::with_capacity(reply.actions.len());
        let mut responses = Vec::with_capacity(reply.actions.len());
        for request in reply.actions {
            let response = self.adapter.dispatch(referee, &request, ctx);
            result_parts.push(Part::ActionResult {
                name: request.name.clone(),
                response: response.clone(),
            });
            call_parts.push(Part::ActionCall { request });
            responses.push(response);
        }

        transcript.push(Message {
            role: Role::Model,
            parts: call_parts,
        });
        transcript.push(Message {
            role: Role::User,
            parts: result_parts,
        });

        let follow_up = self.call(transcript, truth)?;
        if !follow_up.actions.is_empty() {
            warn!(count = follow_up.actions.len(), "ignoring actions requested while narrating results");
        }
        transcript.push(Message::model_text(follow_up.text.clone()));

        Ok((follow_up.text, responses))
    }

    fn call(&mut self, transcript: &[Message], truth: Option<TurnTruth>) -> Result<ControllerReply, ArbiterError> {
        let request = ControllerRequest {
            transcript,
            instructions: &self.instructions,
            vocabulary: &self.vocabulary,
            max_rounds: self.referee.config().max_rounds,
            ground_truth: truth,
        };

        self.controller.respond(&request).map_err(|err| {
            warn!(%err, "controller call failed; turn aborted");
            ArbiterError::from(err)
        })
    }

    // === Reads ===

    #[must_use]
    pub fn snapshot(&self) -> StateView {
        self.referee.snapshot()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        self.referee.history()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.referee.is_game_over()
    }

    /// Overall result once the game is over.
    #[must_use]
    pub fn final_result(&self) -> Option<GameResult> {
        self.referee.final_result()
    }

    #[must_use]
    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    /// Consume the session, returning its controller.
    pub fn into_controller(self) -> C {
        self.controller
    }
}
