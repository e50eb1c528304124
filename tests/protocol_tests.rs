//! Mediation protocol tests.
//!
//! The controller's arguments must never reach the referee, and every
//! request must produce a structured response.

use serde_json::{json, Value};

use rps_arbiter::core::{Move, Winner};
use rps_arbiter::protocol::{ActionRequest, ActionResponse, ActionSpec, Adapter, TurnContext, TurnTruth};
use rps_arbiter::referee::Referee;

fn ctx(user_move: Move, bot_move: Move) -> TurnContext {
    TurnContext::for_turn(TurnTruth { user_move, bot_move })
}

fn assert_flat_primitives(value: &Value) {
    let object = value.as_object().expect("response must be an object");
    for (key, field) in object {
        assert!(
            field.is_string() || field.is_number() || field.is_boolean(),
            "field {key} is not a primitive: {field}"
        );
    }
}

// =============================================================================
// Trust Boundary
// =============================================================================

#[test]
fn test_hallucinated_bot_move_overridden() {
    let mut referee = Referee::default();
    let adapter = Adapter::new();

    // Controller claims it threw scissors against the user's rock; truth says paper.
    let response = adapter.dispatch(
        &mut referee,
        &ActionRequest::commit("rock", "scissors"),
        &mut ctx(Move::Rock, Move::Paper),
    );

    let outcome = response.round().unwrap();
    assert_eq!(outcome.bot_move, Move::Paper);
    assert_eq!(outcome.round_winner, Winner::Bot);
    assert_eq!(referee.history()[0].bot_move, Move::Paper);
}

#[test]
fn test_controller_cannot_launder_invalid_move() {
    let mut referee = Referee::default();

    // User typed nonsense; controller reports a bomb anyway.
    let response = Adapter::new().dispatch(
        &mut referee,
        &ActionRequest::commit("bomb", "rock"),
        &mut ctx(Move::Invalid, Move::Rock),
    );

    assert_eq!(response.round().unwrap().round_winner, Winner::Bot);
    assert!(!referee.snapshot().user_bomb_used);
}

#[test]
fn test_garbage_args_ignored() {
    let mut referee = Referee::default();
    let request = ActionRequest::new("update_game_state")
        .with_arg("user_move", json!({"nested": true}))
        .with_arg("bot_move", 42)
        .with_arg("winner", "user");

    let response = Adapter::new().dispatch(&mut referee, &request, &mut ctx(Move::Scissors, Move::Rock));
    assert_eq!(response.round().unwrap().round_winner, Winner::Bot);
}

// =============================================================================
// Structured Responses
// =============================================================================

#[test]
fn test_unknown_action_is_structured_error() {
    let mut referee = Referee::default();
    let response = Adapter::new().dispatch(
        &mut referee,
        &ActionRequest::new("set_score"),
        &mut ctx(Move::Rock, Move::Rock),
    );

    assert_eq!(response.to_json(), json!({"error": "unknown action: set_score"}));
    assert_eq!(referee.snapshot().round, 0);
}

#[test]
fn test_post_termination_commit_is_structured_error() {
    let mut referee = Referee::default();
    let adapter = Adapter::new();
    for _ in 0..3 {
        adapter.dispatch(&mut referee, &ActionRequest::commit("rock", "rock"), &mut ctx(Move::Rock, Move::Rock));
    }

    let response = adapter.dispatch(&mut referee, &ActionRequest::commit("rock", "rock"), &mut ctx(Move::Rock, Move::Rock));
    assert!(response.is_error());
    assert!(response.to_json()["error"].as_str().unwrap().contains("game is over"));
    assert_eq!(referee.history().len(), 3);
}

#[test]
fn test_responses_are_flat_primitives() {
    let mut referee = Referee::default();
    let adapter = Adapter::new();
    let mut turn = ctx(Move::Bomb, Move::Rock);

    let responses = [
        adapter.dispatch(&mut referee, &ActionRequest::commit("bomb", "rock"), &mut turn),
        adapter.dispatch(&mut referee, &ActionRequest::read_state(), &mut turn),
        adapter.dispatch(&mut referee, &ActionRequest::new("nope"), &mut turn),
    ];

    for response in &responses {
        assert_flat_primitives(&response.to_json());
    }
}

#[test]
fn test_read_state_fields() {
    let mut referee = Referee::default();
    referee.commit_round(Move::Paper, Move::Bomb).unwrap();

    let response = Adapter::new().dispatch(&mut referee, &ActionRequest::read_state(), &mut TurnContext::idle());
    assert_eq!(
        response.to_json(),
        json!({
            "round": 1,
            "max_rounds": 3,
            "user_score": 0,
            "bot_score": 1,
            "user_bomb_used": false,
            "bot_bomb_used": true,
            "game_over": false
        })
    );
}

#[test]
fn test_response_round_trips_from_json() {
    let mut referee = Referee::default();
    let response = Adapter::new().dispatch(
        &mut referee,
        &ActionRequest::commit("paper", "rock"),
        &mut ctx(Move::Paper, Move::Rock),
    );

    let parsed: ActionResponse = serde_json::from_value(response.to_json()).unwrap();
    assert_eq!(parsed, response);
}

#[test]
fn test_vocabulary_declares_exactly_two_actions() {
    let vocabulary = ActionSpec::vocabulary();
    assert_eq!(vocabulary.len(), 2);

    let commit = &vocabulary[0];
    assert_eq!(commit.name, "update_game_state");
    assert_eq!(commit.parameters["required"], json!(["user_move", "bot_move"]));
    assert_eq!(vocabulary[1].name, "get_game_state");
}
