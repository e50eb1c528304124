//! Turn orchestration.
//!
//! Per turn:
//! 1. Validate the player's raw input against the current bomb fact
//! 2. Pick the bot's move
//! 3. Hand both to the controller as ground truth
//! 4. Dispatch whatever it requests through the adapter
//! 5. Ask it to narrate the results
//!
//! The loop ends when the referee reports `game_over`.
//!
//! ```
//! use rps_arbiter::controller::ScriptedController;
//! use rps_arbiter::core::{GameConfig, GameRng};
//! use rps_arbiter::session::Session;
//!
//! let mut session = Session::new(GameConfig::default(), ScriptedController::new(), GameRng::new(7));
//! session.greet().unwrap();
//! while !session.is_game_over() {
//!     session.play_turn("rock").unwrap();
//! }
//! assert_eq!(session.history().len(), 3);
//! ```

mod turn;

pub use turn::{Session, TurnReport};
