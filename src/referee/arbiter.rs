//! The referee: sole writer of `GameState`.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::config::GameConfig;
use crate::core::error::ArbiterError;
use crate::core::moves::{Move, Side, Winner};
use crate::core::state::{GameState, RoundRecord, StateView};
use crate::rules::{resolve_round, GameResult};

/// Confirmation of a committed round.
///
/// Field names are the wire names the controller sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub success: bool,
    pub round_number: u32,
    pub user_move: Move,
    pub bot_move: Move,
    pub round_winner: Winner,
    pub user_score: u32,
    pub bot_score: u32,
    pub game_over: bool,
}

/// Owns the authoritative game state and commits rounds to it.
///
/// Cloning is cheap (history is persistent), which lets a turn stage its
/// changes on a copy and swap them in only once the turn succeeds.
#[derive(Clone, Debug)]
pub struct Referee {
    config: GameConfig,
    state: GameState,
}

impl Referee {
    /// Start a new game.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let state = GameState::new(config.max_rounds);
        Self { config, state }
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Commit one round.
    ///
    /// The only refusal is a commit after the game is over, in which case
    /// nothing changes. Moves are trusted as given: bomb eligibility is
    /// enforced upstream by validation and the bot policy, and marking an
    /// already spent bomb again is a no-op.
    pub fn commit_round(&mut self, user_move: Move, bot_move: Move) -> Result<RoundOutcome, ArbiterError> {
        if self.state.is_game_over() {
            return Err(ArbiterError::GameOver {
                rounds: self.state.round(),
            });
        }

        let round = self.state.advance_round();
        if user_move.is_bomb() {
            self.state.spend_bomb(Side::User);
        }
        if bot_move.is_bomb() {
            self.state.spend_bomb(Side::Bot);
        }

        let winner = resolve_round(user_move, bot_move);
        self.state.award(winner);

        let score = self.state.score();
        self.state.record(RoundRecord {
            round,
            user_move,
            bot_move,
            winner,
            score_after: score,
        });

        info!(round, %user_move, %bot_move, %winner, %score, "round committed");

        Ok(RoundOutcome {
            success: true,
            round_number: round,
            user_move,
            bot_move,
            round_winner: winner,
            user_score: score.user,
            bot_score: score.bot,
            game_over: self.state.is_game_over(),
        })
    }

    /// Read-only snapshot for controllers.
    #[must_use]
    pub fn snapshot(&self) -> StateView {
        self.state.view()
    }

    /// Committed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        self.state.history()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Overall result, once the game is over.
    #[must_use]
    pub fn final_result(&self) -> Option<GameResult> {
        self.state
            .is_game_over()
            .then(|| GameResult::from_score(self.state.score()))
    }
}

impl Default for Referee {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_updates_everything() {
        let mut referee = Referee::default();
        let outcome = referee.commit_round(Move::Rock, Move::Scissors).unwrap();

        assert!(outcome.success);
        assert_eq!(outcome.round_number, 1);
        assert_eq!(outcome.round_winner, Winner::User);
        assert_eq!((outcome.user_score, outcome.bot_score), (1, 0));
        assert!(!outcome.game_over);

        let view = referee.snapshot();
        assert_eq!(view.round, 1);
        assert_eq!(referee.history().len(), 1);
        assert_eq!(referee.history()[0].score_after.to_string(), "1-0");
    }

    #[test]
    fn test_bomb_flags() {
        let mut referee = Referee::default();
        referee.commit_round(Move::Bomb, Move::Paper).unwrap();

        let view = referee.snapshot();
        assert!(view.user_bomb_used);
        assert!(!view.bot_bomb_used);
    }

    #[test]
    fn test_repeat_bomb_commits_and_flag_stays_set() {
        let mut referee = Referee::default();
        referee.commit_round(Move::Bomb, Move::Rock).unwrap();

        let outcome = referee.commit_round(Move::Bomb, Move::Rock).unwrap();
        assert_eq!(outcome.round_number, 2);
        assert_eq!(outcome.round_winner, Winner::User);
        assert_eq!((outcome.user_score, outcome.bot_score), (2, 0));

        let view = referee.snapshot();
        assert!(view.user_bomb_used);
        assert!(!view.bot_bomb_used);
        assert_eq!(referee.history().len(), 2);
    }

    #[test]
    fn test_invalid_bot_move_is_committed() {
        let mut referee = Referee::default();
        let outcome = referee.commit_round(Move::Rock, Move::Invalid).unwrap();

        assert_eq!(outcome.round_winner, Winner::Bot);
        assert_eq!(referee.snapshot().round, 1);
        assert_eq!(referee.history()[0].bot_move, Move::Invalid);
    }

    #[test]
    fn test_commit_after_game_over_rejected() {
        let mut referee = Referee::default();
        for _ in 0..3 {
            referee.commit_round(Move::Rock, Move::Rock).unwrap();
        }
        assert!(referee.is_game_over());

        let err = referee.commit_round(Move::Paper, Move::Rock).unwrap_err();
        assert_eq!(err, ArbiterError::GameOver { rounds: 3 });
        assert_eq!(referee.snapshot().round, 3);
        assert_eq!(referee.history().len(), 3);
    }

    #[test]
    fn test_final_result_only_when_over() {
        let mut referee = Referee::default();
        referee.commit_round(Move::Paper, Move::Rock).unwrap();
        assert_eq!(referee.final_result(), None);

        referee.commit_round(Move::Rock, Move::Rock).unwrap();
        referee.commit_round(Move::Rock, Move::Rock).unwrap();
        assert_eq!(referee.final_result(), Some(GameResult::Winner(Side::User)));
    }

    #[test]
    fn test_staged_clone_is_independent() {
        let referee = Referee::default();
        let mut staged = referee.clone();
        staged.commit_round(Move::Rock, Move::Paper).unwrap();

        assert_eq!(referee.snapshot().round, 0);
        assert_eq!(staged.snapshot().round, 1);
    }

    #[test]
    fn test_outcome_wire_names() {
        let mut referee = Referee::default();
        let outcome = referee.commit_round(Move::Invalid, Move::Rock).unwrap();
        let json = serde_json::to_value(outcome).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["round_number"], 1);
        assert_eq!(json["user_move"], "invalid");
        assert_eq!(json["bot_move"], "rock");
        assert_eq!(json["round_winner"], "bot");
        assert_eq!(json["bot_score"], 1);
        assert_eq!(json["game_over"], false);
    }
}
