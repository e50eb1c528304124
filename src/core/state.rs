//! Game state: the authoritative scoreboard and its read-only projections.
//!
//! ## GameState
//!
//! Round counter, scores, bomb flags, termination flag and round history.
//! Every mutator is crate-private; outside the crate the only way to change
//! a `GameState` is through [`Referee`](crate::referee::Referee).
//!
//! ## StateView
//!
//! Flat, serializable snapshot of everything except the history. This is
//! what a controller may read.
//!
//! ## RoundRecord
//!
//! Immutable entry appended once per committed round.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::moves::{Move, Side, Winner};

/// Score pair, displayed and serialized as `"user-bot"` (e.g. `"2-1"`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Score {
    pub user: u32,
    pub bot: u32,
}

impl Score {
    #[must_use]
    pub const fn new(user: u32, bot: u32) -> Self {
        Self { user, bot }
    }

    /// Score of one side.
    #[must_use]
    pub const fn of(&self, side: Side) -> u32 {
        match side {
            Side::User => self.user,
            Side::Bot => self.bot,
        }
    }

    /// Total decided rounds.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.user + self.bot
    }

    /// Side currently ahead, if any.
    #[must_use]
    pub fn leader(&self) -> Option<Side> {
        match self.user.cmp(&self.bot) {
            std::cmp::Ordering::Greater => Some(Side::User),
            std::cmp::Ordering::Less => Some(Side::Bot),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.user, self.bot)
    }
}

/// Error parsing a `"user-bot"` score string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a score of the form user-bot")]
pub struct ParseScoreError(pub String);

impl FromStr for Score {
    type Err = ParseScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseScoreError(s.to_string());
        let (user, bot) = s.split_once('-').ok_or_else(err)?;
        Ok(Score::new(user.parse().map_err(|_| err())?, bot.parse().map_err(|_| err())?))
    }
}

impl From<Score> for String {
    fn from(score: Score) -> Self {
        score.to_string()
    }
}

impl TryFrom<String> for Score {
    type Error = ParseScoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A committed round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number.
    pub round: u32,
    pub user_move: Move,
    pub bot_move: Move,
    pub winner: Winner,
    /// Score immediately after this round.
    pub score_after: Score,
}

/// Read-only snapshot of the scoreboard (no history).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateView {
    /// Rounds completed so far.
    pub round: u32,
    pub max_rounds: u32,
    pub user_score: u32,
    pub bot_score: u32,
    pub user_bomb_used: bool,
    pub bot_bomb_used: bool,
    pub game_over: bool,
}

impl StateView {
    /// Scores as a pair.
    #[must_use]
    pub const fn score(&self) -> Score {
        Score::new(self.user_score, self.bot_score)
    }

    /// Whether a side has already spent its bomb.
    #[must_use]
    pub const fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Bot => self.bot_bomb_used,
        }
    }

    #[must_use]
    pub const fn rounds_remaining(&self) -> u32 {
        self.max_rounds.saturating_sub(self.round)
    }
}

/// Authoritative game state.
///
/// Uses an `im` vector for history so that cloning (staging a turn) is O(1).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    round: u32,
    max_rounds: u32,
    score: Score,
    user_bomb_used: bool,
    bot_bomb_used: bool,
    game_over: bool,
    history: Vector<RoundRecord>,
}

impl GameState {
    /// Create a fresh game of `max_rounds` rounds.
    #[must_use]
    pub fn new(max_rounds: u32) -> Self {
        Self {
            round: 0,
            max_rounds,
            score: Score::default(),
            user_bomb_used: false,
            bot_bomb_used: false,
            game_over: false,
            history: Vector::new(),
        }
    }

    // === Reads ===

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn max_rounds(&self) -> u32 {
        self.max_rounds
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Bot => self.bot_bomb_used,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Committed rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Project the scoreboard without history.
    #[must_use]
    pub fn view(&self) -> StateView {
        StateView {
            round: self.round,
            max_rounds: self.max_rounds,
            user_score: self.score.user,
            bot_score: self.score.bot,
            user_bomb_used: self.user_bomb_used,
            bot_bomb_used: self.bot_bomb_used,
            game_over: self.game_over,
        }
    }

    // === Mutation (referee only) ===

    /// Advance the round counter and recompute termination.
    ///
    /// `game_over` only ever moves from false to true.
    pub(crate) fn advance_round(&mut self) -> u32 {
        self.round += 1;
        self.game_over = self.game_over || self.round >= self.max_rounds;
        self.round
    }

    /// Mark a side's bomb as spent. Idempotent.
    pub(crate) fn spend_bomb(&mut self, side: Side) {
        match side {
            Side::User => self.user_bomb_used = true,
            Side::Bot => self.bot_bomb_used = true,
        }
    }

    /// Credit a round to the winner. Draws score nothing.
    pub(crate) fn award(&mut self, winner: Winner) {
        match winner {
            Winner::User => self.score.user += 1,
            Winner::Bot => self.score.bot += 1,
            Winner::Draw => {}
        }
    }

    pub(crate) fn record(&mut self, record: RoundRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(3);

        assert_eq!(state.round(), 0);
        assert_eq!(state.max_rounds(), 3);
        assert_eq!(state.score(), Score::new(0, 0));
        assert!(!state.bomb_used(Side::User));
        assert!(!state.bomb_used(Side::Bot));
        assert!(!state.is_game_over());
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_advance_sets_game_over_at_limit() {
        let mut state = GameState::new(2);

        assert_eq!(state.advance_round(), 1);
        assert!(!state.is_game_over());
        assert_eq!(state.advance_round(), 2);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_spend_bomb_is_idempotent() {
        let mut state = GameState::new(3);
        state.spend_bomb(Side::Bot);
        state.spend_bomb(Side::Bot);

        assert!(state.bomb_used(Side::Bot));
        assert!(!state.bomb_used(Side::User));
    }

    #[test]
    fn test_award() {
        let mut state = GameState::new(3);
        state.award(Winner::User);
        state.award(Winner::Draw);
        state.award(Winner::Bot);
        state.award(Winner::User);

        assert_eq!(state.score(), Score::new(2, 1));
        assert_eq!(state.score().leader(), Some(Side::User));
    }

    #[test]
    fn test_view_matches_state() {
        let mut state = GameState::new(3);
        state.advance_round();
        state.spend_bomb(Side::User);
        state.award(Winner::User);

        let view = state.view();
        assert_eq!(view.round, 1);
        assert_eq!(view.score(), Score::new(1, 0));
        assert!(view.bomb_used(Side::User));
        assert!(!view.bomb_used(Side::Bot));
        assert_eq!(view.rounds_remaining(), 2);
    }

    #[test]
    fn test_clone_shares_history_but_diverges() {
        let mut state = GameState::new(3);
        state.record(RoundRecord {
            round: 1,
            user_move: Move::Rock,
            bot_move: Move::Paper,
            winner: Winner::Bot,
            score_after: Score::new(0, 1),
        });

        let mut staged = state.clone();
        staged.record(RoundRecord {
            round: 2,
            user_move: Move::Rock,
            bot_move: Move::Rock,
            winner: Winner::Draw,
            score_after: Score::new(0, 1),
        });

        assert_eq!(state.history().len(), 1);
        assert_eq!(staged.history().len(), 2);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::new(2, 1).to_string(), "2-1");
        assert_eq!(Score::new(0, 0).leader(), None);
    }

    #[test]
    fn test_record_serializes_score_as_string() {
        let record = RoundRecord {
            round: 3,
            user_move: Move::Paper,
            bot_move: Move::Bomb,
            winner: Winner::Bot,
            score_after: Score::new(2, 1),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["score_after"], "2-1");

        let parsed: RoundRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_score_parse_rejects_garbage() {
        assert_eq!("10-0".parse::<Score>(), Ok(Score::new(10, 0)));
        assert!("2:1".parse::<Score>().is_err());
        assert!("a-1".parse::<Score>().is_err());
        assert!("1-".parse::<Score>().is_err());
    }

    #[test]
    fn test_view_serializes_flat() {
        let view = GameState::new(3).view();
        let json = serde_json::to_value(view).unwrap();

        assert_eq!(json["round"], 0);
        assert_eq!(json["max_rounds"], 3);
        assert_eq!(json["game_over"], false);
        assert!(json.get("history").is_none());
    }
}
