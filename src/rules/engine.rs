//! Pure rule functions: move validation and round resolution.
//!
//! Nothing here touches shared state. Callers pass in whatever facts the
//! rule needs (e.g. whether the side has already spent its bomb).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::moves::{Move, Side, Winner};
use crate::core::state::Score;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "result", content = "side")]
pub enum GameResult {
    /// One side won more rounds.
    Winner(Side),
    /// Equal scores.
    Draw,
}

impl GameResult {
    /// Decide the match from the final score.
    #[must_use]
    pub fn from_score(score: Score) -> Self {
        score.leader().map_or(GameResult::Draw, GameResult::Winner)
    }

    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        matches!(self, GameResult::Winner(s) if *s == side)
    }
}

/// Validate raw player input.
///
/// Lower-cases and trims the input. Unknown tokens, and `bomb` when
/// `bomb_already_used` is set, come back as `(false, Move::Invalid)`.
///
/// ```
/// use rps_arbiter::core::Move;
/// use rps_arbiter::rules::validate_move;
///
/// assert_eq!(validate_move(" PAPER ", false), (true, Move::Paper));
/// assert_eq!(validate_move("bomb", true), (false, Move::Invalid));
/// ```
#[must_use]
pub fn validate_move(raw_input: &str, bomb_already_used: bool) -> (bool, Move) {
    let mv = match raw_input.parse::<Move>() {
        Ok(mv) => mv,
        Err(err) => {
            debug!(%err, "rejected move");
            return (false, Move::Invalid);
        }
    };

    if mv.is_bomb() && bomb_already_used {
        debug!("rejected second bomb");
        return (false, Move::Invalid);
    }

    debug!(%mv, "move is valid");
    (true, mv)
}

/// Decide a round.
///
/// Priority order:
/// 1. A user forfeit (`Invalid`) goes to the bot, whatever the bot threw
/// 2. Equal moves draw, including bomb against bomb
/// 3. A lone bomb wins
/// 4. Otherwise the user wins only if their move beats the bot's in the
///    rock/paper/scissors cycle, so a bot `Invalid` also goes to the bot
#[must_use]
pub fn resolve_round(user_move: Move, bot_move: Move) -> Winner {
    if user_move.is_invalid() {
        return Winner::Bot;
    }
    if user_move == bot_move {
        return Winner::Draw;
    }
    if user_move.is_bomb() {
        return Winner::User;
    }
    if bot_move.is_bomb() {
        return Winner::Bot;
    }
    if user_move.beats() == Some(bot_move) {
        Winner::User
    } else {
        Winner::Bot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_playable_tokens() {
        assert_eq!(validate_move("rock", false), (true, Move::Rock));
        assert_eq!(validate_move("Scissors", false), (true, Move::Scissors));
        assert_eq!(validate_move("bomb", false), (true, Move::Bomb));
    }

    #[test]
    fn test_validate_rejects() {
        assert_eq!(validate_move("", false), (false, Move::Invalid));
        assert_eq!(validate_move("invalid", false), (false, Move::Invalid));
        assert_eq!(validate_move("spock", false), (false, Move::Invalid));
        assert_eq!(validate_move("BOMB", true), (false, Move::Invalid));
    }

    #[test]
    fn test_bomb_flag_only_affects_bomb() {
        assert_eq!(validate_move("rock", true), (true, Move::Rock));
    }

    #[test]
    fn test_resolve_basic_cycle() {
        assert_eq!(resolve_round(Move::Rock, Move::Scissors), Winner::User);
        assert_eq!(resolve_round(Move::Scissors, Move::Paper), Winner::User);
        assert_eq!(resolve_round(Move::Paper, Move::Rock), Winner::User);
        assert_eq!(resolve_round(Move::Scissors, Move::Rock), Winner::Bot);
        assert_eq!(resolve_round(Move::Rock, Move::Rock), Winner::Draw);
    }

    #[test]
    fn test_resolve_bomb() {
        assert_eq!(resolve_round(Move::Bomb, Move::Bomb), Winner::Draw);
        assert_eq!(resolve_round(Move::Bomb, Move::Paper), Winner::User);
        assert_eq!(resolve_round(Move::Rock, Move::Bomb), Winner::Bot);
    }

    #[test]
    fn test_resolve_forfeit_always_loses() {
        for bot in [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb, Move::Invalid] {
            assert_eq!(resolve_round(Move::Invalid, bot), Winner::Bot);
        }
    }

    #[test]
    fn test_resolve_bot_forfeit_still_goes_to_bot() {
        for user in Move::BASIC {
            assert_eq!(resolve_round(user, Move::Invalid), Winner::Bot);
        }
        assert_eq!(resolve_round(Move::Bomb, Move::Invalid), Winner::User);
    }

    #[test]
    fn test_game_result() {
        let result = GameResult::from_score(Score::new(2, 1));
        assert_eq!(result, GameResult::Winner(Side::User));
        assert!(result.is_winner(Side::User));
        assert!(!result.is_winner(Side::Bot));

        let draw = GameResult::from_score(Score::new(1, 1));
        assert_eq!(draw, GameResult::Draw);
        assert!(!draw.is_winner(Side::User));
    }
}
