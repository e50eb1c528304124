//! Move representation: the tokens players throw, who threw them, who won.
//!
//! ## Move
//!
//! Four playable tokens plus the `Invalid` sentinel. `Invalid` is never
//! chosen by a player; it is what a rejected input becomes, and it always
//! forfeits the round.
//!
//! ## Side / Winner
//!
//! The game has exactly two sides. `Winner` adds `Draw` for rounds that
//! nobody takes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A thrown move.
///
/// ```
/// use rps_arbiter::core::Move;
///
/// assert_eq!(" Rock ".parse::<Move>(), Ok(Move::Rock));
/// assert!("lizard".parse::<Move>().is_err());
/// assert!("invalid".parse::<Move>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
    /// Forfeit sentinel produced by failed validation.
    Invalid,
}

impl Move {
    /// The three moves that can be reused without limit.
    pub const BASIC: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Wire token for this move.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
            Move::Invalid => "invalid",
        }
    }

    /// The move this one beats under the basic cycle.
    ///
    /// Only defined for rock, paper and scissors.
    #[must_use]
    pub const fn beats(self) -> Option<Move> {
        match self {
            Move::Rock => Some(Move::Scissors),
            Move::Scissors => Some(Move::Paper),
            Move::Paper => Some(Move::Rock),
            Move::Bomb | Move::Invalid => None,
        }
    }

    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }

    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, Move::Invalid)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a token does not name a playable move.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a valid move")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses one of the four playable tokens, ignoring case and surrounding
    /// whitespace. `invalid` is not accepted: nobody plays a forfeit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            "bomb" => Ok(Move::Bomb),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    User,
    Bot,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::User => Side::Bot,
            Side::Bot => Side::User,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::User => f.write_str("user"),
            Side::Bot => f.write_str("bot"),
        }
    }
}

/// Outcome of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    User,
    Bot,
    Draw,
}

impl Winner {
    /// The winning side, or `None` for a draw.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Winner::User => Some(Side::User),
            Winner::Bot => Some(Side::Bot),
            Winner::Draw => None,
        }
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Self {
        match side {
            Side::User => Winner::User,
            Side::Bot => Winner::Bot,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::User => f.write_str("user"),
            Winner::Bot => f.write_str("bot"),
            Winner::Draw => f.write_str("draw"),
        }
    }
}
