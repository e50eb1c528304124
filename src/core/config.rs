//! Game configuration.
//!
//! Defaults describe the classic best-of-three game. The bot heuristics are
//! keyed on 0-based round indices (the number of rounds already played when
//! the bot picks its move).

use serde::{Deserialize, Serialize};
use std::env;

/// Rounds in a standard game.
pub const DEFAULT_MAX_ROUNDS: u32 = 3;

/// Game configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of rounds before the game ends.
    pub max_rounds: u32,

    /// Round index on which the bot may throw an early bomb.
    pub pressure_round: u32,

    /// Probability of the early bomb on `pressure_round`.
    pub pressure_bomb_chance: f64,

    /// Round index on which a trailing bot throws its bomb unconditionally.
    pub catch_up_round: u32,

    /// Seed for the bot's RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rounds: DEFAULT_MAX_ROUNDS,
            pressure_round: 1,
            pressure_bomb_chance: 0.2,
            catch_up_round: 2,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RPS_MAX_ROUNDS` - Rounds per game (default: 3, minimum 1)
    /// - `RPS_SEED` - Bot RNG seed (default: random)
    /// - `RPS_BOMB_CHANCE` - Early bomb probability (default: 0.2)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(rounds) = read_env::<u32>("RPS_MAX_ROUNDS") {
            config = config.with_max_rounds(rounds);
        }
        if let Some(seed) = read_env::<u64>("RPS_SEED") {
            config = config.with_seed(seed);
        }
        if let Some(chance) = read_env::<f64>("RPS_BOMB_CHANCE") {
            config = config.with_bomb_chance(chance);
        }

        config
    }

    /// Set the number of rounds (at least 1).
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds.max(1);
        self
    }

    /// Set the bot RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the early bomb probability (clamped to `[0, 1]`).
    pub fn with_bomb_chance(mut self, chance: f64) -> Self {
        self.pressure_bomb_chance = if chance.is_nan() { 0.0 } else { chance.clamp(0.0, 1.0) };
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
