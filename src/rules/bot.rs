//! Bot move selection.
//!
//! The policy reads a `StateView` and draws from an injected
//! `RandomSource`; it never mutates game state.
//!
//! 1. **Catch-up**: on `catch_up_round`, a trailing bot with its bomb
//!    still available throws it
//! 2. **Pressure**: on `pressure_round`, with the bomb available, a
//!    `pressure_bomb_chance` draw decides whether to throw it
//! 3. Otherwise rock, paper or scissors uniformly

use tracing::debug;

use crate::core::config::GameConfig;
use crate::core::moves::{Move, Side};
use crate::core::rng::RandomSource;
use crate::core::state::StateView;

/// Choose the bot's move for the upcoming round.
///
/// `view.round` is the 0-based index of the round about to be played.
pub fn choose_bot_move<R: RandomSource>(view: &StateView, config: &GameConfig, rng: &mut R) -> Move {
    let can_bomb = !view.bomb_used(Side::Bot);

    if can_bomb && view.round == config.catch_up_round && view.bot_score < view.user_score {
        debug!(round = view.round, "bot throws catch-up bomb");
        return Move::Bomb;
    }

    if can_bomb && view.round == config.pressure_round && rng.chance(config.pressure_bomb_chance) {
        debug!(round = view.round, "bot throws pressure bomb");
        return Move::Bomb;
    }

    let mv = Move::BASIC[rng.pick(Move::BASIC.len())];
    debug!(round = view.round, %mv, "bot chose");
    mv
}
