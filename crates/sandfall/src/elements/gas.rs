//! Gas (Steam): rises, drifts up diagonals, spreads laterally, and jitters.
//!
//! Gas that reaches the unscanned top row vents out of the simulation, so
//! gas mass is deliberately not conserved.

use crate::api::TickApi;
use crate::direction::{self, Direction};

/// Chance, in percent, of drawing a random jitter direction when every
/// directed move has failed. Gives plumes a billowy look.
const JITTER_PERCENT: u8 = 25;

pub(crate) fn update(api: &mut TickApi) -> bool {
    if api.try_move(Direction::Up) {
        return true;
    }
    let pair = direction::random_up_diagonal(api.rng());
    if api.try_pair(pair) {
        return true;
    }
    let pair = direction::random_lateral(api.rng());
    if api.try_pair(pair) {
        return true;
    }
    if api.try_jitter(JITTER_PERCENT) {
        return true;
    }
    api.hold_or_displace()
}
