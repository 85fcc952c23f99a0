//! Liquids (Water, Lava): fall, slide down diagonals, then spread laterally.

use crate::api::TickApi;
use crate::direction::{self, Direction};

pub(crate) fn update(api: &mut TickApi) -> bool {
    if api.at_bottom() {
        return api.hold_or_displace();
    }
    if api.try_move(Direction::Down) {
        return true;
    }
    let pair = direction::random_down_diagonal(api.rng());
    if api.try_pair(pair) {
        return true;
    }
    let pair = direction::random_lateral(api.rng());
    if api.try_pair(pair) {
        return true;
    }
    api.hold_or_displace()
}
