//! Rigid solids (Rock): fall straight down or down a diagonal, never move
//! laterally on their own initiative. A rigid cell is still a displaceable
//! obstacle — the density check lets a strictly denser mover claim its slot,
//! though nothing in the current roster outweighs it.

use crate::api::TickApi;
use crate::direction::{self, Direction};

pub(crate) fn update(api: &mut TickApi) -> bool {
    if api.at_bottom() {
        return api.hold();
    }
    if api.try_move(Direction::Down) {
        return true;
    }
    let pair = direction::random_down_diagonal(api.rng());
    if api.try_pair(pair) {
        return true;
    }
    api.hold()
}
