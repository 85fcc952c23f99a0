//! Family rule chains dispatched from the tick loop.
//!
//! Each registered material belongs to one family; a family's update runs an
//! ordered chain of rules and the first rule that resolves the cell wins.
//! Every chain ends in a default rule, so an update that resolves nothing is
//! a missing registration, not a runtime condition — the tick aborts.

mod gas;
mod granular;
mod liquid;
mod rigid;

#[cfg(test)]
mod displacement_test;

use crate::api::TickApi;
use crate::material::MaterialKind;

/// Dispatch to the material family's rule chain.
///
/// Empty is a no-op and is skipped before calling this.
pub(crate) fn update_cell(kind: MaterialKind, api: &mut TickApi) {
    let resolved = match kind {
        MaterialKind::Sand => granular::update(api),
        MaterialKind::Water | MaterialKind::Lava => liquid::update(api),
        MaterialKind::Steam => gas::update(api),
        MaterialKind::Rock => rigid::update(api),
        MaterialKind::Empty => true,
    };
    assert!(resolved, "rule chain for {kind} resolved nothing");
}
