//! Per-position cell state.

use crate::material::MaterialKind;

/// A grid slot: the occupying material plus the per-tick settled flag.
///
/// `settled` means "already resolved into the next grid this tick". A settled
/// cell is never re-read as a movement source and never re-targeted by a
/// reaction within the same tick. Cells written into the next buffer always
/// start unsettled.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
    pub kind: MaterialKind,
    pub settled: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        kind: MaterialKind::Empty,
        settled: false,
    };

    #[must_use]
    pub fn new(kind: MaterialKind) -> Self {
        Self {
            kind,
            settled: false,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.kind == MaterialKind::Empty
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}
