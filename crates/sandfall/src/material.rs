//! Material identities and their immutable properties.
//!
//! Every kind has a fixed phase, density and display color, looked up in a
//! static table indexed by discriminant. Densities are a total order; only
//! the relative order means anything, never the numeric value.

use std::fmt;

/// Discriminant values are part of the wasm ABI — do not reorder.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MaterialKind {
    Empty = 0,
    Water = 1,
    Sand = 2,
    Rock = 3,
    Lava = 4,
    Steam = 5,
}

/// Coarse movement class.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Phase {
    Empty,
    Solid,
    Liquid,
    Gas,
}

/// Relative density. A material sinks past another only when its density is
/// strictly greater, so ties (Sand vs Rock) never displace each other.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum Density {
    Zero,
    LightGas,
    LightLiquid,
    HeavyLiquid,
    LightSolid,
}

/// Immutable per-kind properties, shared by reference.
#[derive(Debug)]
pub struct MaterialProps {
    pub phase: Phase,
    pub density: Density,
    pub color: [u8; 4],
}

/// Indexed by `MaterialKind` discriminant.
static PROPS: [MaterialProps; 6] = [
    // Empty
    MaterialProps {
        phase: Phase::Empty,
        density: Density::Zero,
        color: [0x00, 0x00, 0x00, 0xff],
    },
    // Water
    MaterialProps {
        phase: Phase::Liquid,
        density: Density::LightLiquid,
        color: [0x00, 0x00, 0xff, 0xff],
    },
    // Sand
    MaterialProps {
        phase: Phase::Solid,
        density: Density::LightSolid,
        color: [0xde, 0xbd, 0x1a, 0xff],
    },
    // Rock
    MaterialProps {
        phase: Phase::Solid,
        density: Density::LightSolid,
        color: [0x80, 0x85, 0x88, 0xff],
    },
    // Lava
    MaterialProps {
        phase: Phase::Liquid,
        density: Density::HeavyLiquid,
        color: [0xff, 0x68, 0x51, 0xff],
    },
    // Steam
    MaterialProps {
        phase: Phase::Gas,
        density: Density::LightGas,
        color: [0xad, 0xb7, 0xc7, 0xa8],
    },
];

impl MaterialKind {
    #[must_use]
    pub fn props(self) -> &'static MaterialProps {
        &PROPS[self as usize]
    }

    #[must_use]
    pub fn phase(self) -> Phase {
        self.props().phase
    }

    #[must_use]
    pub fn density(self) -> Density {
        self.props().density
    }

    #[must_use]
    pub fn color(self) -> [u8; 4] {
        self.props().color
    }

    /// Decode a raw discriminant from the wasm boundary.
    /// Unregistered values are treated as Empty.
    #[must_use]
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            1 => Self::Water,
            2 => Self::Sand,
            3 => Self::Rock,
            4 => Self::Lava,
            5 => Self::Steam,
            _ => Self::Empty,
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Water => write!(f, "Water"),
            Self::Sand => write!(f, "Sand"),
            Self::Rock => write!(f, "Rock"),
            Self::Lava => write!(f, "Lava"),
            Self::Steam => write!(f, "Steam"),
        }
    }
}

/// Pairwise transformation fired when `mover` attempts to move into a cell
/// occupied by `target`. The first result replaces the mover at its origin
/// slot, the second replaces the target at the destination slot.
///
/// Both orderings of each interaction are listed explicitly so the outcome
/// never depends on which participant happened to be scanned first.
#[must_use]
pub fn reaction_for(
    mover: MaterialKind,
    target: MaterialKind,
) -> Option<(MaterialKind, MaterialKind)> {
    use MaterialKind::{Lava, Rock, Steam, Water};
    match (mover, target) {
        (Lava, Water) => Some((Rock, Steam)),
        (Water, Lava) => Some((Steam, Rock)),
        (Steam, Steam) => Some((Water, Water)),
        _ => None,
    }
}
