//! Per-cell state: [`CellFlags`].

use std::ops::{BitAnd, BitOr};

/// Bitmask of per-cell maze state.
///
/// The low nibble holds the four passage flags and doubles as the glyph
/// index consumed by rendering. The remaining bits are bookkeeping
/// overlays: [`VISITED`](Self::VISITED) during carving,
/// [`EXPLORED`](Self::EXPLORED) and [`ON_PATH`](Self::ON_PATH) during
/// solving. Overlay bits never influence passage topology.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellFlags(pub u8);

impl CellFlags {
    pub const NONE: Self = Self(0);
    /// Open passage toward the left neighbour.
    pub const LEFT: Self = Self(1);
    /// Open passage toward the right neighbour.
    pub const RIGHT: Self = Self(1 << 1);
    /// Open passage toward the neighbour above.
    pub const UP: Self = Self(1 << 2);
    /// Open passage toward the neighbour below.
    pub const DOWN: Self = Self(1 << 3);
    /// Incorporated into the spanning structure (carving bookkeeping).
    pub const VISITED: Self = Self(1 << 4);
    /// On the reconstructed shortest path.
    pub const ON_PATH: Self = Self(1 << 5);
    /// Finalized by the solver.
    pub const EXPLORED: Self = Self(1 << 6);

    /// Mask selecting the four passage bits.
    pub const PASSAGES: Self = Self(0b1111);

    /// Whether this set contains all the bits of `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether no flag is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The passage nibble, which is also the box-drawing glyph index
    /// (0 = walled in, 15 = four-way junction).
    #[inline]
    pub const fn passages(self) -> u8 {
        self.0 & Self::PASSAGES.0
    }
}

impl BitOr for CellFlags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for CellFlags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
