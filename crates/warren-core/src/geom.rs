//! Geometry primitives: [`Pos`] and [`Dir`].

use std::fmt;

use crate::cell::CellFlags;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A grid position. `row` grows down, `col` grows right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// The fixed maze entry, top-left corner.
    pub const START: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step toward `dir`.
    ///
    /// The result may lie outside any particular grid; callers check it
    /// with [`Grid::contains`](crate::Grid::contains) before use.
    #[inline]
    pub const fn step(self, dir: Dir) -> Self {
        match dir {
            Dir::Left => Self::new(self.row, self.col - 1),
            Dir::Right => Self::new(self.row, self.col + 1),
            Dir::Up => Self::new(self.row - 1, self.col),
            Dir::Down => Self::new(self.row + 1, self.col),
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Dir
// ---------------------------------------------------------------------------

/// One of the four cardinal directions a passage can open toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Dir {
    Left,
    Right,
    Up,
    Down,
}

impl Dir {
    /// All four directions, in the fixed scan order used throughout the
    /// workspace (left, right, up, down).
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Right, Dir::Up, Dir::Down];

    /// The direction pointing back the way we came.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
        }
    }

    /// The passage flag for this direction.
    #[inline]
    pub const fn flag(self) -> CellFlags {
        match self {
            Dir::Left => CellFlags::LEFT,
            Dir::Right => CellFlags::RIGHT,
            Dir::Up => CellFlags::UP,
            Dir::Down => CellFlags::DOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_axis() {
        let p = Pos::new(3, 5);
        assert_eq!(p.step(Dir::Left), Pos::new(3, 4));
        assert_eq!(p.step(Dir::Right), Pos::new(3, 6));
        assert_eq!(p.step(Dir::Up), Pos::new(2, 5));
        assert_eq!(p.step(Dir::Down), Pos::new(4, 5));
    }

    #[test]
    fn opposite_is_involutive() {
        for dir in Dir::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn step_then_back_returns_home() {
        let p = Pos::new(0, 0);
        for dir in Dir::ALL {
            assert_eq!(p.step(dir).step(dir.opposite()), p);
        }
    }
}
