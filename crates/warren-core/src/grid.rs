//! The maze storage substrate: a fixed-size grid of [`CellFlags`].

use std::fmt;

use crate::cell::CellFlags;
use crate::geom::{Dir, Pos};

/// Errors from [`Grid`] construction.
#[derive(Debug, Clone)]
pub enum GridError {
    /// One or both requested dimensions were below 1.
    ZeroDimension { height: i32, width: i32 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { height, width } => {
                write!(f, "grid dimensions must be at least 1x1, got {height}x{width}")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// An owning `H x W` grid of [`CellFlags`], stored row-major.
///
/// Dimensions are fixed at construction and flags only ever turn on,
/// matching the append-only nature of maze carving. Positions handed to
/// [`at`](Self::at), [`set`](Self::set) and [`open`](Self::open) must be
/// in bounds; out-of-range access is a caller bug and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellFlags>,
    height: i32,
    width: i32,
}

impl Grid {
    /// Allocate an all-walls grid. Fails fast on degenerate dimensions.
    pub fn new(height: i32, width: i32) -> Result<Self, GridError> {
        if height < 1 || width < 1 {
            return Err(GridError::ZeroDimension { height, width });
        }
        Ok(Self {
            cells: vec![CellFlags::NONE; (height * width) as usize],
            height,
            width,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Whether the position lies within the grid.
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row >= 0 && pos.row < self.height && pos.col >= 0 && pos.col < self.width
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} outside {}x{} grid",
            self.height,
            self.width
        );
        (pos.row * self.width + pos.col) as usize
    }

    /// The flag set at `pos` (copy semantics; the cell is one byte).
    #[inline]
    pub fn at(&self, pos: Pos) -> CellFlags {
        self.cells[self.index(pos)]
    }

    /// OR `flags` into the cell at `pos`. There is no way to clear a flag.
    #[inline]
    pub fn set(&mut self, pos: Pos, flags: CellFlags) {
        let i = self.index(pos);
        self.cells[i] = self.cells[i] | flags;
    }

    /// Whether all bits of `flags` are set at `pos`.
    #[inline]
    pub fn is_set(&self, pos: Pos, flags: CellFlags) -> bool {
        self.at(pos).contains(flags)
    }

    /// The passage nibble at `pos`, i.e. the glyph index.
    #[inline]
    pub fn passage_bits(&self, pos: Pos) -> u8 {
        self.at(pos).passages()
    }

    /// Carve a bidirectional passage from `pos` toward `dir`.
    ///
    /// Sets `dir.flag()` on `pos` and the mirrored flag on the neighbour
    /// in one call, so the mirror invariant holds after every mutation.
    /// The neighbour must be in bounds.
    #[inline]
    pub fn open(&mut self, pos: Pos, dir: Dir) {
        self.set(pos, dir.flag());
        self.set(pos.step(dir), dir.opposite().flag());
    }

    /// Row-major iterator over every position.
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<> {
        let (height, width) = (self.height, self.width);
        (0..height).flat_map(move |row| (0..width).map(move |col| Pos::new(row, col)))
    }

    /// Total number of carved passages, each bidirectional passage counted
    /// once.
    pub fn passage_count(&self) -> usize {
        let bits: u32 = self
            .positions()
            .map(|p| u32::from(self.passage_bits(p)).count_ones())
            .sum();
        (bits / 2) as usize
    }
}
