//! Box-drawing terminal rendering for warren mazes.
//!
//! Each cell's passage nibble selects one of sixteen double-line glyphs;
//! the solver overlays pick the accent colour. Frames are queued through
//! crossterm into any [`io::Write`] and flushed once, so rendering works
//! the same on a real terminal, a pipe, or a test buffer.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};

use warren_core::{CellFlags, Grid, Pos};

/// Box-drawing glyph for each passage nibble.
///
/// Index bits: 1 = left, 2 = right, 4 = up, 8 = down.
pub const GLYPHS: [char; 16] = [
    ' ', // 0000
    '╡', // 0001
    '╞', // 0010
    '═', // 0011
    '╨', // 0100
    '╝', // 0101
    '╚', // 0110
    '╩', // 0111
    '╥', // 1000
    '╗', // 1001
    '╔', // 1010
    '╦', // 1011
    '║', // 1100
    '╣', // 1101
    '╠', // 1110
    '╬', // 1111
];

/// Accent colour for cells on the shortest path (8-bit palette red).
const PATH_COLOR: Color = Color::AnsiValue(196);
/// Accent colour for cells the solver finalized but left off the path
/// (8-bit palette pale blue).
const EXPLORED_COLOR: Color = Color::AnsiValue(159);

/// The glyph for one cell, from its passage nibble.
#[inline]
pub fn glyph(grid: &Grid, pos: Pos) -> char {
    GLYPHS[grid.passage_bits(pos) as usize]
}

/// Queue the whole grid into `out`, one row per line, and flush once.
///
/// [`CellFlags::ON_PATH`] cells take the path colour even when also
/// [`CellFlags::EXPLORED`].
pub fn draw<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let pos = Pos::new(row, col);
            let g = glyph(grid, pos);
            if grid.is_set(pos, CellFlags::ON_PATH) {
                queue!(out, SetForegroundColor(PATH_COLOR), Print(g), ResetColor)?;
            } else if grid.is_set(pos, CellFlags::EXPLORED) {
                queue!(out, SetForegroundColor(EXPLORED_COLOR), Print(g), ResetColor)?;
            } else {
                queue!(out, Print(g))?;
            }
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

/// Maze dimensions fitting the current terminal, shrunk by a margin for
/// the prompt and summary lines. Falls back to 80x24 when the size is
/// unavailable (pipes, tests).
pub fn suggested_size() -> (i32, i32) {
    let (cols, rows) = terminal::size().unwrap_or((80, 24));
    let height = (i32::from(rows) - 5).max(1);
    let width = (i32::from(cols) - 6).max(1);
    (height, width)
}
