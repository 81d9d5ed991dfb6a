//! Dead-end opening: turning some tree leaves into loops.

use rand::Rng;

use warren_core::Dir;

use crate::carver::Carver;

impl<R: Rng> Carver<R> {
    /// Open some dead ends, introducing cycles.
    ///
    /// A cell is a dead end toward `dir` when its only open passage is the
    /// one facing away from `dir`. The grid is scanned once per direction
    /// in the fixed order left, right, up, down; each dead end with an
    /// in-bounds neighbour toward `dir` rolls a uniform percentage in
    /// `0..100` and the wall is carved when the roll lands below
    /// `percent`. Cells mutated by an earlier pass are not re-examined
    /// within the same call.
    ///
    /// Returns the number of passages opened. `percent = 0` leaves the
    /// grid untouched; `percent >= 100` opens every scanned dead end.
    /// Connectivity is unchanged either way: passages are only added.
    pub fn open_dead_ends(&mut self, percent: u8) -> usize {
        let mut opened = 0;

        for dir in Dir::ALL {
            let sole_passage = dir.opposite().flag().0;
            for pos in self.grid.positions() {
                if !self.grid.contains(pos.step(dir)) {
                    continue;
                }
                if self.grid.passage_bits(pos) == sole_passage
                    && self.rng.random_range(0..100u32) < u32::from(percent)
                {
                    self.grid.open(pos, dir);
                    opened += 1;
                }
            }
        }

        opened
    }
}
