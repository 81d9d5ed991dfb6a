//! Spanning-tree carving over an explicit frontier.

use rand::Rng;

use warren_core::{CellFlags, Dir, Grid, Pos};

/// Frontier discipline used by [`Carver::carve`].
///
/// Both variants grow a spanning tree from the top-left corner; they
/// differ only in which frontier cell is extended next.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    /// Depth-first: always extend the most recently pushed cell. Produces
    /// long winding corridors (recursive-backtracker behaviour).
    Backtracker,
    /// Randomized-Prim variant: extend a uniformly random frontier cell.
    /// Produces many short branches.
    Prim,
}

/// Maze carver operating on a [`Grid`] with an injected random source.
///
/// The same `rng` stream drives [`carve`](Self::carve) and
/// [`open_dead_ends`](Self::open_dead_ends), keeping the whole
/// generation phase reproducible from one seed.
pub struct Carver<R: Rng> {
    pub rng: R,
    pub grid: Grid,
}

impl<R: Rng> Carver<R> {
    /// Create a carver over a freshly allocated grid.
    pub fn with_grid(grid: Grid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Take the finished grid back out.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Carve a spanning tree over the whole grid.
    ///
    /// Every cell becomes reachable through exactly `H * W - 1` carved
    /// passages, so any two cells are joined by a unique path. Returns
    /// the number of passages carved. Always terminates; never fails.
    pub fn carve(&mut self, algorithm: Algorithm) -> usize {
        let start = Pos::START;
        self.grid.set(start, CellFlags::VISITED);

        let mut frontier = vec![start];
        let mut carved = 0;

        while !frontier.is_empty() {
            let last = frontier.len() - 1;
            if algorithm == Algorithm::Prim {
                // Randomize growth order; the swap keeps removal O(1).
                let pick = self.rng.random_range(0..frontier.len());
                frontier.swap(pick, last);
            }
            let cell = frontier[last];

            match self.choose_direction(cell) {
                None => {
                    // Exhausted: no unvisited neighbour left.
                    frontier.pop();
                }
                Some(dir) => {
                    let next = cell.step(dir);
                    self.grid.open(cell, dir);
                    self.grid.set(next, CellFlags::VISITED);
                    // The current cell stays on the frontier; it may still
                    // have other candidates when it is reached again.
                    frontier.push(next);
                    carved += 1;
                }
            }
        }

        carved
    }

    /// Pick a uniformly random direction whose neighbour is in bounds and
    /// not yet visited, or `None` if the cell is exhausted.
    fn choose_direction(&mut self, cell: Pos) -> Option<Dir> {
        let mut choices: Vec<Dir> = Vec::with_capacity(4);
        for dir in Dir::ALL {
            let next = cell.step(dir);
            if self.grid.contains(next) && !self.grid.is_set(next, CellFlags::VISITED) {
                choices.push(dir);
            }
        }
        if choices.is_empty() {
            None
        } else {
            Some(choices[self.rng.random_range(0..choices.len())])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Number of cells reachable from the start through open passages.
    fn reachable_count(grid: &Grid) -> usize {
        let mut seen = vec![false; (grid.height() * grid.width()) as usize];
        let mut stack = vec![Pos::START];
        seen[0] = true;
        let mut count = 0;
        while let Some(pos) = stack.pop() {
            count += 1;
            for dir in Dir::ALL {
                if !grid.is_set(pos, dir.flag()) {
                    continue;
                }
                let next = pos.step(dir);
                let idx = (next.row * grid.width() + next.col) as usize;
                if !seen[idx] {
                    seen[idx] = true;
                    stack.push(next);
                }
            }
        }
        count
    }

    /// Every set passage flag must be mirrored on the neighbour.
    fn passages_mirrored(grid: &Grid) -> bool {
        grid.positions().all(|pos| {
            Dir::ALL.iter().all(|&dir| {
                if !grid.is_set(pos, dir.flag()) {
                    return true;
                }
                let next = pos.step(dir);
                grid.contains(next) && grid.is_set(next, dir.opposite().flag())
            })
        })
    }

    fn carve_with_seed(height: i32, width: i32, algorithm: Algorithm, seed: u64) -> Grid {
        let grid = Grid::new(height, width).unwrap();
        let mut carver = Carver::with_grid(grid, StdRng::seed_from_u64(seed));
        carver.carve(algorithm);
        carver.into_grid()
    }

    #[test]
    fn backtracker_carves_a_spanning_tree() {
        for seed in [0, 1, 42] {
            let grid = carve_with_seed(12, 9, Algorithm::Backtracker, seed);
            assert_eq!(grid.passage_count(), 12 * 9 - 1);
            assert_eq!(reachable_count(&grid), 12 * 9);
            assert!(passages_mirrored(&grid));
        }
    }

    #[test]
    fn prim_carves_a_spanning_tree() {
        for seed in [0, 7, 1234] {
            let grid = carve_with_seed(9, 14, Algorithm::Prim, seed);
            assert_eq!(grid.passage_count(), 9 * 14 - 1);
            assert_eq!(reachable_count(&grid), 9 * 14);
            assert!(passages_mirrored(&grid));
        }
    }

    #[test]
    fn carve_returns_edge_count() {
        let grid = Grid::new(5, 5).unwrap();
        let mut carver = Carver::with_grid(grid, StdRng::seed_from_u64(3));
        assert_eq!(carver.carve(Algorithm::Backtracker), 24);
    }

    #[test]
    fn every_cell_ends_up_visited() {
        let grid = carve_with_seed(6, 6, Algorithm::Backtracker, 5);
        assert!(grid.positions().all(|p| grid.is_set(p, CellFlags::VISITED)));
    }

    #[test]
    fn one_by_one_grid_has_no_edges() {
        let grid = carve_with_seed(1, 1, Algorithm::Backtracker, 0);
        assert_eq!(grid.passage_count(), 0);
        assert!(grid.is_set(Pos::START, CellFlags::VISITED));
    }

    #[test]
    fn single_row_becomes_a_corridor() {
        let grid = carve_with_seed(1, 8, Algorithm::Prim, 2);
        assert_eq!(grid.passage_count(), 7);
        assert_eq!(reachable_count(&grid), 8);
    }

    #[test]
    fn same_seed_reproduces_the_maze() {
        for algorithm in [Algorithm::Backtracker, Algorithm::Prim] {
            let a = carve_with_seed(10, 10, algorithm, 99);
            let b = carve_with_seed(10, 10, algorithm, 99);
            assert_eq!(a, b);
        }
    }
}
