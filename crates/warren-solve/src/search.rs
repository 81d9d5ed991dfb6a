//! Uniform-cost search over the carved passage graph.

use std::collections::BinaryHeap;
use std::fmt;

use warren_core::{CellFlags, Dir, Grid, Pos};

use crate::distmap::{Candidate, DistMap};

/// Errors from [`solve`].
#[derive(Debug, Clone)]
pub enum SolveError {
    /// The frontier emptied before the exit was finalized. Cannot happen
    /// for grids produced by carving, which are fully connected, but is
    /// detected rather than looping or returning a garbage length.
    NoPath { exit: Pos },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPath { exit } => write!(f, "no path from (0, 0) to {exit}"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Find one shortest path from the top-left to the bottom-right corner.
///
/// Every passage costs 1, so this is breadth-first search expressed
/// through a distance-ordered frontier — the form that extends unchanged
/// to weighted variants. Duplicate frontier entries are tolerated and
/// filtered lazily by the finalized check at pop time instead of being
/// removed eagerly, which keeps pushes O(log n) on a binary heap.
///
/// Marks every finalized cell [`CellFlags::EXPLORED`] and every cell on
/// the reconstructed path [`CellFlags::ON_PATH`]. Returns the path length
/// in cells, both endpoints included; a 1x1 grid yields 1. The search
/// consumes no randomness and is fully deterministic for a fixed maze.
pub fn solve(grid: &mut Grid) -> Result<usize, SolveError> {
    let start = Pos::START;
    let exit = Pos::new(grid.height() - 1, grid.width() - 1);

    let mut map = DistMap::new(grid.height(), grid.width());
    let mut fringe = BinaryHeap::new();

    map.at_mut(start).dist = 0;
    fringe.push(Candidate {
        dist: 0,
        pos: start,
    });

    let mut found = false;
    while let Some(current) = fringe.pop() {
        if map.at(current.pos).finalized {
            // Stale duplicate; a shorter route was finalized first.
            continue;
        }
        map.at_mut(current.pos).finalized = true;
        grid.set(current.pos, CellFlags::EXPLORED);

        if current.pos == exit {
            found = true;
            break;
        }

        let next_dist = current.dist + 1;
        for dir in Dir::ALL {
            if !grid.is_set(current.pos, dir.flag()) {
                continue;
            }
            // Open passages always lead in bounds (mirror invariant).
            let neighbour = current.pos.step(dir);
            let node = map.at_mut(neighbour);
            if next_dist < node.dist {
                node.dist = next_dist;
                node.prev = Some(current.pos);
                fringe.push(Candidate {
                    dist: next_dist,
                    pos: neighbour,
                });
            }
        }
    }

    if !found {
        return Err(SolveError::NoPath { exit });
    }

    // Walk predecessors back from the exit, marking the path.
    let mut length = 1;
    let mut walk = exit;
    grid.set(walk, CellFlags::ON_PATH);
    while walk != start {
        match map.at(walk).prev {
            Some(prev) => {
                walk = prev;
                grid.set(walk, CellFlags::ON_PATH);
                length += 1;
            }
            // Finalized cells always chain back to the start; detected
            // rather than assumed.
            None => return Err(SolveError::NoPath { exit }),
        }
    }

    Ok(length)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_path(grid: &Grid) -> Vec<Pos> {
        grid.positions()
            .filter(|&p| grid.is_set(p, CellFlags::ON_PATH))
            .collect()
    }

    /// The marked path must be simple and contiguous: endpoints touch one
    /// other path cell through an open passage, interior cells two.
    fn assert_contiguous_path(grid: &Grid, length: usize) {
        let path = on_path(grid);
        assert_eq!(path.len(), length);

        let start = Pos::START;
        let exit = Pos::new(grid.height() - 1, grid.width() - 1);
        assert!(path.contains(&start));
        assert!(path.contains(&exit));

        if length == 1 {
            return;
        }
        for &pos in &path {
            let links = Dir::ALL
                .iter()
                .filter(|&&dir| {
                    grid.is_set(pos, dir.flag())
                        && grid.is_set(pos.step(dir), CellFlags::ON_PATH)
                })
                .count();
            if pos == start || pos == exit {
                assert_eq!(links, 1, "endpoint {pos} has {links} path links");
            } else {
                assert_eq!(links, 2, "interior {pos} has {links} path links");
            }
        }
    }

    #[test]
    fn one_by_one_solves_trivially() {
        let mut grid = Grid::new(1, 1).unwrap();
        assert_eq!(solve(&mut grid).unwrap(), 1);
        assert!(grid.is_set(Pos::START, CellFlags::ON_PATH));
        assert!(grid.is_set(Pos::START, CellFlags::EXPLORED));
    }

    #[test]
    fn corridor_is_walked_end_to_end() {
        let mut grid = Grid::new(1, 5).unwrap();
        for col in 0..4 {
            grid.open(Pos::new(0, col), Dir::Right);
        }
        assert_eq!(solve(&mut grid).unwrap(), 5);
        assert_contiguous_path(&grid, 5);
    }

    /// Hand-specified 3x3: a 9-cell snake from corner to corner, plus one
    /// shortcut edge (1,1)-(2,1) that creates a cycle and cuts the true
    /// distance to 7 cells. The solver must take the shortcut.
    #[test]
    fn picks_the_shorter_of_two_routes() {
        let mut grid = Grid::new(3, 3).unwrap();
        // Snake: (0,0) (0,1) (0,2) (1,2) (1,1) (1,0) (2,0) (2,1) (2,2).
        grid.open(Pos::new(0, 0), Dir::Right);
        grid.open(Pos::new(0, 1), Dir::Right);
        grid.open(Pos::new(0, 2), Dir::Down);
        grid.open(Pos::new(1, 2), Dir::Left);
        grid.open(Pos::new(1, 1), Dir::Left);
        grid.open(Pos::new(1, 0), Dir::Down);
        grid.open(Pos::new(2, 0), Dir::Right);
        grid.open(Pos::new(2, 1), Dir::Right);
        // Shortcut.
        grid.open(Pos::new(1, 1), Dir::Down);

        assert_eq!(solve(&mut grid).unwrap(), 7);
        assert_contiguous_path(&grid, 7);
    }

    #[test]
    fn fully_open_grid_takes_a_manhattan_path() {
        let mut grid = Grid::new(4, 6).unwrap();
        for pos in grid.positions().collect::<Vec<_>>() {
            if pos.col < 5 {
                grid.open(pos, Dir::Right);
            }
            if pos.row < 3 {
                grid.open(pos, Dir::Down);
            }
        }
        // 4 + 6 - 1 cells: no route can beat the Manhattan distance.
        assert_eq!(solve(&mut grid).unwrap(), 9);
        assert_contiguous_path(&grid, 9);
    }

    #[test]
    fn path_cells_are_a_subset_of_explored_cells() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.open(Pos::new(0, 0), Dir::Right);
        grid.open(Pos::new(0, 1), Dir::Right);
        grid.open(Pos::new(0, 2), Dir::Down);
        grid.open(Pos::new(1, 2), Dir::Down);
        grid.open(Pos::new(0, 0), Dir::Down);
        grid.open(Pos::new(1, 0), Dir::Down);

        solve(&mut grid).unwrap();
        for pos in on_path(&grid) {
            assert!(grid.is_set(pos, CellFlags::EXPLORED));
        }
    }

    #[test]
    fn unreachable_exit_is_reported() {
        // Only the top edge is carved; (1, 1) stays walled in.
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open(Pos::new(0, 0), Dir::Right);

        match solve(&mut grid) {
            Err(SolveError::NoPath { exit }) => assert_eq!(exit, Pos::new(1, 1)),
            other => panic!("expected NoPath, got {other:?}"),
        }
        // No path overlay may appear on a failed solve.
        assert!(on_path(&grid).is_empty());
    }

    #[test]
    fn carved_two_by_two_always_has_a_three_cell_path() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use warren_carve::{Algorithm, Carver};

        for seed in 0..8 {
            let grid = Grid::new(2, 2).unwrap();
            let mut carver = Carver::with_grid(grid, StdRng::seed_from_u64(seed));
            carver.carve(Algorithm::Backtracker);
            let mut grid = carver.into_grid();

            assert_eq!(grid.passage_count(), 3);
            // Opposite corners of any 2x2 spanning tree sit two edges apart.
            assert_eq!(solve(&mut grid).unwrap(), 3);
        }
    }

    #[test]
    fn solve_touches_no_passage_flags() {
        let mut grid = Grid::new(2, 3).unwrap();
        for col in 0..2 {
            grid.open(Pos::new(0, col), Dir::Right);
            grid.open(Pos::new(1, col), Dir::Right);
        }
        grid.open(Pos::new(0, 0), Dir::Down);

        let before: Vec<u8> = grid.positions().map(|p| grid.passage_bits(p)).collect();
        solve(&mut grid).unwrap();
        let after: Vec<u8> = grid.positions().map(|p| grid.passage_bits(p)).collect();
        assert_eq!(before, after);
    }
}
