//! Auxiliary search state: tentative distances, predecessors, and the
//! frontier entry type.

use warren_core::Pos;

/// Sentinel distance for cells not yet reached.
pub(crate) const UNREACHED: i32 = i32::MAX;

/// Per-cell search bookkeeping.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) finalized: bool,
    pub(crate) dist: i32,
    pub(crate) prev: Option<Pos>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            finalized: false,
            dist: UNREACHED,
            prev: None,
        }
    }
}

/// A grid-shaped map of [`Node`]s, allocated at solve start and dropped
/// at solve end. Positions are assumed in bounds; the solver only ever
/// constructs them from validated grid cells.
pub(crate) struct DistMap {
    nodes: Vec<Node>,
    width: i32,
}

impl DistMap {
    pub(crate) fn new(height: i32, width: i32) -> Self {
        Self {
            nodes: vec![Node::default(); (height * width) as usize],
            width,
        }
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        (pos.row * self.width + pos.col) as usize
    }

    #[inline]
    pub(crate) fn at(&self, pos: Pos) -> &Node {
        &self.nodes[self.index(pos)]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, pos: Pos) -> &mut Node {
        let i = self.index(pos);
        &mut self.nodes[i]
    }
}

/// Frontier entry ordered by tentative distance, smallest first.
#[derive(Copy, Clone, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub(crate) dist: i32,
    pub(crate) pos: Pos,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (a max-heap) pops the smallest distance.
        other.dist.cmp(&self.dist)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
