//! Shortest-path solving for warren mazes.
//!
//! [`solve`] runs a uniform-cost search from the fixed entry at the
//! top-left corner to the exit at the bottom-right corner of a carved
//! [`Grid`](warren_core::Grid), marking the cells it finalizes and the
//! cells on the reconstructed shortest path for rendering. All search
//! bookkeeping lives in a private grid-shaped map that exists only for
//! the duration of one call.

mod distmap;
mod search;

pub use search::{SolveError, solve};
