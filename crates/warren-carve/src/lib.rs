//! Randomized maze carving for warren grids.
//!
//! [`Carver`] grows a uniform spanning tree over a
//! [`Grid`](warren_core::Grid) by walking an explicit unvisited-neighbour
//! frontier ([`Algorithm`] picks the frontier discipline), then optionally
//! opens a configurable share of dead ends to introduce loops. A single
//! injected random source drives both phases, so a fixed seed reproduces
//! the whole maze bit for bit.

mod carver;
mod deadend;

pub use carver::{Algorithm, Carver};
