//! **warren-core** — storage substrate for warren mazes.
//!
//! This crate provides the types everything else in the workspace builds
//! on: grid positions and directions ([`Pos`], [`Dir`]), the per-cell flag
//! set ([`CellFlags`]), and the owning fixed-size [`Grid`] the carver and
//! solver mutate in place.

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::CellFlags;
pub use geom::{Dir, Pos};
pub use grid::{Grid, GridError};
