//! **pathkit-core** — caller-side primitives for the *pathkit* toolkit.
//!
//! This crate holds the geometry and terrain types that callers use to
//! describe grids: [`Point`] coordinates and the ASCII-parsed [`TileMap`].
//! It contains no search logic; see `pathkit-paths` for the solvers.

pub mod geom;
pub mod tilemap;

pub use geom::Point;
pub use tilemap::{MapError, Tile, TileMap};
