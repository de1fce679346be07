//! Regions of the map and iteration over them
//!
//! Areas are plain values; every operation that needs the map's dimensions
//! takes a [`Geometry`](crate::map::geometry::Geometry). Iterators copy the
//! dimensions they need, so they never borrow the grid.

/// Areas with one flag per tile
pub mod bitmap;
/// Areas rotated by 45 degrees
pub mod diagonal;
/// Per-block storage grown on demand
pub mod matrix;
/// Axis-aligned rectangles
pub mod orthogonal;

pub use bitmap::BitmapTileArea;
pub use diagonal::{DiagonalTileArea, DiagonalTileIterator};
pub use matrix::TileMatrix;
pub use orthogonal::{OrthogonalTileIterator, TileArea};
