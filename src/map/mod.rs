//! Map geometry, the grid store and map-wide algorithms
//!
//! [`geometry::Geometry`] turns coordinates into indices and back.
//! [`grid::Grid`] owns the records and enforces the tile-level rules (type
//! tag, owner, height, tropic zone). Heights, slopes and searches are
//! further `impl` blocks on those two types.

/// Edge and corner directions with their offsets
pub mod direction;
/// Distance metrics
pub mod distance;
/// Coordinate system and tile indices
pub mod geometry;
/// The record store
pub mod grid;
/// Corner heights and slopes
pub mod height;
/// Circular search and closest water
pub mod search;
/// Slope and corner types
pub mod slope;

pub use direction::{Axis, DiagDirection, Direction};
pub use geometry::{Geometry, TileIndex, TileIndexDiff, TileIndexDiffC};
pub use grid::Grid;
pub use slope::{Corner, Slope};
