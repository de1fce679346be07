//! Tile record layout
//!
//! A tile is two plain records: the 8-byte core record and a 2-byte
//! extended record. Fields are named after their storage slot (`m1`..`m7`),
//! not their meaning, since the meaning depends on the tile's type tag.

/// Bit-field primitives over unsigned integers
pub mod bits;
/// Tile owner identifiers
pub mod owner;
/// Core and extended records, type tag and tropic zone
pub mod record;

pub use owner::Owner;
pub use record::{Tile, TileExtended, TileType, TropicZone};
