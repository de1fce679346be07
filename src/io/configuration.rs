//! Engine constants and map configuration defaults

use serde::Deserialize;

use crate::io::error::{GridError, Result};

// Map size envelope
/// Minimal map size in bits per axis
pub const MIN_MAP_SIZE_BITS: u32 = 6;
/// Maximal map size in bits per axis
pub const MAX_MAP_SIZE_BITS: u32 = 12;
/// Minimal map size per axis
pub const MIN_MAP_SIZE: u32 = 1 << MIN_MAP_SIZE_BITS;
/// Maximal map size per axis
pub const MAX_MAP_SIZE: u32 = 1 << MAX_MAP_SIZE_BITS;

/// Default map size per axis when a config leaves it out
pub const DEFAULT_MAP_SIZE: u32 = 256;

// World units
/// Size of a tile edge in world coordinates
pub const TILE_SIZE: u32 = 16;
/// Mask to select a position inside a tile
pub const TILE_UNIT_MASK: u32 = TILE_SIZE - 1;
/// Pixel distance between tile columns and rows in the zoomed-in view
pub const TILE_PIXELS: u32 = 32;
/// Height of one height level in world coordinates
pub const TILE_HEIGHT: u32 = 8;

// Height limits
/// Maximum height a corner can be stored at
pub const MAX_TILE_HEIGHT: u32 = 255;
/// Lower bound of the configurable maximum height level
pub const MIN_MAX_HEIGHTLEVEL: u32 = 15;
/// Default maximum height level
pub const DEF_MAX_HEIGHTLEVEL: u32 = 30;
/// Upper bound of the configurable maximum height level
pub const MAX_MAX_HEIGHTLEVEL: u32 = MAX_TILE_HEIGHT;
/// Lowest snowline height
pub const MIN_SNOWLINE_HEIGHT: u32 = 2;
/// Default snowline height
pub const DEF_SNOWLINE_HEIGHT: u32 = 15;
/// Highest snowline height
pub const MAX_SNOWLINE_HEIGHT: u32 = MAX_TILE_HEIGHT - 2;

// Closest-water search caps
/// Search radius cap when looking for water
pub const MAX_WATER_SEARCH: u32 = 0x7F;
/// Search radius cap when looking for land
pub const MAX_LAND_SEARCH: u32 = 0x200;
/// Land distance reported when the only land lies outside the search radius
pub const WATER_ONLY_MAP_LAND_DISTANCE: u32 = 0x1FF;

/// Size and edge mode of a map, fixed for the lifetime of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MapConfig {
    /// Tiles along the X axis, a power of two
    pub size_x: u32,
    /// Tiles along the Y axis, a power of two
    pub size_y: u32,
    /// Whether the north-east and north-west edges are void as well
    pub freeform_edges: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            size_x: DEFAULT_MAP_SIZE,
            size_y: DEFAULT_MAP_SIZE,
            freeform_edges: false,
        }
    }
}

impl MapConfig {
    /// Config for a map of `size_x` by `size_y` tiles without freeform edges
    pub const fn new(size_x: u32, size_y: u32) -> Self {
        Self {
            size_x,
            size_y,
            freeform_edges: false,
        }
    }

    /// Same config with freeform edges switched on or off
    #[must_use]
    pub const fn with_freeform_edges(mut self, freeform_edges: bool) -> Self {
        self.freeform_edges = freeform_edges;
        self
    }

    /// Check both axes are powers of two inside the size envelope
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidMapSize`] naming the first bad axis
    pub fn validate(&self) -> Result<()> {
        if !is_valid_axis(self.size_x) {
            return Err(GridError::InvalidMapSize {
                axis: "x",
                size: self.size_x,
            });
        }
        if !is_valid_axis(self.size_y) {
            return Err(GridError::InvalidMapSize {
                axis: "y",
                size: self.size_y,
            });
        }
        Ok(())
    }
}

const fn is_valid_axis(size: u32) -> bool {
    size >= MIN_MAP_SIZE && size <= MAX_MAP_SIZE && size.is_power_of_two()
}
