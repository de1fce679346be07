//! Corner heights and the slopes derived from them
//!
//! A tile stores only the height of its north corner. The west, east and
//! south corners are the north corners of the neighbours at `(+1, 0)`,
//! `(0, +1)` and `(+1, +1)`. Tiles on the south-east and south-west edges
//! have no such neighbours and are treated as flat.

use crate::io::configuration::TILE_HEIGHT;
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::map::slope::Slope;

/// Slope and base height of a tile whose corners are at the given heights
///
/// The returned height is the lowest corner. Works in any unit as long as
/// all four heights share it.
pub fn tile_slope_given_height(north: i32, west: i32, east: i32, south: i32) -> (Slope, i32) {
    let min = north.min(west).min(east.min(south));
    let max = north.max(west).max(east.max(south));

    let mut slope = Slope::FLAT;
    if north != min {
        slope |= Slope::N;
    }
    if west != min {
        slope |= Slope::W;
    }
    if east != min {
        slope |= Slope::E;
    }
    if south != min {
        slope |= Slope::S;
    }
    if max - min == 2 {
        slope |= Slope::STEEP;
    }
    (slope, min)
}

impl Grid {
    /// Heights of the north, west, east and south corners of an inner tile
    fn corner_heights(&self, tile: TileIndex) -> [i32; 4] {
        let geo = self.geometry();
        [
            self.tile_height(tile) as i32,
            self.tile_height(tile + geo.tile_diff_xy(1, 0)) as i32,
            self.tile_height(tile + geo.tile_diff_xy(0, 1)) as i32,
            self.tile_height(tile + geo.tile_diff_xy(1, 1)) as i32,
        ]
    }

    const fn on_south_edge(&self, tile: TileIndex) -> bool {
        self.tile_x(tile) == self.max_x() || self.tile_y(tile) == self.max_y()
    }

    /// Height of the north corner in world units
    pub fn tile_pixel_height(&self, tile: TileIndex) -> u32 {
        self.tile_height(tile) * TILE_HEIGHT
    }

    /// Slope of a tile and the height of its lowest corner
    pub fn tile_slope(&self, tile: TileIndex) -> (Slope, i32) {
        if self.on_south_edge(tile) {
            return (Slope::FLAT, self.tile_height(tile) as i32);
        }
        let [north, west, east, south] = self.corner_heights(tile);
        tile_slope_given_height(north, west, east, south)
    }

    /// Slope of a tile and the height of its lowest corner in world units
    pub fn tile_pixel_slope(&self, tile: TileIndex) -> (Slope, i32) {
        let (slope, z) = self.tile_slope(tile);
        (slope, z * TILE_HEIGHT as i32)
    }

    /// Height of a tile if all four corners are level
    pub fn flat_tile_height(&self, tile: TileIndex) -> Option<u32> {
        let z = self.tile_height(tile);
        if !self.geometry().is_inner_tile(tile) {
            return Some(z);
        }
        let geo = self.geometry();
        let level = [(1, 0), (0, 1), (1, 1)]
            .iter()
            .all(|&(dx, dy)| self.tile_height(tile + geo.tile_diff_xy(dx, dy)) == z);
        level.then_some(z)
    }

    /// Whether all four corners of a tile are level
    pub fn is_tile_flat(&self, tile: TileIndex) -> bool {
        self.flat_tile_height(tile).is_some()
    }

    /// Height of the lowest corner; 0 on the south-east and south-west edges
    pub fn tile_z(&self, tile: TileIndex) -> i32 {
        if self.on_south_edge(tile) {
            return 0;
        }
        self.corner_heights(tile).into_iter().fold(i32::MAX, i32::min)
    }

    /// Height of the highest corner
    pub fn tile_max_z(&self, tile: TileIndex) -> i32 {
        if self.on_south_edge(tile) {
            return self.tile_height_outside_map(self.tile_x(tile) as i32, self.tile_y(tile) as i32)
                as i32;
        }
        self.corner_heights(tile).into_iter().fold(i32::MIN, i32::max)
    }

    /// Lowest corner in world units
    pub fn tile_pixel_z(&self, tile: TileIndex) -> i32 {
        self.tile_z(tile) * TILE_HEIGHT as i32
    }

    /// Highest corner in world units
    pub fn tile_max_pixel_z(&self, tile: TileIndex) -> i32 {
        self.tile_max_z(tile) * TILE_HEIGHT as i32
    }

    /// Height of the corner at `(x, y)`, which may lie outside the map
    ///
    /// Outside the map the terrain falls one level per tile of distance from
    /// the nearest in-map corner, down to level 0.
    pub fn tile_height_outside_map(&self, x: i32, y: i32) -> u32 {
        let max_x = self.max_x() as i32;
        let max_y = self.max_y() as i32;

        let (clamped_x, beyond_x) = if x < 0 {
            (0, -x)
        } else if x < max_x {
            (x, 0)
        } else {
            (max_x, x - max_x)
        };
        let (clamped_y, beyond_y) = if y < 0 {
            (0, -y)
        } else if y < max_y {
            (y, 0)
        } else {
            (max_y, y - max_y)
        };

        let base = self.tile_height(self.tile_xy(clamped_x as u32, clamped_y as u32)) as i32;
        (base - beyond_x - beyond_y).max(0) as u32
    }

    /// Height of the corner at `(x, y)` in world units, inside or outside the map
    pub fn tile_pixel_height_outside_map(&self, x: i32, y: i32) -> u32 {
        self.tile_height_outside_map(x, y) * TILE_HEIGHT
    }

    fn corner_heights_outside_map(&self, x: i32, y: i32) -> [i32; 4] {
        [
            self.tile_height_outside_map(x, y) as i32,
            self.tile_height_outside_map(x + 1, y) as i32,
            self.tile_height_outside_map(x, y + 1) as i32,
            self.tile_height_outside_map(x + 1, y + 1) as i32,
        ]
    }

    /// Slope and lowest corner in world units of the tile at `(x, y)`,
    /// which may lie outside the map
    pub fn tile_pixel_slope_outside_map(&self, x: i32, y: i32) -> (Slope, i32) {
        let [north, west, east, south] = self.corner_heights_outside_map(x, y);
        let (slope, z) = tile_slope_given_height(north, west, east, south);
        (slope, z * TILE_HEIGHT as i32)
    }

    /// Lowest corner in world units of the tile at `(x, y)`, inside or outside the map
    pub fn tile_pixel_z_outside_map(&self, x: i32, y: i32) -> i32 {
        let lowest = self.corner_heights_outside_map(x, y).into_iter().fold(i32::MAX, i32::min);
        lowest * TILE_HEIGHT as i32
    }

    /// Highest corner in world units of the tile at `(x, y)`, inside or outside the map
    pub fn tile_max_pixel_z_outside_map(&self, x: i32, y: i32) -> i32 {
        let highest = self.corner_heights_outside_map(x, y).into_iter().fold(i32::MIN, i32::max);
        highest * TILE_HEIGHT as i32
    }
}
