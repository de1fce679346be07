//! Map-wide searches: spiralling tile search and distance to water or land

use tracing::debug;

use crate::io::configuration::{MAX_LAND_SEARCH, MAX_WATER_SEARCH, WATER_ONLY_MAP_LAND_DISTANCE};
use crate::kinds::water;
use crate::map::direction::{DiagDirection, Direction};
use crate::map::geometry::{Geometry, TileIndex};
use crate::map::grid::Grid;
use crate::tile::record::TileType;

// Walk of the closest-water spiral, one side per edge direction
const SPIRAL_DX: [i32; 4] = [-1, 1, 1, -1];
const SPIRAL_DY: [i32; 4] = [1, 1, -1, -1];

impl Geometry {
    /// Test tiles in growing square rings around `tile` until `test` accepts one
    ///
    /// `size` is the side of the square covered. An odd size tests `tile`
    /// itself first; an even size centres the square on the north corner of
    /// `tile`. Tiles off the map are skipped. Returns the first accepted
    /// tile, or `None` once the square is exhausted.
    ///
    /// # Panics
    ///
    /// Panics when `size` is zero
    pub fn circular_tile_search<F>(&self, tile: TileIndex, size: u32, mut test: F) -> Option<TileIndex>
    where
        F: FnMut(TileIndex) -> bool,
    {
        assert!(size > 0, "circular search needs a positive size");

        if size.is_multiple_of(2) {
            return self.circular_tile_search_with_hole(tile, size / 2, 0, 0, test);
        }

        if test(tile) {
            return Some(tile);
        }
        if size == 1 {
            return None;
        }

        // Rings around a 1x1 hole start one tile north of it
        let start = tile + self.tile_offs_by_dir(Direction::N);
        self.circular_tile_search_with_hole(start, size / 2, 1, 1, test)
    }

    /// Test `radius` square rings around a `w` by `h` hole that starts one
    /// tile south of `tile`
    ///
    /// Each ring is walked counter-clockwise starting at its north-east
    /// side. Tiles off the map are skipped.
    ///
    /// # Panics
    ///
    /// Panics when `radius` is zero
    pub fn circular_tile_search_with_hole<F>(
        &self,
        tile: TileIndex,
        radius: u32,
        w: u32,
        h: u32,
        mut test: F,
    ) -> Option<TileIndex>
    where
        F: FnMut(TileIndex) -> bool,
    {
        assert!(radius > 0, "circular search needs a positive radius");

        let mut x = self.tile_x(tile).wrapping_add(w + 1);
        let mut y = self.tile_y(tile);
        let extent = [w, h, w, h];

        for n in 0..radius {
            for &dir in DiagDirection::ALL {
                let step = dir.offset();
                for _ in 0..extent[dir as usize] + n * 2 + 1 {
                    if x < self.size_x() && y < self.size_y() {
                        let candidate = self.tile_xy(x, y);
                        if test(candidate) {
                            return Some(candidate);
                        }
                    }
                    x = x.wrapping_add(step.x as u32);
                    y = y.wrapping_add(step.y as u32);
                }
            }

            // Next ring starts one tile further out
            let jump = Direction::W.offset();
            x = x.wrapping_add(jump.x as u32);
            y = y.wrapping_add(jump.y as u32);
        }
        None
    }
}

impl Grid {
    /// Manhattan distance from `tile` to the closest water tile, or to the
    /// closest land tile when `water` is false
    ///
    /// The search radius is capped; when nothing is found the cap is
    /// returned. A land search on a map whose only land lies beyond the cap
    /// reports [`WATER_ONLY_MAP_LAND_DISTANCE`].
    pub fn closest_water_distance(&self, tile: TileIndex, water: bool) -> u32 {
        if water::has_tile_water_ground(self, tile) == water {
            return 0;
        }

        let max_dist = if water { MAX_WATER_SEARCH } else { MAX_LAND_SEARCH };

        let mut x = self.tile_x(tile) as i32;
        let mut y = self.tile_y(tile) as i32;

        let max_x = self.max_x() as i32;
        let max_y = self.max_y() as i32;
        // Void tiles are never tested
        let min_xy = i32::from(self.geometry().freeform_edges());

        for dist in 1..max_dist {
            // Step to the next ring
            y -= 1;

            for side in 0..4 {
                for _ in 0..dist {
                    if (min_xy..max_x).contains(&x) && (min_xy..max_y).contains(&y) {
                        let t = self.tile_xy(x as u32, y as u32);
                        if water::has_tile_water_ground(self, t) == water {
                            return dist;
                        }
                    }
                    x += SPIRAL_DX[side];
                    y += SPIRAL_DY[side];
                }
            }
        }

        if !water {
            debug!(
                target: "tilegrid::search",
                tile = tile.0,
                max_dist,
                "closest_land.full_scan"
            );
            let any_land = (0..self.size()).map(TileIndex).any(|t| {
                !self.is_tile_type(t, TileType::Void) && !self.is_tile_type(t, TileType::Water)
            });
            if any_land {
                return WATER_ONLY_MAP_LAND_DISTANCE;
            }
        }

        max_dist
    }
}
