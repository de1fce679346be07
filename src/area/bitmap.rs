use bitvec::prelude::*;

use crate::area::orthogonal::TileArea;
use crate::map::geometry::{Geometry, TileIndex};

/// A [`TileArea`] with one flag per tile
///
/// Used to collect a scattered set of tiles inside a bounding rectangle,
/// such as the catchment of a station.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitmapTileArea {
    area: TileArea,
    bits: BitVec,
}

impl BitmapTileArea {
    /// Bitmap over `area` with no tile set
    pub fn new(area: TileArea) -> Self {
        Self {
            area,
            bits: bitvec![0; area.len()],
        }
    }

    /// Bounding rectangle of the bitmap
    pub const fn area(&self) -> &TileArea {
        &self.area
    }

    /// Drop the area and every flag
    pub fn reset(&mut self) {
        self.area.clear();
        self.bits.clear();
    }

    /// Replace the area, clearing every flag
    pub fn initialize(&mut self, area: TileArea) {
        *self = Self::new(area);
    }

    fn slot(&self, geometry: &Geometry, tile: TileIndex) -> usize {
        let x = geometry.tile_x(tile) - geometry.tile_x(self.area.tile);
        let y = geometry.tile_y(tile) - geometry.tile_y(self.area.tile);
        y as usize * self.area.w as usize + x as usize
    }

    #[track_caller]
    fn expect_inside(&self, geometry: &Geometry, tile: TileIndex) {
        assert!(
            self.area.contains(geometry, tile),
            "tile {tile} outside bitmap area {:?}",
            self.area
        );
    }

    /// Set the flag of a tile
    ///
    /// # Panics
    ///
    /// Panics when `tile` lies outside the area
    pub fn set_tile(&mut self, geometry: &Geometry, tile: TileIndex) {
        self.expect_inside(geometry, tile);
        let slot = self.slot(geometry, tile);
        self.bits.set(slot, true);
    }

    /// Clear the flag of a tile
    ///
    /// # Panics
    ///
    /// Panics when `tile` lies outside the area
    pub fn clr_tile(&mut self, geometry: &Geometry, tile: TileIndex) {
        self.expect_inside(geometry, tile);
        let slot = self.slot(geometry, tile);
        self.bits.set(slot, false);
    }

    /// Whether the flag of a tile is set; tiles outside the area are not
    pub fn has_tile(&self, geometry: &Geometry, tile: TileIndex) -> bool {
        self.area.contains(geometry, tile) && self.bits[self.slot(geometry, tile)]
    }

    /// Number of tiles flagged
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Flagged tiles, row by row from the north corner
    pub fn iter<'a>(&'a self, geometry: &Geometry) -> impl Iterator<Item = TileIndex> + 'a {
        let geometry = *geometry;
        let base = self.area.tile;
        let w = self.area.w as usize;
        self.bits.iter_ones().map(move |slot| {
            geometry.tile_add_xy(base, (slot % w) as i32, (slot / w) as i32)
        })
    }
}
