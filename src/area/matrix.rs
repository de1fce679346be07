use crate::area::orthogonal::TileArea;
use crate::io::configuration::MIN_MAP_SIZE;
use crate::map::geometry::{Geometry, TileIndex};

/// One `T` per `N` × `N` block of the map, allocated only for the blocks
/// that have been touched
///
/// Storage grows as a rectangle of blocks covering every tile accessed
/// through [`TileMatrix::get_mut`].
#[derive(Debug, Clone)]
pub struct TileMatrix<T, const N: u32> {
    area: TileArea,
    data: Vec<T>,
}

impl<T: Default + Clone, const N: u32> Default for TileMatrix<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Default + Clone, const N: u32> TileMatrix<T, N> {
    const BLOCK_FITS_MAP: () = assert!(
        N.is_power_of_two() && N <= MIN_MAP_SIZE,
        "block size must be a power of two no larger than the smallest map"
    );

    /// Edge length of one block in tiles
    pub const GRID: u32 = N;

    /// Matrix with no storage yet
    pub fn new() -> Self {
        let () = Self::BLOCK_FITS_MAP;
        Self {
            area: TileArea::empty(),
            data: Vec::new(),
        }
    }

    /// Tiles covered by the allocated blocks
    pub const fn area(&self) -> &TileArea {
        &self.area
    }

    /// Block holding `tile`, widened by `extend` blocks on each side where
    /// the map allows
    pub fn area_for_tile(geometry: &Geometry, tile: TileIndex, extend: u32) -> TileArea {
        let mut tile_x = (geometry.tile_x(tile) / N) * N;
        let mut tile_y = (geometry.tile_y(tile) / N) * N;
        let mut w = N;
        let mut h = N;

        w += (extend * N).min(tile_x);
        h += (extend * N).min(tile_y);

        tile_x -= (extend * N).min(tile_x);
        tile_y -= (extend * N).min(tile_y);

        w += (extend * N).min(geometry.size_x() - tile_x - w);
        h += (extend * N).min(geometry.size_y() - tile_y - h);

        TileArea::new(geometry.tile_xy(tile_x, tile_y), w as u16, h as u16)
    }

    fn allocate_storage(&mut self, geometry: &Geometry, tile: TileIndex) {
        let old = (!self.area.is_empty()).then(|| {
            (
                geometry.tile_x(self.area.tile) / N,
                geometry.tile_y(self.area.tile) / N,
                u32::from(self.area.w) / N,
                u32::from(self.area.h) / N,
            )
        });

        // Grow by the whole block the tile is in
        let grid_x = (geometry.tile_x(tile) / N) * N;
        let grid_y = (geometry.tile_y(tile) / N) * N;
        self.area.add(geometry, geometry.tile_xy(grid_x, grid_y));
        self.area.add(geometry, geometry.tile_xy(grid_x + N - 1, grid_y + N - 1));

        let new_w = u32::from(self.area.w) / N;
        let new_h = u32::from(self.area.h) / N;
        let mut data = vec![T::default(); (new_w * new_h) as usize];

        if let Some((old_left, old_top, old_w, old_h)) = old {
            let offs_x = old_left - geometry.tile_x(self.area.tile) / N;
            let offs_y = old_top - geometry.tile_y(self.area.tile) / N;
            for (row, chunk) in self.data.chunks(old_w as usize).take(old_h as usize).enumerate() {
                let start = ((row as u32 + offs_y) * new_w + offs_x) as usize;
                data[start..start + chunk.len()].clone_from_slice(chunk);
            }
        }

        self.data = data;
    }

    /// Make sure the block holding `tile` has storage
    pub fn add(&mut self, geometry: &Geometry, tile: TileIndex) {
        if !self.area.contains(geometry, tile) {
            self.allocate_storage(geometry, tile);
        }
    }

    fn slot(&self, geometry: &Geometry, tile: TileIndex) -> usize {
        let x = (geometry.tile_x(tile) - geometry.tile_x(self.area.tile)) / N;
        let y = (geometry.tile_y(tile) - geometry.tile_y(self.area.tile)) / N;
        (y * (u32::from(self.area.w) / N) + x) as usize
    }

    /// Value of the block holding `tile`, if it has storage
    pub fn get(&self, geometry: &Geometry, tile: TileIndex) -> Option<&T> {
        if !self.area.contains(geometry, tile) {
            return None;
        }
        self.data.get(self.slot(geometry, tile))
    }

    /// Value of the block holding `tile`, allocating storage as needed
    pub fn get_mut(&mut self, geometry: &Geometry, tile: TileIndex) -> &mut T {
        self.add(geometry, tile);
        let slot = self.slot(geometry, tile);
        &mut self.data[slot]
    }
}
