//! Void tiles: the unplayable band along the map edge

use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::record::{Tile, TileExtended, TileType};

/// Make a tile void, clearing everything including its height
///
/// # Panics
///
/// Panics unless the tile lies on a void edge of the map
pub fn make_void(grid: &mut Grid, tile: TileIndex) {
    grid.set_tile_type(tile, TileType::Void);
    let (record, ext) = grid.records_mut(tile);
    // Bridge flags and tropic zone go too: nothing may hover over the edge
    *record = Tile {
        type_bits: TileType::Void.raw() << 4,
        ..Tile::default()
    };
    *ext = TileExtended::default();
}

/// Whether a tile is void
pub fn is_void_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Void)
}
