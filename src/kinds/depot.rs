//! Depot queries across rail, road and water tiles

use crate::kinds::{DepotId, rail, road, water};
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::record::TileType;
use crate::transport::TransportType;

raw_enum! {
    /// Kind of vehicle a depot serves
    pub enum VehicleType {
        /// Trains
        Train = 0,
        /// Road vehicles
        Road = 1,
        /// Ships
        Ship = 2,
        /// Aircraft
        Aircraft = 3,
    }
}

/// Whether the tile is a depot for `transport`
///
/// Hangars are part of airport layouts, which are not stored in the map,
/// so [`TransportType::Air`] never matches.
pub fn is_depot_type_tile(grid: &Grid, tile: TileIndex, transport: TransportType) -> bool {
    match transport {
        TransportType::Rail => rail::is_rail_depot_tile(grid, tile),
        TransportType::Road => road::is_road_depot_tile(grid, tile),
        TransportType::Water => water::is_ship_depot_tile(grid, tile),
        TransportType::Air => false,
    }
}

/// Whether the tile is a rail, road or ship depot
pub fn is_depot_tile(grid: &Grid, tile: TileIndex) -> bool {
    rail::is_rail_depot_tile(grid, tile)
        || road::is_road_depot_tile(grid, tile)
        || water::is_ship_depot_tile(grid, tile)
}

/// Index of the depot in the depot pool
///
/// # Panics
///
/// Panics unless the tile is a rail, road or ship depot
pub fn depot_index(grid: &Grid, tile: TileIndex) -> DepotId {
    assert!(is_depot_tile(grid, tile), "tile {tile} is not a depot");
    grid.record(tile).m2
}

/// Kind of vehicle served by the depot on a tile
///
/// # Panics
///
/// Panics on tile kinds that never hold a depot
pub fn depot_vehicle_type(grid: &Grid, tile: TileIndex) -> VehicleType {
    match grid.tile_type(tile) {
        TileType::Railway => VehicleType::Train,
        TileType::Road => VehicleType::Road,
        TileType::Water => VehicleType::Ship,
        TileType::Station => VehicleType::Aircraft,
        other => panic!("tile {tile} of type {other:?} holds no depot"),
    }
}
