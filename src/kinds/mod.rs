//! Per-kind tile accessors
//!
//! Each module owns the interpretation of the kind-specific fields for one
//! tile type. Accessors are free functions over `(&Grid, TileIndex)` and
//! assert the tile kind before touching a field; calling one on the wrong
//! kind is a bug in the caller and panics.
//!
//! The `make_*` functions turn any tile into a fresh tile of their kind.
//! They rewrite every kind-specific field, so nothing of the previous kind
//! survives, but keep the height, tropic zone and bridge-above flags.

use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::record::{Tile, TileExtended, TileType};

/// Bare land and farm fields
pub mod clear;
/// Cross-kind depot queries
pub mod depot;
/// Town houses
pub mod house;
/// Rail track, signals and rail depots
pub mod rail;
/// Track reservation across kinds
pub mod reservation;
/// Roads, level crossings and road depots
pub mod road;
/// Stations, waypoints, docks, buoys and oil rigs
pub mod station;
/// Trees
pub mod tree;
/// Tunnel portals and bridge ramps
pub mod tunnel_bridge;
/// Void tiles on the map edge
pub mod void;
/// Sea, canals, rivers, coast, locks and ship depots
pub mod water;

/// Index of an industry in the industry pool
pub type IndustryId = u16;
/// Index of a station in the station pool
pub type StationId = u16;
/// Index of a town in the town pool
pub type TownId = u16;
/// Index of a depot in the depot pool
pub type DepotId = u16;
/// Type of house, an index into the house specs
pub type HouseId = u16;

/// Assert that `tile` has type `ty`
#[track_caller]
pub(crate) fn expect_type(grid: &Grid, tile: TileIndex, ty: TileType) {
    let actual = grid.tile_type(tile);
    assert!(actual == ty, "tile {tile} is {actual:?}, expected {ty:?}");
}

/// Set the type tag and zero every kind-specific field
pub(crate) fn stamp(grid: &mut Grid, tile: TileIndex, ty: TileType) {
    grid.set_tile_type(tile, ty);
    let (record, ext) = grid.records_mut(tile);
    *record = Tile {
        type_bits: record.type_bits,
        height: record.height,
        ..Tile::default()
    };
    *ext = TileExtended::default();
}
