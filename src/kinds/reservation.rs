//! Path reservations across every kind that carries rail

use crate::kinds::{rail, road, station, tunnel_bridge};
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::record::TileType;
use crate::transport::TransportType;
use crate::transport::track::TrackBits;

/// Reserved tracks on any tile
///
/// Plain rail, rail depots, level crossings, rail stations and waypoints,
/// and rail tunnel/bridge heads can hold a reservation. Every other tile,
/// including ship depots and locks, reports none.
pub fn reserved_track_bits(grid: &Grid, tile: TileIndex) -> TrackBits {
    match grid.tile_type(tile) {
        TileType::Railway => {
            if rail::is_rail_depot(grid, tile) {
                rail::depot_reservation_track_bits(grid, tile)
            } else {
                rail::rail_reservation_track_bits(grid, tile)
            }
        }
        TileType::Road if road::is_level_crossing(grid, tile) => {
            road::crossing_reservation_track_bits(grid, tile)
        }
        TileType::Station if station::has_station_rail(grid, tile) => {
            station::station_reservation_track_bits(grid, tile)
        }
        TileType::TunnelBridge
            if tunnel_bridge::transport_type(grid, tile) == TransportType::Rail =>
        {
            tunnel_bridge::tunnel_bridge_reservation_track_bits(grid, tile)
        }
        _ => TrackBits::empty(),
    }
}

/// Whether any track on the tile is reserved
pub fn has_reservation(grid: &Grid, tile: TileIndex) -> bool {
    !reserved_track_bits(grid, tile).is_empty()
}
