//! Tunnel portals and bridge ramps, and the bridge-above flags of the tiles
//! a bridge spans
//!
//! | field | bits |
//! |---|---|
//! | bridge (set) or tunnel (clear) | m5 7 |
//! | transport type | m5 2..3 |
//! | direction into the wormhole | m5 0..1 |
//! | rail reservation | m5 4 |
//! | rail type | m3 0..3 |
//! | bridge type | m6 2..5 |
//! | snow or desert | m7 5 |
//! | bridge above, X and Y axis | type bits 2, 3 |
//!
//! Road heads share the road type and owner fields of road tiles, see
//! [`crate::kinds::road`].

use crate::kinds::{expect_type, road, stamp};
use crate::map::direction::{Axis, DiagDirection};
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::bits::{assign_bit, clr_bit, gb, has_bit, sb, set_bit};
use crate::tile::owner::Owner;
use crate::tile::record::TileType;
use crate::transport::road::{RoadType, RoadTypes};
use crate::transport::track::{Track, TrackBits};
use crate::transport::{RailType, TransportType};

/// Type of bridge, an index into the bridge specs
pub type BridgeType = u8;

/// Direction from a tunnel portal or bridge ramp towards its far end
pub fn tunnel_bridge_direction(grid: &Grid, tile: TileIndex) -> DiagDirection {
    expect_type(grid, tile, TileType::TunnelBridge);
    DiagDirection::decode(gb(grid.record(tile).m5, 0, 2))
}

/// What travels through the tunnel or over the bridge
pub fn transport_type(grid: &Grid, tile: TileIndex) -> TransportType {
    expect_type(grid, tile, TileType::TunnelBridge);
    TransportType::decode(gb(grid.record(tile).m5, 2, 2))
}

/// Whether the tunnel portal or bridge ramp lies in snow or desert
pub fn has_tunnel_bridge_snow_or_desert(grid: &Grid, tile: TileIndex) -> bool {
    expect_type(grid, tile, TileType::TunnelBridge);
    has_bit(grid.ext(tile).m7, 5)
}

/// Set whether the tunnel portal or bridge ramp lies in snow or desert
pub fn set_tunnel_bridge_snow_or_desert(grid: &mut Grid, tile: TileIndex, snow_or_desert: bool) {
    expect_type(grid, tile, TileType::TunnelBridge);
    assign_bit(&mut grid.ext_mut(tile).m7, 5, snow_or_desert);
}

#[track_caller]
fn expect_rail_head(grid: &Grid, tile: TileIndex) {
    assert!(
        transport_type(grid, tile) == TransportType::Rail,
        "tunnel/bridge head {tile} carries no rail"
    );
}

/// Whether the rail through the wormhole is reserved
pub fn has_tunnel_bridge_reservation(grid: &Grid, tile: TileIndex) -> bool {
    expect_rail_head(grid, tile);
    has_bit(grid.record(tile).m5, 4)
}

/// Reserve or release the rail through the wormhole
pub fn set_tunnel_bridge_reservation(grid: &mut Grid, tile: TileIndex, reserved: bool) {
    expect_rail_head(grid, tile);
    assign_bit(&mut grid.record_mut(tile).m5, 4, reserved);
}

/// Reserved track of a rail tunnel portal or bridge ramp
pub fn tunnel_bridge_reservation_track_bits(grid: &Grid, tile: TileIndex) -> TrackBits {
    if has_tunnel_bridge_reservation(grid, tile) {
        Track::from_diag_dir(tunnel_bridge_direction(grid, tile)).bits()
    } else {
        TrackBits::empty()
    }
}

/// Whether a tunnel/bridge head is a bridge ramp
pub fn is_bridge(grid: &Grid, tile: TileIndex) -> bool {
    expect_type(grid, tile, TileType::TunnelBridge);
    has_bit(grid.record(tile).m5, 7)
}

/// Whether a tile is a bridge ramp; any other kind answers false
pub fn is_bridge_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::TunnelBridge) && is_bridge(grid, tile)
}

/// Whether a tunnel/bridge head is a tunnel portal
pub fn is_tunnel(grid: &Grid, tile: TileIndex) -> bool {
    !is_bridge(grid, tile)
}

/// Whether a tile is a tunnel portal; any other kind answers false
pub fn is_tunnel_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::TunnelBridge) && is_tunnel(grid, tile)
}

/// Type of the bridge a ramp belongs to
pub fn bridge_type(grid: &Grid, tile: TileIndex) -> BridgeType {
    assert!(is_bridge_tile(grid, tile), "tile {tile} is not a bridge ramp");
    gb(grid.ext(tile).m6, 2, 4)
}

/// Whether a bridge spans the tile; valid for every kind
pub fn is_bridge_above(grid: &Grid, tile: TileIndex) -> bool {
    gb(grid.record(tile).type_bits, 2, 2) != 0
}

/// Axis of the bridge spanning the tile
pub fn bridge_axis(grid: &Grid, tile: TileIndex) -> Axis {
    assert!(is_bridge_above(grid, tile), "no bridge above tile {tile}");
    Axis::decode(gb(grid.record(tile).type_bits, 2, 2) - 1)
}

/// Mark a bridge along `axis` as spanning the tile
pub fn set_bridge_middle(grid: &mut Grid, tile: TileIndex, axis: Axis) {
    set_bit(&mut grid.record_mut(tile).type_bits, 2 + axis.raw());
}

/// Remove the bridge along `axis` from above the tile
pub fn clear_single_bridge_middle(grid: &mut Grid, tile: TileIndex, axis: Axis) {
    clr_bit(&mut grid.record_mut(tile).type_bits, 2 + axis.raw());
}

/// Remove every bridge from above the tile
pub fn clear_bridge_middle(grid: &mut Grid, tile: TileIndex) {
    clear_single_bridge_middle(grid, tile, Axis::X);
    clear_single_bridge_middle(grid, tile, Axis::Y);
}

/// Walk from `tile` towards `dir` to the ramp facing back at it
///
/// # Panics
///
/// Panics when the walk leaves the map without meeting such a ramp
pub fn bridge_end(grid: &Grid, tile: TileIndex, dir: DiagDirection) -> TileIndex {
    let delta = grid.geometry().tile_offs_by_diag_dir(dir);
    let facing = dir.reverse();
    let mut current = tile;
    loop {
        current = current + delta;
        if is_bridge_tile(grid, current) && tunnel_bridge_direction(grid, current) == facing {
            return current;
        }
    }
}

/// Northern ramp of the bridge spanning `tile`
pub fn northern_bridge_end(grid: &Grid, tile: TileIndex) -> TileIndex {
    bridge_end(grid, tile, bridge_axis(grid, tile).to_diag_dir().reverse())
}

/// Southern ramp of the bridge spanning `tile`
pub fn southern_bridge_end(grid: &Grid, tile: TileIndex) -> TileIndex {
    bridge_end(grid, tile, bridge_axis(grid, tile).to_diag_dir())
}

/// The ramp at the far end of the bridge starting at ramp `tile`
pub fn other_bridge_end(grid: &Grid, tile: TileIndex) -> TileIndex {
    assert!(is_bridge_tile(grid, tile), "tile {tile} is not a bridge ramp");
    bridge_end(grid, tile, tunnel_bridge_direction(grid, tile))
}

/// The portal at the far end of the tunnel starting at portal `tile`
///
/// The far portal faces back and lies at the same height.
pub fn other_tunnel_end(grid: &Grid, tile: TileIndex) -> TileIndex {
    let dir = tunnel_bridge_direction(grid, tile);
    let delta = grid.geometry().tile_offs_by_diag_dir(dir);
    let z = grid.tile_z(tile);
    let facing = dir.reverse();
    let mut current = tile;
    loop {
        current = current + delta;
        if is_tunnel_tile(grid, current)
            && tunnel_bridge_direction(grid, current) == facing
            && grid.tile_z(current) == z
        {
            return current;
        }
    }
}

/// The far end of a tunnel or bridge
pub fn other_tunnel_bridge_end(grid: &Grid, tile: TileIndex) -> TileIndex {
    if is_tunnel(grid, tile) {
        other_tunnel_end(grid, tile)
    } else {
        other_bridge_end(grid, tile)
    }
}

/// Whether a tunnel at height `z` passes under `tile`, coming from a
/// portal behind it that leads towards `dir`
pub fn is_tunnel_in_way_dir(grid: &Grid, tile: TileIndex, z: i32, dir: DiagDirection) -> bool {
    let delta = grid.geometry().tile_offs_by_diag_dir(dir);
    let mut current = tile;
    loop {
        current = current - delta;
        if !grid.is_valid_tile(current) {
            return false;
        }
        let height = grid.tile_z(current);
        if z >= height {
            return z == height
                && is_tunnel_tile(grid, current)
                && tunnel_bridge_direction(grid, current) == dir;
        }
    }
}

/// Whether a tunnel at height `z` passes under `tile` along either axis
///
/// Each axis is searched towards the nearer map edge.
pub fn is_tunnel_in_way(grid: &Grid, tile: TileIndex, z: i32) -> bool {
    let along_x = if grid.tile_x(tile) > grid.max_x() / 2 {
        DiagDirection::NE
    } else {
        DiagDirection::SW
    };
    let along_y = if grid.tile_y(tile) > grid.max_y() / 2 {
        DiagDirection::NW
    } else {
        DiagDirection::SE
    };
    is_tunnel_in_way_dir(grid, tile, z, along_x) || is_tunnel_in_way_dir(grid, tile, z, along_y)
}

fn make_tunnel_bridge_head(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    bridge: Option<BridgeType>,
    dir: DiagDirection,
    transport: TransportType,
    rail: RailType,
) {
    stamp(grid, tile, TileType::TunnelBridge);
    grid.set_tile_owner(tile, owner);
    let (record, ext) = grid.records_mut(tile);
    sb(&mut record.m3, 0, 4, rail.0);
    record.m5 = (transport.raw() << 2) | dir.raw();
    if let Some(bridge) = bridge {
        set_bit(&mut record.m5, 7);
        sb(&mut ext.m6, 2, 4, bridge);
    }
}

fn set_head_road(grid: &mut Grid, tile: TileIndex, road_owner: Owner, tram_owner: Owner, types: RoadTypes) {
    road::set_road_owner(grid, tile, RoadType::Road, road_owner);
    road::set_road_owner(grid, tile, RoadType::Tram, tram_owner);
    road::set_road_types(grid, tile, types);
}

/// Make a road tunnel portal leading towards `dir`
pub fn make_road_tunnel(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    dir: DiagDirection,
    types: RoadTypes,
) {
    make_tunnel_bridge_head(grid, tile, owner, None, dir, TransportType::Road, RailType(0));
    set_head_road(grid, tile, owner, owner, types);
}

/// Make a rail tunnel portal leading towards `dir`
pub fn make_rail_tunnel(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    dir: DiagDirection,
    rail: RailType,
) {
    make_tunnel_bridge_head(grid, tile, owner, None, dir, TransportType::Rail, rail);
}

/// Make a road bridge ramp leading towards `dir`
pub fn make_road_bridge_ramp(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    road_owner: Owner,
    tram_owner: Owner,
    bridge: BridgeType,
    dir: DiagDirection,
    types: RoadTypes,
) {
    make_tunnel_bridge_head(
        grid,
        tile,
        owner,
        Some(bridge),
        dir,
        TransportType::Road,
        RailType(0),
    );
    set_head_road(grid, tile, road_owner, tram_owner, types);
}

/// Make a rail bridge ramp leading towards `dir`
pub fn make_rail_bridge_ramp(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    bridge: BridgeType,
    dir: DiagDirection,
    rail: RailType,
) {
    make_tunnel_bridge_head(grid, tile, owner, Some(bridge), dir, TransportType::Rail, rail);
}

/// Make an aqueduct ramp leading towards `dir`
pub fn make_aqueduct_bridge_ramp(grid: &mut Grid, tile: TileIndex, owner: Owner, dir: DiagDirection) {
    make_tunnel_bridge_head(grid, tile, owner, Some(0), dir, TransportType::Water, RailType(0));
}
