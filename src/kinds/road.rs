//! Road tiles: plain road and tram track, level crossings and road depots
//!
//! | field | bits |
//! |---|---|
//! | road tile type | m5 6..7 |
//! | road bits, tram bits (normal) | m5 0..3, m3 0..3 |
//! | disallowed directions (normal) | m5 4..5 |
//! | road axis, reserved, barred (crossing) | m5 0, m5 4, m5 5 |
//! | rail type (crossing) | m3 0..3 |
//! | depot direction | m5 0..1 |
//! | town (normal, crossing) or depot index | m2 |
//! | road owner | m1 0..4 on normal road, else m7 0..4 |
//! | tram owner | m3 4..7 |
//! | road types | m7 6..7 |
//! | snow or desert | m7 5 |
//! | roadside | m6 3..5 |
//! | road works counter (normal) | m7 0..3 |
//!
//! Road types and owners are shared with road stops and road
//! tunnels/bridges, so those accessors accept all three tile kinds.

use crate::kinds::{DepotId, TownId, expect_type, station, stamp, tunnel_bridge};
use crate::map::direction::{Axis, DiagDirection};
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::bits::{ab, assign_bit, gb, has_bit, sb};
use crate::tile::owner::Owner;
use crate::tile::record::TileType;
use crate::transport::road::{DisallowedRoadDirections, RoadBits, RoadType, RoadTypes};
use crate::transport::track::{Track, TrackBits};
use crate::transport::{RailType, TransportType};

raw_enum! {
    /// Sub-type of a road tile
    pub enum RoadTileType {
        /// Road and/or tram pieces
        Normal = 0,
        /// Level crossing with a railway
        Crossing = 1,
        /// Road vehicle depot
        Depot = 2,
    }
}

raw_enum! {
    /// Decoration beside a road
    pub enum Roadside {
        /// Bare land
        Barren = 0,
        /// Grass verge
        Grass = 1,
        /// Pavement
        Paved = 2,
        /// Pavement with street lights
        StreetLights = 3,
        /// Pavement with trees
        Trees = 5,
        /// Road works on a grass verge
        GrassRoadWorks = 6,
        /// Road works on pavement
        PavedRoadWorks = 7,
    }
}

/// Sub-type of a road tile
pub fn road_tile_type(grid: &Grid, tile: TileIndex) -> RoadTileType {
    expect_type(grid, tile, TileType::Road);
    RoadTileType::decode(gb(grid.record(tile).m5, 6, 2))
}

/// Whether a road tile holds plain road or tram pieces
pub fn is_normal_road(grid: &Grid, tile: TileIndex) -> bool {
    road_tile_type(grid, tile) == RoadTileType::Normal
}

/// Whether a tile holds plain road or tram pieces; any other kind answers false
pub fn is_normal_road_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Road) && is_normal_road(grid, tile)
}

/// Whether a road tile is a level crossing
pub fn is_level_crossing(grid: &Grid, tile: TileIndex) -> bool {
    road_tile_type(grid, tile) == RoadTileType::Crossing
}

/// Whether a tile is a level crossing; any other kind answers false
pub fn is_level_crossing_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Road) && is_level_crossing(grid, tile)
}

/// Whether a road tile is a depot
pub fn is_road_depot(grid: &Grid, tile: TileIndex) -> bool {
    road_tile_type(grid, tile) == RoadTileType::Depot
}

/// Whether a tile is a road depot; any other kind answers false
pub fn is_road_depot_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Road) && is_road_depot(grid, tile)
}

#[track_caller]
fn expect_normal_road(grid: &Grid, tile: TileIndex) {
    assert!(is_normal_road_tile(grid, tile), "tile {tile} is not a normal road");
}

#[track_caller]
fn expect_crossing(grid: &Grid, tile: TileIndex) {
    assert!(is_level_crossing_tile(grid, tile), "tile {tile} is not a level crossing");
}

#[track_caller]
fn expect_road_carrier(grid: &Grid, tile: TileIndex) {
    let ty = grid.tile_type(tile);
    assert!(
        matches!(ty, TileType::Road | TileType::Station | TileType::TunnelBridge),
        "tile {tile} of type {ty:?} carries no road"
    );
}

/// Road or tram pieces of one type on a normal road
pub fn road_bits(grid: &Grid, tile: TileIndex, rt: RoadType) -> RoadBits {
    expect_normal_road(grid, tile);
    let record = grid.record(tile);
    let raw = match rt {
        RoadType::Road => gb(record.m5, 0, 4),
        RoadType::Tram => gb(record.m3, 0, 4),
    };
    RoadBits::from_bits_retain(raw)
}

/// Pieces of the other road type on a normal road
pub fn other_road_bits(grid: &Grid, tile: TileIndex, rt: RoadType) -> RoadBits {
    let other = match rt {
        RoadType::Road => RoadType::Tram,
        RoadType::Tram => RoadType::Road,
    };
    road_bits(grid, tile, other)
}

/// Road and tram pieces together
pub fn all_road_bits(grid: &Grid, tile: TileIndex) -> RoadBits {
    road_bits(grid, tile, RoadType::Road) | road_bits(grid, tile, RoadType::Tram)
}

/// Set the pieces of one road type on a normal road
pub fn set_road_bits(grid: &mut Grid, tile: TileIndex, bits: RoadBits, rt: RoadType) {
    expect_normal_road(grid, tile);
    let record = grid.record_mut(tile);
    match rt {
        RoadType::Road => sb(&mut record.m5, 0, 4, bits.bits()),
        RoadType::Tram => sb(&mut record.m3, 0, 4, bits.bits()),
    }
}

/// Road types present on a road, road stop or road tunnel/bridge
pub fn road_types(grid: &Grid, tile: TileIndex) -> RoadTypes {
    expect_road_carrier(grid, tile);
    RoadTypes::from_bits_retain(gb(grid.ext(tile).m7, 6, 2))
}

/// Set the road types present
pub fn set_road_types(grid: &mut Grid, tile: TileIndex, types: RoadTypes) {
    expect_road_carrier(grid, tile);
    sb(&mut grid.ext_mut(tile).m7, 6, 2, types.bits());
}

/// Whether a road type is present
pub fn has_tile_road_type(grid: &Grid, tile: TileIndex, rt: RoadType) -> bool {
    road_types(grid, tile).contains(rt.types())
}

/// Owner of the road or tram pieces
///
/// Tram pieces without an owner read back as [`Owner::NONE`].
pub fn road_owner(grid: &Grid, tile: TileIndex, rt: RoadType) -> Owner {
    expect_road_carrier(grid, tile);
    match rt {
        RoadType::Road => {
            let raw = if is_normal_road_tile(grid, tile) {
                grid.record(tile).m1
            } else {
                grid.ext(tile).m7
            };
            Owner(gb(raw, 0, 5))
        }
        RoadType::Tram => {
            // Four bits cannot hold NONE; trams are never town-owned, so TOWN stands in
            let owner = Owner(gb(grid.record(tile).m3, 4, 4));
            if owner == Owner::TOWN { Owner::NONE } else { owner }
        }
    }
}

/// Set the owner of the road or tram pieces
///
/// # Panics
///
/// Panics when a tram owner is none of the companies, the town or
/// [`Owner::NONE`]; a town tram owner reads back as [`Owner::NONE`]
pub fn set_road_owner(grid: &mut Grid, tile: TileIndex, rt: RoadType, owner: Owner) {
    expect_road_carrier(grid, tile);
    match rt {
        RoadType::Road => {
            if is_normal_road_tile(grid, tile) {
                sb(&mut grid.record_mut(tile).m1, 0, 5, owner.0);
            } else {
                sb(&mut grid.ext_mut(tile).m7, 0, 5, owner.0);
            }
        }
        RoadType::Tram => {
            let stored = if owner == Owner::NONE { Owner::TOWN } else { owner };
            sb(&mut grid.record_mut(tile).m3, 4, 4, stored.0);
        }
    }
}

/// Whether `owner` owns the pieces of a road type present on the tile
pub fn is_road_owner(grid: &Grid, tile: TileIndex, rt: RoadType, owner: Owner) -> bool {
    assert!(has_tile_road_type(grid, tile, rt), "tile {tile} has no {rt:?}");
    road_owner(grid, tile, rt) == owner
}

/// Whether the tile has road owned by a town
pub fn has_town_owned_road(grid: &Grid, tile: TileIndex) -> bool {
    has_tile_road_type(grid, tile, RoadType::Road)
        && is_road_owner(grid, tile, RoadType::Road, Owner::TOWN)
}

/// Directions one-way traffic may not take on a normal road
pub fn disallowed_road_directions(grid: &Grid, tile: TileIndex) -> DisallowedRoadDirections {
    expect_normal_road(grid, tile);
    DisallowedRoadDirections::decode(gb(grid.record(tile).m5, 4, 2))
}

/// Set the one-way restriction of a normal road
pub fn set_disallowed_road_directions(
    grid: &mut Grid,
    tile: TileIndex,
    drd: DisallowedRoadDirections,
) {
    expect_normal_road(grid, tile);
    sb(&mut grid.record_mut(tile).m5, 4, 2, drd.raw());
}

/// Axis of the road through a level crossing
pub fn crossing_road_axis(grid: &Grid, tile: TileIndex) -> Axis {
    expect_crossing(grid, tile);
    Axis::decode(gb(grid.record(tile).m5, 0, 1))
}

/// Axis of the rail through a level crossing
pub fn crossing_rail_axis(grid: &Grid, tile: TileIndex) -> Axis {
    crossing_road_axis(grid, tile).other()
}

/// Road pieces of a level crossing
pub fn crossing_road_bits(grid: &Grid, tile: TileIndex) -> RoadBits {
    RoadBits::from_axis(crossing_road_axis(grid, tile))
}

/// Rail track of a level crossing
pub fn crossing_rail_track(grid: &Grid, tile: TileIndex) -> Track {
    Track::from_axis(crossing_rail_axis(grid, tile))
}

/// Rail track of a level crossing as a set
pub fn crossing_rail_bits(grid: &Grid, tile: TileIndex) -> TrackBits {
    crossing_rail_track(grid, tile).bits()
}

/// Whether the rail through a level crossing is reserved
pub fn has_crossing_reservation(grid: &Grid, tile: TileIndex) -> bool {
    expect_crossing(grid, tile);
    has_bit(grid.record(tile).m5, 4)
}

/// Reserve or release the rail through a level crossing
pub fn set_crossing_reservation(grid: &mut Grid, tile: TileIndex, reserved: bool) {
    expect_crossing(grid, tile);
    assign_bit(&mut grid.record_mut(tile).m5, 4, reserved);
}

/// Reserved rail of a level crossing
pub fn crossing_reservation_track_bits(grid: &Grid, tile: TileIndex) -> TrackBits {
    if has_crossing_reservation(grid, tile) {
        crossing_rail_bits(grid, tile)
    } else {
        TrackBits::empty()
    }
}

/// Whether the barriers of a level crossing are down
pub fn is_crossing_barred(grid: &Grid, tile: TileIndex) -> bool {
    expect_crossing(grid, tile);
    has_bit(grid.record(tile).m5, 5)
}

/// Lower or raise the barriers of a level crossing
pub fn set_crossing_barred(grid: &mut Grid, tile: TileIndex, barred: bool) {
    expect_crossing(grid, tile);
    assign_bit(&mut grid.record_mut(tile).m5, 5, barred);
}

/// Raise the barriers
pub fn unbar_crossing(grid: &mut Grid, tile: TileIndex) {
    set_crossing_barred(grid, tile, false);
}

/// Lower the barriers
pub fn bar_crossing(grid: &mut Grid, tile: TileIndex) {
    set_crossing_barred(grid, tile, true);
}

/// Whether the road lies in snow or desert
pub fn is_on_snow_or_desert(grid: &Grid, tile: TileIndex) -> bool {
    expect_type(grid, tile, TileType::Road);
    has_bit(grid.ext(tile).m7, 5)
}

/// Flip the snow-or-desert flag
pub fn toggle_snow_or_desert(grid: &mut Grid, tile: TileIndex) {
    let snowy = is_on_snow_or_desert(grid, tile);
    assign_bit(&mut grid.ext_mut(tile).m7, 5, !snowy);
}

/// Decoration beside the road
pub fn roadside(grid: &Grid, tile: TileIndex) -> Roadside {
    expect_type(grid, tile, TileType::Road);
    Roadside::decode(gb(grid.ext(tile).m6, 3, 3))
}

/// Set the decoration beside the road
pub fn set_roadside(grid: &mut Grid, tile: TileIndex, side: Roadside) {
    expect_type(grid, tile, TileType::Road);
    sb(&mut grid.ext_mut(tile).m6, 3, 3, side.raw());
}

/// Whether the road is being worked on
pub fn has_road_works(grid: &Grid, tile: TileIndex) -> bool {
    matches!(
        roadside(grid, tile),
        Roadside::GrassRoadWorks | Roadside::PavedRoadWorks
    )
}

/// Advance the road works counter; true once the works are done
pub fn increase_road_works_counter(grid: &mut Grid, tile: TileIndex) -> bool {
    expect_normal_road(grid, tile);
    let m7 = &mut grid.ext_mut(tile).m7;
    ab(m7, 0, 4, 1);
    gb(*m7, 0, 4) == 15
}

/// Start road works, clearing away trees and lights
///
/// # Panics
///
/// Panics when works are already in progress
pub fn start_road_works(grid: &mut Grid, tile: TileIndex) {
    assert!(!has_road_works(grid, tile), "road works already on tile {tile}");
    let works = match roadside(grid, tile) {
        Roadside::Barren | Roadside::Grass => Roadside::GrassRoadWorks,
        _ => Roadside::PavedRoadWorks,
    };
    set_roadside(grid, tile, works);
}

/// Finish road works and stop the counter
///
/// # Panics
///
/// Panics when no works are in progress
pub fn terminate_road_works(grid: &mut Grid, tile: TileIndex) {
    let restored = match roadside(grid, tile) {
        Roadside::GrassRoadWorks => Roadside::Grass,
        Roadside::PavedRoadWorks => Roadside::Paved,
        other => panic!("no road works on tile {tile} (roadside {other:?})"),
    };
    set_roadside(grid, tile, restored);
    sb(&mut grid.ext_mut(tile).m7, 0, 4, 0);
}

/// Direction the depot entrance faces
pub fn road_depot_direction(grid: &Grid, tile: TileIndex) -> DiagDirection {
    assert!(is_road_depot_tile(grid, tile), "tile {tile} is not a road depot");
    DiagDirection::decode(gb(grid.record(tile).m5, 0, 2))
}

/// Index of a road depot in the depot pool
pub fn road_depot_index(grid: &Grid, tile: TileIndex) -> DepotId {
    assert!(is_road_depot_tile(grid, tile), "tile {tile} is not a road depot");
    grid.record(tile).m2
}

/// Road pieces of a type on any tile, as vehicles see them
///
/// Road stops and tunnel/bridge heads report the pieces connecting them
/// to the neighbouring road. With `straight_tunnel_bridge_entrance` a
/// tunnel/bridge head reports the full straight piece instead of the half
/// facing away from the wormhole.
pub fn any_road_bits(
    grid: &Grid,
    tile: TileIndex,
    rt: RoadType,
    straight_tunnel_bridge_entrance: bool,
) -> RoadBits {
    match grid.tile_type(tile) {
        TileType::Road | TileType::Station | TileType::TunnelBridge => {}
        _ => return RoadBits::empty(),
    }
    if !has_tile_road_type(grid, tile, rt) {
        return RoadBits::empty();
    }

    match grid.tile_type(tile) {
        TileType::Road => match road_tile_type(grid, tile) {
            RoadTileType::Normal => road_bits(grid, tile, rt),
            RoadTileType::Crossing => crossing_road_bits(grid, tile),
            RoadTileType::Depot => RoadBits::from_diag_dir(road_depot_direction(grid, tile)),
        },
        TileType::Station => {
            if !station::is_road_stop_tile(grid, tile) {
                return RoadBits::empty();
            }
            let dir = station::road_stop_dir(grid, tile);
            if station::is_drive_through_stop_tile(grid, tile) {
                RoadBits::from_axis(dir.axis())
            } else {
                RoadBits::from_diag_dir(dir)
            }
        }
        TileType::TunnelBridge => {
            if tunnel_bridge::transport_type(grid, tile) != TransportType::Road {
                return RoadBits::empty();
            }
            let dir = tunnel_bridge::tunnel_bridge_direction(grid, tile);
            if straight_tunnel_bridge_entrance {
                RoadBits::from_axis(dir.axis())
            } else {
                RoadBits::from_diag_dir(dir.reverse())
            }
        }
        _ => RoadBits::empty(),
    }
}

/// Make a normal road tile with the same pieces for every present road type
pub fn make_road_normal(
    grid: &mut Grid,
    tile: TileIndex,
    bits: RoadBits,
    types: RoadTypes,
    town: TownId,
    road: Owner,
    tram: Owner,
) {
    stamp(grid, tile, TileType::Road);
    grid.set_tile_owner(tile, road);
    let (record, ext) = grid.records_mut(tile);
    record.m2 = town;
    if types.contains(RoadTypes::TRAM) {
        sb(&mut record.m3, 0, 4, bits.bits());
    }
    if types.contains(RoadTypes::ROAD) {
        sb(&mut record.m5, 0, 4, bits.bits());
    }
    sb(&mut record.m5, 6, 2, RoadTileType::Normal.raw());
    sb(&mut ext.m7, 6, 2, types.bits());
    set_road_owner(grid, tile, RoadType::Tram, tram);
}

/// Make a level crossing; the tile owner is the rail owner
pub fn make_road_crossing(
    grid: &mut Grid,
    tile: TileIndex,
    road: Owner,
    tram: Owner,
    rail: Owner,
    road_axis: Axis,
    rail_type: RailType,
    types: RoadTypes,
    town: TownId,
) {
    stamp(grid, tile, TileType::Road);
    grid.set_tile_owner(tile, rail);
    let (record, ext) = grid.records_mut(tile);
    record.m2 = town;
    sb(&mut record.m3, 0, 4, rail_type.0);
    record.m5 = (RoadTileType::Crossing.raw() << 6) | road_axis.raw();
    sb(&mut ext.m7, 6, 2, types.bits());
    sb(&mut ext.m7, 0, 5, road.0);
    set_road_owner(grid, tile, RoadType::Tram, tram);
}

/// Make a road depot whose entrance faces `dir`
pub fn make_road_depot(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    depot: DepotId,
    dir: DiagDirection,
    rt: RoadType,
) {
    stamp(grid, tile, TileType::Road);
    grid.set_tile_owner(tile, owner);
    let (record, ext) = grid.records_mut(tile);
    record.m2 = depot;
    record.m5 = (RoadTileType::Depot.raw() << 6) | dir.raw();
    sb(&mut ext.m7, 6, 2, rt.types().bits());
    sb(&mut ext.m7, 0, 5, owner.0);
    set_road_owner(grid, tile, RoadType::Tram, owner);
}
