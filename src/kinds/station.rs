//! Station tiles: rail stations, waypoints, road stops, airports, docks,
//! buoys and oil rigs
//!
//! | field | bits |
//! |---|---|
//! | station index | m2 |
//! | station type | m6 3..5 |
//! | graphics index | m5 |
//! | rail reservation | m6 2 |
//! | rail type | m3 0..3 |
//! | random bits | m3 4..7 |
//! | custom spec index (rail) | m4 |
//! | water class | m1 5..6 |
//!
//! Road stops share the road type and owner fields of road tiles, see
//! [`crate::kinds::road`].

use crate::kinds::water::{self, WaterClass};
use crate::kinds::{StationId, expect_type, rail, road, stamp};
use crate::map::direction::{Axis, DiagDirection};
use crate::map::geometry::{TileIndex, TileIndexDiffC};
use crate::map::grid::Grid;
use crate::tile::bits::{assign_bit, gb, has_bit, sb};
use crate::tile::owner::Owner;
use crate::tile::record::TileType;
use crate::transport::RailType;
use crate::transport::road::{RoadType, RoadTypes};
use crate::transport::track::{Track, TrackBits};

/// Graphics index of the first drive-through road stop
pub const GFX_TRUCK_BUS_DRIVETHROUGH_OFFSET: u8 = 4;
/// Graphics index of the first water half of a dock
pub const GFX_DOCK_BASE_WATER_PART: u8 = 4;

raw_enum! {
    /// What a station tile is part of
    pub enum StationType {
        /// Rail station platform
        Rail = 0,
        /// Airport
        Airport = 1,
        /// Lorry stop
        Truck = 2,
        /// Bus stop
        Bus = 3,
        /// Oil rig
        Oilrig = 4,
        /// Ship dock
        Dock = 5,
        /// Buoy
        Buoy = 6,
        /// Rail waypoint
        Waypoint = 7,
    }
}

raw_enum! {
    /// Kind of road stop
    pub enum RoadStopType {
        /// Stop for buses
        Bus = 0,
        /// Stop for lorries
        Truck = 1,
    }
}

/// Station the tile belongs to
pub fn station_index(grid: &Grid, tile: TileIndex) -> StationId {
    expect_type(grid, tile, TileType::Station);
    grid.record(tile).m2
}

/// What the station tile is part of
pub fn station_type(grid: &Grid, tile: TileIndex) -> StationType {
    expect_type(grid, tile, TileType::Station);
    StationType::decode(gb(grid.ext(tile).m6, 3, 3))
}

/// Kind of road stop on a bus or lorry stop tile
pub fn road_stop_type(grid: &Grid, tile: TileIndex) -> RoadStopType {
    match station_type(grid, tile) {
        StationType::Truck => RoadStopType::Truck,
        StationType::Bus => RoadStopType::Bus,
        other => panic!("tile {tile} is a {other:?} station, not a road stop"),
    }
}

/// Graphics index of the station tile
pub fn station_gfx(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::Station);
    grid.record(tile).m5
}

/// Set the graphics index of the station tile
pub fn set_station_gfx(grid: &mut Grid, tile: TileIndex, gfx: u8) {
    expect_type(grid, tile, TileType::Station);
    grid.record_mut(tile).m5 = gfx;
}

/// Whether a station tile is a rail platform
pub fn is_rail_station(grid: &Grid, tile: TileIndex) -> bool {
    station_type(grid, tile) == StationType::Rail
}

/// Whether a tile is a rail platform; any other kind answers false
pub fn is_rail_station_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Station) && is_rail_station(grid, tile)
}

/// Whether a station tile is a rail waypoint
pub fn is_rail_waypoint(grid: &Grid, tile: TileIndex) -> bool {
    station_type(grid, tile) == StationType::Waypoint
}

/// Whether a tile is a rail waypoint; any other kind answers false
pub fn is_rail_waypoint_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Station) && is_rail_waypoint(grid, tile)
}

/// Whether a station tile carries rail: a platform or a waypoint
pub fn has_station_rail(grid: &Grid, tile: TileIndex) -> bool {
    matches!(
        station_type(grid, tile),
        StationType::Rail | StationType::Waypoint
    )
}

/// Whether a tile is a station tile carrying rail; any other kind answers false
pub fn has_station_tile_rail(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Station) && has_station_rail(grid, tile)
}

/// Whether a station tile is part of an airport
pub fn is_airport(grid: &Grid, tile: TileIndex) -> bool {
    station_type(grid, tile) == StationType::Airport
}

/// Whether a tile is part of an airport; any other kind answers false
pub fn is_airport_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Station) && is_airport(grid, tile)
}

/// Whether a station tile is a lorry stop
pub fn is_truck_stop(grid: &Grid, tile: TileIndex) -> bool {
    station_type(grid, tile) == StationType::Truck
}

/// Whether a station tile is a bus stop
pub fn is_bus_stop(grid: &Grid, tile: TileIndex) -> bool {
    station_type(grid, tile) == StationType::Bus
}

/// Whether a station tile is a bus or lorry stop
pub fn is_road_stop(grid: &Grid, tile: TileIndex) -> bool {
    matches!(station_type(grid, tile), StationType::Truck | StationType::Bus)
}

/// Whether a tile is a road stop; any other kind answers false
pub fn is_road_stop_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Station) && is_road_stop(grid, tile)
}

/// Whether a tile is a road stop entered from one side only
pub fn is_standard_road_stop_tile(grid: &Grid, tile: TileIndex) -> bool {
    is_road_stop_tile(grid, tile) && station_gfx(grid, tile) < GFX_TRUCK_BUS_DRIVETHROUGH_OFFSET
}

/// Whether a tile is a drive-through road stop
pub fn is_drive_through_stop_tile(grid: &Grid, tile: TileIndex) -> bool {
    is_road_stop_tile(grid, tile) && station_gfx(grid, tile) >= GFX_TRUCK_BUS_DRIVETHROUGH_OFFSET
}

/// Entrance direction of a road stop
///
/// A drive-through stop reports [`DiagDirection::NE`] along the X axis and
/// [`DiagDirection::SE`] along the Y axis.
pub fn road_stop_dir(grid: &Grid, tile: TileIndex) -> DiagDirection {
    assert!(is_road_stop_tile(grid, tile), "tile {tile} is not a road stop");
    let gfx = station_gfx(grid, tile);
    if gfx < GFX_TRUCK_BUS_DRIVETHROUGH_OFFSET {
        DiagDirection::decode(gfx)
    } else {
        DiagDirection::decode(gfx - GFX_TRUCK_BUS_DRIVETHROUGH_OFFSET)
    }
}

/// Whether a station tile is an oil rig
pub fn is_oil_rig(grid: &Grid, tile: TileIndex) -> bool {
    station_type(grid, tile) == StationType::Oilrig
}

/// Whether a station tile is part of a dock
pub fn is_dock(grid: &Grid, tile: TileIndex) -> bool {
    station_type(grid, tile) == StationType::Dock
}

/// Whether a tile is part of a dock; any other kind answers false
pub fn is_dock_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Station) && is_dock(grid, tile)
}

/// Whether a station tile is a buoy
pub fn is_buoy(grid: &Grid, tile: TileIndex) -> bool {
    station_type(grid, tile) == StationType::Buoy
}

/// Whether a tile is a buoy; any other kind answers false
pub fn is_buoy_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Station) && is_buoy(grid, tile)
}

/// Axis of the rails on a platform or waypoint
pub fn rail_station_axis(grid: &Grid, tile: TileIndex) -> Axis {
    assert!(has_station_rail(grid, tile), "station tile {tile} has no rail");
    if has_bit(station_gfx(grid, tile), 0) {
        Axis::Y
    } else {
        Axis::X
    }
}

/// Track of the rails on a platform or waypoint
pub fn rail_station_track(grid: &Grid, tile: TileIndex) -> Track {
    Track::from_axis(rail_station_axis(grid, tile))
}

/// Track of the rails on a platform or waypoint, as a set
pub fn rail_station_track_bits(grid: &Grid, tile: TileIndex) -> TrackBits {
    rail_station_track(grid, tile).bits()
}

/// Whether the rails of a platform or waypoint are reserved
pub fn has_station_reservation(grid: &Grid, tile: TileIndex) -> bool {
    assert!(has_station_rail(grid, tile), "station tile {tile} has no rail");
    has_bit(grid.ext(tile).m6, 2)
}

/// Reserve or release the rails of a platform or waypoint
pub fn set_rail_station_reservation(grid: &mut Grid, tile: TileIndex, reserved: bool) {
    assert!(has_station_rail(grid, tile), "station tile {tile} has no rail");
    assign_bit(&mut grid.ext_mut(tile).m6, 2, reserved);
}

/// Reserved rails of a platform or waypoint
pub fn station_reservation_track_bits(grid: &Grid, tile: TileIndex) -> TrackBits {
    if has_station_reservation(grid, tile) {
        rail_station_track_bits(grid, tile)
    } else {
        TrackBits::empty()
    }
}

/// Direction the land half of a dock faces the water
pub fn dock_direction(grid: &Grid, tile: TileIndex) -> DiagDirection {
    let gfx = station_gfx(grid, tile);
    assert!(
        is_dock(grid, tile) && gfx < GFX_DOCK_BASE_WATER_PART,
        "tile {tile} is not the land half of a dock"
    );
    DiagDirection::decode(gfx)
}

const BUOY_OFFSET: TileIndexDiffC = TileIndexDiffC::new(0, 0);
const OILRIG_OFFSET: TileIndexDiffC = TileIndexDiffC::new(2, 0);
const DOCK_OFFSET: [TileIndexDiffC; 4] = [
    TileIndexDiffC::new(-2, 0),
    TileIndexDiffC::new(0, 2),
    TileIndexDiffC::new(2, 0),
    TileIndexDiffC::new(0, -2),
];

/// Offset from a buoy, oil rig or dock land tile to the tile ships head for
pub fn dock_offset(grid: &Grid, tile: TileIndex) -> TileIndexDiffC {
    match station_type(grid, tile) {
        StationType::Buoy => BUOY_OFFSET,
        StationType::Oilrig => OILRIG_OFFSET,
        StationType::Dock => DOCK_OFFSET[dock_direction(grid, tile) as usize],
        other => panic!("tile {tile} is a {other:?} station, ships do not dock there"),
    }
}

/// Whether a platform or waypoint uses a custom station spec
pub fn is_custom_station_spec_index(grid: &Grid, tile: TileIndex) -> bool {
    custom_station_spec_index(grid, tile) != 0
}

/// Custom station spec of a platform or waypoint; 0 is the default spec
pub fn custom_station_spec_index(grid: &Grid, tile: TileIndex) -> u8 {
    assert!(has_station_tile_rail(grid, tile), "tile {tile} is not a rail station");
    grid.record(tile).m4
}

/// Set the custom station spec of a platform or waypoint
pub fn set_custom_station_spec_index(grid: &mut Grid, tile: TileIndex, spec: u8) {
    assert!(has_station_tile_rail(grid, tile), "tile {tile} is not a rail station");
    grid.record_mut(tile).m4 = spec;
}

/// Random bits of a station tile
pub fn station_tile_random_bits(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::Station);
    gb(grid.record(tile).m3, 4, 4)
}

/// Set the random bits of a station tile
pub fn set_station_tile_random_bits(grid: &mut Grid, tile: TileIndex, random_bits: u8) {
    expect_type(grid, tile, TileType::Station);
    sb(&mut grid.record_mut(tile).m3, 4, 4, random_bits);
}

/// Make a station tile of any type
pub fn make_station(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    station: StationId,
    ty: StationType,
    gfx: u8,
    class: WaterClass,
) {
    stamp(grid, tile, TileType::Station);
    grid.set_tile_owner(tile, owner);
    water::set_water_class(grid, tile, class);
    let (record, ext) = grid.records_mut(tile);
    record.m2 = station;
    record.m5 = gfx;
    sb(&mut ext.m6, 3, 3, ty.raw());
}

// Graphics index of a rail piece; the axis lives in bit 0
fn rail_gfx(tile: TileIndex, axis: Axis, section: u8) -> u8 {
    assert!(
        section.is_multiple_of(2),
        "rail station section {section} of tile {tile} would hide the axis bit"
    );
    section | axis.raw()
}

/// Make a rail platform tile
///
/// `section` is the graphics index of the piece as laid out along the X
/// axis; the axis is stored in its lowest bit.
///
/// # Panics
///
/// Panics when `section` is odd
pub fn make_rail_station(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    station: StationId,
    axis: Axis,
    section: u8,
    rail: RailType,
) {
    let gfx = rail_gfx(tile, axis, section);
    make_station(
        grid,
        tile,
        owner,
        station,
        StationType::Rail,
        gfx,
        WaterClass::Invalid,
    );
    rail::set_rail_type(grid, tile, rail);
}

/// Make a rail waypoint tile
///
/// # Panics
///
/// Panics when `section` is odd, see [`make_rail_station`]
pub fn make_rail_waypoint(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    station: StationId,
    axis: Axis,
    section: u8,
    rail: RailType,
) {
    let gfx = rail_gfx(tile, axis, section);
    make_station(
        grid,
        tile,
        owner,
        station,
        StationType::Waypoint,
        gfx,
        WaterClass::Invalid,
    );
    rail::set_rail_type(grid, tile, rail);
}

fn road_stop_station_type(stop: RoadStopType) -> StationType {
    match stop {
        RoadStopType::Bus => StationType::Bus,
        RoadStopType::Truck => StationType::Truck,
    }
}

/// Make a road stop entered from `dir` only; the station owner owns the road
pub fn make_road_stop(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    station: StationId,
    stop: RoadStopType,
    types: RoadTypes,
    dir: DiagDirection,
) {
    make_station(
        grid,
        tile,
        owner,
        station,
        road_stop_station_type(stop),
        dir.raw(),
        WaterClass::Invalid,
    );
    road::set_road_types(grid, tile, types);
    road::set_road_owner(grid, tile, RoadType::Road, owner);
    road::set_road_owner(grid, tile, RoadType::Tram, owner);
}

/// Make a drive-through road stop along `axis` on existing road
pub fn make_drive_through_road_stop(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    road_owner: Owner,
    tram_owner: Owner,
    station: StationId,
    stop: RoadStopType,
    types: RoadTypes,
    axis: Axis,
) {
    make_station(
        grid,
        tile,
        owner,
        station,
        road_stop_station_type(stop),
        GFX_TRUCK_BUS_DRIVETHROUGH_OFFSET + axis.raw(),
        WaterClass::Invalid,
    );
    road::set_road_types(grid, tile, types);
    road::set_road_owner(grid, tile, RoadType::Road, road_owner);
    road::set_road_owner(grid, tile, RoadType::Tram, tram_owner);
}

/// Make an airport tile
pub fn make_airport(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    station: StationId,
    section: u8,
    class: WaterClass,
) {
    make_station(grid, tile, owner, station, StationType::Airport, section, class);
}

/// Make a buoy, keeping the owner of the water it is placed on
pub fn make_buoy(grid: &mut Grid, tile: TileIndex, station: StationId, class: WaterClass) {
    let owner = grid.tile_owner(tile);
    make_station(grid, tile, owner, station, StationType::Buoy, 0, class);
}

/// Make a two-tile dock: the land half on `tile`, the water half one step
/// towards `dir`
pub fn make_dock(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    station: StationId,
    dir: DiagDirection,
    class: WaterClass,
) {
    make_station(
        grid,
        tile,
        owner,
        station,
        StationType::Dock,
        dir.raw(),
        WaterClass::Invalid,
    );
    let water_half = grid.geometry().tile_add_by_diag_dir(tile, dir);
    make_station(
        grid,
        water_half,
        owner,
        station,
        StationType::Dock,
        GFX_DOCK_BASE_WATER_PART + dir.axis().raw(),
        class,
    );
}

/// Make an oil rig tile, owned by nobody
pub fn make_oilrig(grid: &mut Grid, tile: TileIndex, station: StationId, class: WaterClass) {
    make_station(grid, tile, Owner::NONE, station, StationType::Oilrig, 0, class);
}
