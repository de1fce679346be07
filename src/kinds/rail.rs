//! Rail tiles: plain track, track with signals, and rail depots
//!
//! | field | bits |
//! |---|---|
//! | rail tile type | m5 6..7 |
//! | track bits (plain) | m5 0..5 |
//! | depot direction, reservation | m5 0..1, m5 4 |
//! | depot index | m2 |
//! | rail type | m3 0..3 |
//! | reserved track + 1, second track reserved | m2 8..10, m2 11 |
//! | signal type, variant (upper/left pair) | m2 0..2, m2 3 |
//! | signal type, variant (lower/right pair) | m2 4..6, m2 7 |
//! | present signals | m3 4..7 |
//! | signal states | m4 4..7 |
//! | ground | m4 0..3 |

use crate::kinds::{DepotId, expect_type, road, station, stamp, tunnel_bridge};
use crate::map::direction::DiagDirection;
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::bits::{assign_bit, gb, has_bit, sb};
use crate::tile::owner::Owner;
use crate::tile::record::TileType;
use crate::transport::signal::{SignalState, SignalType, SignalVariant};
use crate::transport::track::{Track, TrackBits, Trackdir};
use crate::transport::{RailType, TransportType};

raw_enum! {
    /// Sub-type of a rail tile
    pub enum RailTileType {
        /// Track without signals
        Normal = 0,
        /// Track with signals
        Signals = 1,
        /// Depot with one entrance
        Depot = 3,
    }
}

raw_enum! {
    /// Ground drawn around the track
    pub enum RailGroundType {
        /// Bare dirt
        Barren = 0,
        /// Grass
        Grass = 1,
        /// Grass, fence on the north-west edge
        FenceNw = 2,
        /// Grass, fence on the south-east edge
        FenceSe = 3,
        /// Grass, fences on the north-west and south-east edges
        FenceSenw = 4,
        /// Grass, fence on the north-east edge
        FenceNe = 5,
        /// Grass, fence on the south-west edge
        FenceSw = 6,
        /// Grass, fences on the north-east and south-west edges
        FenceNesw = 7,
        /// Grass, fence on the east side
        FenceVert1 = 8,
        /// Grass, fence on the west side
        FenceVert2 = 9,
        /// Grass, fence on the south side
        FenceHoriz1 = 10,
        /// Grass, fence on the north side
        FenceHoriz2 = 11,
        /// Snow or desert sand
        IceDesert = 12,
        /// Shore or water on the free half of the tile
        Water = 13,
        /// Snow only on the upper part of a slope
        HalfSnow = 14,
    }
}

/// Sub-type of a rail tile
pub fn rail_tile_type(grid: &Grid, tile: TileIndex) -> RailTileType {
    expect_type(grid, tile, TileType::Railway);
    RailTileType::decode(gb(grid.record(tile).m5, 6, 2))
}

/// Whether a rail tile carries plain track, with or without signals
pub fn is_plain_rail(grid: &Grid, tile: TileIndex) -> bool {
    matches!(
        rail_tile_type(grid, tile),
        RailTileType::Normal | RailTileType::Signals
    )
}

/// Whether a tile is rail with plain track; any other kind answers false
pub fn is_plain_rail_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Railway) && is_plain_rail(grid, tile)
}

#[track_caller]
fn expect_plain_rail(grid: &Grid, tile: TileIndex) {
    assert!(is_plain_rail_tile(grid, tile), "tile {tile} is not plain rail");
}

/// Whether a rail tile has signals
pub fn has_signals(grid: &Grid, tile: TileIndex) -> bool {
    rail_tile_type(grid, tile) == RailTileType::Signals
}

/// Add or remove the signal sub-type of plain rail
pub fn set_has_signals(grid: &mut Grid, tile: TileIndex, signals: bool) {
    expect_plain_rail(grid, tile);
    assign_bit(&mut grid.record_mut(tile).m5, 6, signals);
}

/// Whether a rail tile is a depot
pub fn is_rail_depot(grid: &Grid, tile: TileIndex) -> bool {
    rail_tile_type(grid, tile) == RailTileType::Depot
}

/// Whether a tile is a rail depot; any other kind answers false
pub fn is_rail_depot_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Railway) && is_rail_depot(grid, tile)
}

fn carries_rail_type(grid: &Grid, tile: TileIndex) -> bool {
    match grid.tile_type(tile) {
        TileType::Railway => true,
        TileType::Road => road::is_level_crossing(grid, tile),
        TileType::Station => station::has_station_rail(grid, tile),
        TileType::TunnelBridge => {
            tunnel_bridge::transport_type(grid, tile) == TransportType::Rail
        }
        _ => false,
    }
}

/// Rail type of rail, a level crossing, a rail station or a rail tunnel/bridge
pub fn rail_type(grid: &Grid, tile: TileIndex) -> RailType {
    assert!(carries_rail_type(grid, tile), "tile {tile} carries no rail");
    RailType(gb(grid.record(tile).m3, 0, 4))
}

/// Set the rail type of any tile carrying rail
pub fn set_rail_type(grid: &mut Grid, tile: TileIndex, rail: RailType) {
    assert!(carries_rail_type(grid, tile), "tile {tile} carries no rail");
    sb(&mut grid.record_mut(tile).m3, 0, 4, rail.0);
}

/// Track pieces on plain rail
pub fn track_bits(grid: &Grid, tile: TileIndex) -> TrackBits {
    expect_plain_rail(grid, tile);
    TrackBits::from_bits_retain(gb(grid.record(tile).m5, 0, 6))
}

/// Set the track pieces on plain rail
pub fn set_track_bits(grid: &mut Grid, tile: TileIndex, bits: TrackBits) {
    expect_plain_rail(grid, tile);
    sb(&mut grid.record_mut(tile).m5, 0, 6, bits.bits());
}

/// Whether plain rail has the given track
pub fn has_track(grid: &Grid, tile: TileIndex, track: Track) -> bool {
    track_bits(grid, tile).contains(track.bits())
}

/// Direction the depot entrance faces
pub fn rail_depot_direction(grid: &Grid, tile: TileIndex) -> DiagDirection {
    assert!(is_rail_depot_tile(grid, tile), "tile {tile} is not a rail depot");
    DiagDirection::decode(gb(grid.record(tile).m5, 0, 2))
}

/// Track running through a rail depot
pub fn rail_depot_track(grid: &Grid, tile: TileIndex) -> Track {
    Track::from_diag_dir(rail_depot_direction(grid, tile))
}

/// Index of a rail depot in the depot pool
pub fn rail_depot_index(grid: &Grid, tile: TileIndex) -> DepotId {
    assert!(is_rail_depot_tile(grid, tile), "tile {tile} is not a rail depot");
    grid.record(tile).m2
}

/// Reserved tracks on plain rail
pub fn rail_reservation_track_bits(grid: &Grid, tile: TileIndex) -> TrackBits {
    expect_plain_rail(grid, tile);
    let m2 = grid.record(tile).m2;
    // Stored as track + 1 so that 0 means no reservation
    let stored = gb(m2, 8, 3) as u8;
    if stored == 0 {
        return TrackBits::empty();
    }
    let track = Track::decode(stored - 1);
    if has_bit(m2, 11) {
        track.bits() | track.opposite().bits()
    } else {
        track.bits()
    }
}

/// Replace the reservation of plain rail
///
/// # Panics
///
/// Panics when the reserved tracks would overlap
pub fn set_track_reservation(grid: &mut Grid, tile: TileIndex, bits: TrackBits) {
    expect_plain_rail(grid, tile);
    assert!(!bits.overlap(), "overlapping reservation {bits:?} on tile {tile}");
    let first = bits.first_track();
    let rest = first.map_or(TrackBits::empty(), |track| bits - track.bits());
    let m2 = &mut grid.record_mut(tile).m2;
    sb(m2, 8, 3, first.map_or(0, |track| u16::from(track.raw()) + 1));
    sb(m2, 11, 1, u16::from(!rest.is_empty()));
}

/// Reserve one track; false if it is taken or would cross another reservation
///
/// # Panics
///
/// Panics when the tile does not have the track
pub fn try_reserve_track(grid: &mut Grid, tile: TileIndex, track: Track) -> bool {
    assert!(has_track(grid, tile, track), "tile {tile} has no track {track:?}");
    let reserved = rail_reservation_track_bits(grid, tile);
    if reserved.contains(track.bits()) {
        return false;
    }
    let wanted = reserved | track.bits();
    if wanted.overlap() {
        return false;
    }
    set_track_reservation(grid, tile, wanted);
    true
}

/// Release the reservation of one track
pub fn unreserve_track(grid: &mut Grid, tile: TileIndex, track: Track) {
    assert!(has_track(grid, tile, track), "tile {tile} has no track {track:?}");
    let reserved = rail_reservation_track_bits(grid, tile) - track.bits();
    set_track_reservation(grid, tile, reserved);
}

/// Whether a rail depot is reserved
pub fn has_depot_reservation(grid: &Grid, tile: TileIndex) -> bool {
    assert!(is_rail_depot_tile(grid, tile), "tile {tile} is not a rail depot");
    has_bit(grid.record(tile).m5, 4)
}

/// Reserve or release a rail depot
pub fn set_depot_reservation(grid: &mut Grid, tile: TileIndex, reserved: bool) {
    assert!(is_rail_depot_tile(grid, tile), "tile {tile} is not a rail depot");
    assign_bit(&mut grid.record_mut(tile).m5, 4, reserved);
}

/// Reserved track of a rail depot
pub fn depot_reservation_track_bits(grid: &Grid, tile: TileIndex) -> TrackBits {
    if has_depot_reservation(grid, tile) {
        rail_depot_track(grid, tile).bits()
    } else {
        TrackBits::empty()
    }
}

#[track_caller]
fn expect_signals(grid: &Grid, tile: TileIndex) {
    assert!(
        grid.is_tile_type(tile, TileType::Railway) && has_signals(grid, tile),
        "tile {tile} has no signals"
    );
}

/// Type of the signals on a track; both tracks of a pair share it
pub fn signal_type(grid: &Grid, tile: TileIndex, track: Track) -> SignalType {
    expect_signals(grid, tile);
    let pos = if track.is_lower_or_right() { 4 } else { 0 };
    SignalType::decode(gb(grid.record(tile).m2, pos, 3) as u8)
}

/// Set the signal type of a track pair, or of both pairs when `track` is `None`
pub fn set_signal_type(grid: &mut Grid, tile: TileIndex, track: Option<Track>, ty: SignalType) {
    expect_signals(grid, tile);
    let m2 = &mut grid.record_mut(tile).m2;
    let raw = u16::from(ty.raw());
    match track {
        Some(track) if track.is_lower_or_right() => sb(m2, 4, 3, raw),
        Some(_) => sb(m2, 0, 3, raw),
        None => {
            sb(m2, 0, 3, raw);
            sb(m2, 4, 3, raw);
        }
    }
}

/// Whether the signal on a track is a pre-signal entry
pub fn is_presignal_entry(grid: &Grid, tile: TileIndex, track: Track) -> bool {
    signal_type(grid, tile, track).is_presignal_entry()
}

/// Whether the signal on a track is a pre-signal exit
pub fn is_presignal_exit(grid: &Grid, tile: TileIndex, track: Track) -> bool {
    signal_type(grid, tile, track).is_presignal_exit()
}

/// Whether the signal on a track can only be passed from the front
pub fn is_oneway_signal(grid: &Grid, tile: TileIndex, track: Track) -> bool {
    signal_type(grid, tile, track).is_oneway()
}

/// Rotate which sides of a track carry a signal
///
/// Cycles both, one way, the other way; path signals skip the two-sided
/// state.
///
/// # Panics
///
/// Panics when the track has no signal
pub fn cycle_signal_side(grid: &mut Grid, tile: TileIndex, track: Track) {
    let pbs = signal_type(grid, tile, track).is_pbs();
    let pos = if track.is_lower_or_right() { 4 } else { 6 };
    let m3 = &mut grid.record_mut(tile).m3;
    let sides = gb(*m3, pos, 2);
    assert!(sides != 0, "no signal on track {track:?} of tile {tile}");
    let next = match sides - 1 {
        0 if pbs => 2,
        0 => 3,
        n => n,
    };
    sb(m3, pos, 2, next);
}

/// Look of the signals on a track
pub fn signal_variant(grid: &Grid, tile: TileIndex, track: Track) -> SignalVariant {
    expect_signals(grid, tile);
    let pos = if track.is_lower_or_right() { 7 } else { 3 };
    SignalVariant::decode(gb(grid.record(tile).m2, pos, 1) as u8)
}

/// Set the look of a track pair's signals, or of both pairs when `track` is `None`
pub fn set_signal_variant(
    grid: &mut Grid,
    tile: TileIndex,
    track: Option<Track>,
    variant: SignalVariant,
) {
    expect_signals(grid, tile);
    let m2 = &mut grid.record_mut(tile).m2;
    let semaphore = variant == SignalVariant::Semaphore;
    match track {
        Some(track) if track.is_lower_or_right() => assign_bit(m2, 7, semaphore),
        Some(_) => assign_bit(m2, 3, semaphore),
        None => {
            assign_bit(m2, 3, semaphore);
            assign_bit(m2, 7, semaphore);
        }
    }
}

/// Green/red state of all four signal slots, one bit each
pub fn signal_states(grid: &Grid, tile: TileIndex) -> u8 {
    expect_signals(grid, tile);
    gb(grid.record(tile).m4, 4, 4)
}

/// Set the state of all four signal slots
pub fn set_signal_states(grid: &mut Grid, tile: TileIndex, states: u8) {
    expect_signals(grid, tile);
    sb(&mut grid.record_mut(tile).m4, 4, 4, states);
}

/// State of one signal slot
pub fn single_signal_state(grid: &Grid, tile: TileIndex, signal_bit: u8) -> SignalState {
    if has_bit(signal_states(grid, tile), signal_bit) {
        SignalState::Green
    } else {
        SignalState::Red
    }
}

/// Which of the four signal slots hold a signal
pub fn present_signals(grid: &Grid, tile: TileIndex) -> u8 {
    expect_signals(grid, tile);
    gb(grid.record(tile).m3, 4, 4)
}

/// Set which of the four signal slots hold a signal
pub fn set_present_signals(grid: &mut Grid, tile: TileIndex, signals: u8) {
    expect_signals(grid, tile);
    sb(&mut grid.record_mut(tile).m3, 4, 4, signals);
}

/// Whether a signal slot holds a signal
pub fn is_signal_present(grid: &Grid, tile: TileIndex, signal_bit: u8) -> bool {
    has_bit(present_signals(grid, tile), signal_bit)
}

/// Whether any signal stands on a track of a rail tile
pub fn has_signal_on_track(grid: &Grid, tile: TileIndex, track: Track) -> bool {
    has_signals(grid, tile) && present_signals(grid, tile) & track.signal_bits() != 0
}

/// Whether a signal faces trains running along `trackdir`
pub fn has_signal_on_trackdir(grid: &Grid, tile: TileIndex, trackdir: Trackdir) -> bool {
    has_signals(grid, tile) && present_signals(grid, tile) & trackdir.signal_along() != 0
}

/// State of the signal facing trains running along `trackdir`
///
/// # Panics
///
/// Panics when the track has no signal
pub fn signal_state_by_trackdir(grid: &Grid, tile: TileIndex, trackdir: Trackdir) -> SignalState {
    assert!(
        has_signal_on_track(grid, tile, trackdir.track()),
        "no signal on {trackdir:?} of tile {tile}"
    );
    if signal_states(grid, tile) & trackdir.signal_along() != 0 {
        SignalState::Green
    } else {
        SignalState::Red
    }
}

/// Set the state of the signal facing trains running along `trackdir`
pub fn set_signal_state_by_trackdir(
    grid: &mut Grid,
    tile: TileIndex,
    trackdir: Trackdir,
    state: SignalState,
) {
    let states = signal_states(grid, tile);
    let along = trackdir.signal_along();
    let states = match state {
        SignalState::Green => states | along,
        SignalState::Red => states & !along,
    };
    set_signal_states(grid, tile, states);
}

/// Whether a path signal faces trains running along `trackdir`; any tile kind
pub fn has_pbs_signal_on_trackdir(grid: &Grid, tile: TileIndex, trackdir: Trackdir) -> bool {
    grid.is_tile_type(tile, TileType::Railway)
        && has_signal_on_trackdir(grid, tile, trackdir)
        && signal_type(grid, tile, trackdir.track()).is_pbs()
}

/// Whether a one-way signal stops trains entering along `trackdir`; any tile kind
pub fn has_oneway_signal_blocking_trackdir(
    grid: &Grid,
    tile: TileIndex,
    trackdir: Trackdir,
) -> bool {
    grid.is_tile_type(tile, TileType::Railway)
        && has_signal_on_trackdir(grid, tile, trackdir.reverse())
        && !has_signal_on_trackdir(grid, tile, trackdir)
        && is_oneway_signal(grid, tile, trackdir.track())
}

/// Ground drawn around the track
pub fn rail_ground_type(grid: &Grid, tile: TileIndex) -> RailGroundType {
    expect_type(grid, tile, TileType::Railway);
    RailGroundType::decode(gb(grid.record(tile).m4, 0, 4))
}

/// Set the ground drawn around the track
pub fn set_rail_ground_type(grid: &mut Grid, tile: TileIndex, ground: RailGroundType) {
    expect_type(grid, tile, TileType::Railway);
    sb(&mut grid.record_mut(tile).m4, 0, 4, ground.raw());
}

/// Whether the track lies in snow or desert
pub fn is_snow_rail_ground(grid: &Grid, tile: TileIndex) -> bool {
    rail_ground_type(grid, tile) == RailGroundType::IceDesert
}

/// Make plain rail with the given tracks and no signals
pub fn make_rail_normal(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    bits: TrackBits,
    rail: RailType,
) {
    stamp(grid, tile, TileType::Railway);
    grid.set_tile_owner(tile, owner);
    let record = grid.record_mut(tile);
    sb(&mut record.m3, 0, 4, rail.0);
    sb(&mut record.m5, 0, 6, bits.bits());
    sb(&mut record.m5, 6, 2, RailTileType::Normal.raw());
}

/// Make a rail depot whose entrance faces `dir`
pub fn make_rail_depot(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    depot: DepotId,
    dir: DiagDirection,
    rail: RailType,
) {
    stamp(grid, tile, TileType::Railway);
    grid.set_tile_owner(tile, owner);
    let record = grid.record_mut(tile);
    record.m2 = depot;
    sb(&mut record.m3, 0, 4, rail.0);
    record.m5 = (RailTileType::Depot.raw() << 6) | dir.raw();
}
