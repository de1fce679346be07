//! Water tiles: sea, canals, rivers, coast, locks and ship depots
//!
//! | field | bits |
//! |---|---|
//! | layout (0 plain, 1 lock, 8 depot) | m5 4..7 |
//! | coast flag (plain) | m5 0 |
//! | lock direction, part | m5 0..1, m5 2..3 |
//! | depot part, axis | m5 0, m5 1 |
//! | depot index | m2 |
//! | random bits | m4 |
//! | water class | m1 5..6 |
//!
//! The water class also lives on station, industry and object tiles, where
//! it records the water the structure was built on.

use crate::kinds::{DepotId, expect_type, stamp};
use crate::map::direction::{Axis, DiagDirection};
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::bits::{gb, has_bit, sb};
use crate::tile::owner::Owner;
use crate::tile::record::TileType;

const LAYOUT_NORMAL: u8 = 0x0;
const LAYOUT_LOCK: u8 = 0x1;
const LAYOUT_DEPOT: u8 = 0x8;

const fn layout_m5(layout: u8, low: u8) -> u8 {
    (layout << 4) | low
}

raw_enum! {
    /// What a water tile holds
    pub enum WaterTileType {
        /// Open water of any class
        Clear = 0,
        /// Half water, half land
        Coast = 1,
        /// One section of a lock
        Lock = 2,
        /// One half of a ship depot
        Depot = 3,
    }
}

raw_enum! {
    /// Kind of water under a tile
    pub enum WaterClass {
        /// Sea, owned by nobody
        Sea = 0,
        /// Canal built by a company
        Canal = 1,
        /// River
        River = 2,
        /// Not on water
        Invalid = 3,
    }
}

raw_enum! {
    /// Half of a two-tile ship depot
    pub enum DepotPart {
        /// Northern half
        North = 0,
        /// Southern half
        South = 1,
    }
}

raw_enum! {
    /// Section of a three-tile lock
    pub enum LockPart {
        /// Middle section, holding the gates
        Middle = 0,
        /// Lower end
        Lower = 1,
        /// Upper end
        Upper = 2,
    }
}

/// What a water tile holds
pub fn water_tile_type(grid: &Grid, tile: TileIndex) -> WaterTileType {
    expect_type(grid, tile, TileType::Water);
    let m5 = grid.record(tile).m5;
    match gb(m5, 4, 4) {
        LAYOUT_NORMAL if has_bit(m5, 0) => WaterTileType::Coast,
        LAYOUT_NORMAL => WaterTileType::Clear,
        LAYOUT_LOCK => WaterTileType::Lock,
        LAYOUT_DEPOT => WaterTileType::Depot,
        other => panic!("corrupt water layout {other} on tile {tile}"),
    }
}

/// Whether a tile kind stores a water class
pub fn has_tile_water_class(grid: &Grid, tile: TileIndex) -> bool {
    matches!(
        grid.tile_type(tile),
        TileType::Water | TileType::Station | TileType::Industry | TileType::Object
    )
}

#[track_caller]
fn expect_water_class(grid: &Grid, tile: TileIndex) {
    assert!(
        has_tile_water_class(grid, tile),
        "tile {tile} of type {:?} has no water class",
        grid.tile_type(tile)
    );
}

/// Water class of a water, station, industry or object tile
pub fn water_class(grid: &Grid, tile: TileIndex) -> WaterClass {
    expect_water_class(grid, tile);
    WaterClass::decode(gb(grid.record(tile).m1, 5, 2))
}

/// Set the water class of a water, station, industry or object tile
pub fn set_water_class(grid: &mut Grid, tile: TileIndex, class: WaterClass) {
    expect_water_class(grid, tile);
    sb(&mut grid.record_mut(tile).m1, 5, 2, class.raw());
}

/// Whether the tile was built on water
pub fn is_tile_on_water(grid: &Grid, tile: TileIndex) -> bool {
    water_class(grid, tile) != WaterClass::Invalid
}

/// Whether a water tile is open water of any class
pub fn is_water(grid: &Grid, tile: TileIndex) -> bool {
    water_tile_type(grid, tile) == WaterTileType::Clear
}

/// Whether a water tile is open sea
pub fn is_sea(grid: &Grid, tile: TileIndex) -> bool {
    is_water(grid, tile) && water_class(grid, tile) == WaterClass::Sea
}

/// Whether a water tile is an open canal
pub fn is_canal(grid: &Grid, tile: TileIndex) -> bool {
    is_water(grid, tile) && water_class(grid, tile) == WaterClass::Canal
}

/// Whether a water tile is an open river
pub fn is_river(grid: &Grid, tile: TileIndex) -> bool {
    is_water(grid, tile) && water_class(grid, tile) == WaterClass::River
}

/// Whether a tile is open water; any other kind answers false
pub fn is_water_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Water) && is_water(grid, tile)
}

/// Whether a water tile is coast
pub fn is_coast(grid: &Grid, tile: TileIndex) -> bool {
    water_tile_type(grid, tile) == WaterTileType::Coast
}

/// Whether a tile is coast; any other kind answers false
pub fn is_coast_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Water) && is_coast(grid, tile)
}

/// Whether a water tile is part of a ship depot
pub fn is_ship_depot(grid: &Grid, tile: TileIndex) -> bool {
    water_tile_type(grid, tile) == WaterTileType::Depot
}

/// Whether a tile is part of a ship depot; any other kind answers false
pub fn is_ship_depot_tile(grid: &Grid, tile: TileIndex) -> bool {
    grid.is_tile_type(tile, TileType::Water) && is_ship_depot(grid, tile)
}

#[track_caller]
fn expect_ship_depot(grid: &Grid, tile: TileIndex) {
    assert!(is_ship_depot_tile(grid, tile), "tile {tile} is not a ship depot");
}

/// Axis along which the two depot halves lie
pub fn ship_depot_axis(grid: &Grid, tile: TileIndex) -> Axis {
    expect_ship_depot(grid, tile);
    Axis::decode(gb(grid.record(tile).m5, 1, 1))
}

/// Which half of the depot this tile is
pub fn ship_depot_part(grid: &Grid, tile: TileIndex) -> DepotPart {
    expect_ship_depot(grid, tile);
    DepotPart::decode(gb(grid.record(tile).m5, 0, 1))
}

/// Direction the depot half opens towards
pub fn ship_depot_direction(grid: &Grid, tile: TileIndex) -> DiagDirection {
    DiagDirection::from_axis(
        ship_depot_axis(grid, tile),
        ship_depot_part(grid, tile) == DepotPart::South,
    )
}

/// The other half of a ship depot
pub fn other_ship_depot_tile(grid: &Grid, tile: TileIndex) -> TileIndex {
    let geometry = grid.geometry();
    let step = match ship_depot_axis(grid, tile) {
        Axis::X => geometry.tile_diff_xy(1, 0),
        Axis::Y => geometry.tile_diff_xy(0, 1),
    };
    match ship_depot_part(grid, tile) {
        DepotPart::North => tile + step,
        DepotPart::South => tile - step,
    }
}

/// Northern half of a ship depot
pub fn ship_depot_north_tile(grid: &Grid, tile: TileIndex) -> TileIndex {
    let other = other_ship_depot_tile(grid, tile);
    tile.min(other)
}

/// Whether a water tile is part of a lock
pub fn is_lock(grid: &Grid, tile: TileIndex) -> bool {
    water_tile_type(grid, tile) == WaterTileType::Lock
}

#[track_caller]
fn expect_lock(grid: &Grid, tile: TileIndex) {
    assert!(is_lock(grid, tile), "tile {tile} is not a lock");
}

/// Direction of travel from the lower to the upper end of a lock
pub fn lock_direction(grid: &Grid, tile: TileIndex) -> DiagDirection {
    expect_lock(grid, tile);
    DiagDirection::decode(gb(grid.record(tile).m5, 0, 2))
}

/// Which section of a lock this tile is
pub fn lock_part(grid: &Grid, tile: TileIndex) -> LockPart {
    expect_lock(grid, tile);
    LockPart::decode(gb(grid.record(tile).m5, 2, 2))
}

/// Random bits of a water tile
pub fn water_tile_random_bits(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::Water);
    grid.record(tile).m4
}

/// Whether the ground of a tile is water: open water, a lock, a ship
/// depot, or a structure built on water. Coast counts as land.
pub fn has_tile_water_ground(grid: &Grid, tile: TileIndex) -> bool {
    has_tile_water_class(grid, tile) && is_tile_on_water(grid, tile) && !is_coast_tile(grid, tile)
}

fn make_water_layout(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    class: WaterClass,
    m5: u8,
) {
    stamp(grid, tile, TileType::Water);
    grid.set_tile_owner(tile, owner);
    set_water_class(grid, tile, class);
    grid.record_mut(tile).m5 = m5;
}

/// Make a coast tile
pub fn make_shore(grid: &mut Grid, tile: TileIndex) {
    make_water_layout(
        grid,
        tile,
        Owner::WATER,
        WaterClass::Sea,
        layout_m5(LAYOUT_NORMAL, 1),
    );
}

/// Make an open water tile of any class
pub fn make_water(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    class: WaterClass,
    random_bits: u8,
) {
    make_water_layout(grid, tile, owner, class, layout_m5(LAYOUT_NORMAL, 0));
    grid.record_mut(tile).m4 = random_bits;
}

/// Make a sea tile
pub fn make_sea(grid: &mut Grid, tile: TileIndex) {
    make_water(grid, tile, Owner::WATER, WaterClass::Sea, 0);
}

/// Make a river tile
pub fn make_river(grid: &mut Grid, tile: TileIndex, random_bits: u8) {
    make_water(grid, tile, Owner::WATER, WaterClass::River, random_bits);
}

/// Make a canal tile
///
/// # Panics
///
/// Panics when `owner` is [`Owner::WATER`]; canals are always built
pub fn make_canal(grid: &mut Grid, tile: TileIndex, owner: Owner, random_bits: u8) {
    assert!(owner != Owner::WATER, "canal on tile {tile} cannot be owned by water");
    make_water(grid, tile, owner, WaterClass::Canal, random_bits);
}

/// Make one half of a ship depot, remembering the water it replaced
pub fn make_ship_depot(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    depot: DepotId,
    part: DepotPart,
    axis: Axis,
    original: WaterClass,
) {
    make_water_layout(
        grid,
        tile,
        owner,
        original,
        layout_m5(LAYOUT_DEPOT, (axis.raw() << 1) | part.raw()),
    );
    grid.record_mut(tile).m2 = depot;
}

fn make_lock_tile(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    part: LockPart,
    dir: DiagDirection,
    original: WaterClass,
) {
    make_water_layout(
        grid,
        tile,
        owner,
        original,
        layout_m5(LAYOUT_LOCK, (part.raw() << 2) | dir.raw()),
    );
}

/// Make a three-tile lock centred on `tile`, rising towards `dir`
///
/// The end sections keep the owner of open water they replace, so the
/// water can be restored when the lock is removed.
pub fn make_lock(
    grid: &mut Grid,
    tile: TileIndex,
    owner: Owner,
    dir: DiagDirection,
    lower: WaterClass,
    upper: WaterClass,
    middle: WaterClass,
) {
    let delta = grid.geometry().tile_offs_by_diag_dir(dir);
    let lower_tile = tile - delta;
    let upper_tile = tile + delta;
    let owner_of = |grid: &Grid, end: TileIndex| {
        if is_water_tile(grid, end) {
            grid.tile_owner(end)
        } else {
            owner
        }
    };
    let lower_owner = owner_of(grid, lower_tile);
    let upper_owner = owner_of(grid, upper_tile);

    make_lock_tile(grid, tile, owner, LockPart::Middle, dir, middle);
    make_lock_tile(grid, lower_tile, lower_owner, LockPart::Lower, dir, lower);
    make_lock_tile(grid, upper_tile, upper_owner, LockPart::Upper, dir, upper);
}
