//! Town house tiles, plus the town index shared with road tiles
//!
//! | field | bits |
//! |---|---|
//! | random bits | m1 |
//! | town | m2 |
//! | house type | m4 (low byte), m3 6 (bit 8) |
//! | completed | m3 7 |
//! | triggers | m3 0..4 |
//! | construction counter, stage | m5 0..2, m5 3..4 |
//! | age, once completed | m5 |
//! | processing time or lift position | m6 2..7 |
//! | lift has destination, destination | m7 0, m7 1..3 |

use crate::kinds::{HouseId, TownId, expect_type, road, stamp};
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::bits::{ab, assign_bit, gb, has_bit, sb, set_bit};
use crate::tile::record::TileType;

/// Building stage of a finished house
pub const TOWN_HOUSE_COMPLETED: u8 = 3;

/// Town owning a house or the road on a tile
///
/// # Panics
///
/// Panics unless the tile is a house or a road tile other than a depot
pub fn town_index(grid: &Grid, tile: TileIndex) -> TownId {
    expect_town_tile(grid, tile);
    grid.record(tile).m2
}

/// Set the town owning a house or the road on a tile
pub fn set_town_index(grid: &mut Grid, tile: TileIndex, town: TownId) {
    expect_town_tile(grid, tile);
    grid.record_mut(tile).m2 = town;
}

#[track_caller]
fn expect_town_tile(grid: &Grid, tile: TileIndex) {
    let ok = match grid.tile_type(tile) {
        TileType::House => true,
        TileType::Road => !road::is_road_depot(grid, tile),
        _ => false,
    };
    assert!(ok, "tile {tile} belongs to no town");
}

/// House type as stored, an index into the house specs
pub fn house_type(grid: &Grid, tile: TileIndex) -> HouseId {
    expect_type(grid, tile, TileType::House);
    let record = grid.record(tile);
    u16::from(record.m4) | (u16::from(gb(record.m3, 6, 1)) << 8)
}

/// Set the house type
///
/// # Panics
///
/// Panics when `house` needs more than nine bits
pub fn set_house_type(grid: &mut Grid, tile: TileIndex, house: HouseId) {
    expect_type(grid, tile, TileType::House);
    assert!(house < 0x200, "house type {house} does not fit nine bits");
    let record = grid.record_mut(tile);
    record.m4 = gb(house, 0, 8) as u8;
    sb(&mut record.m3, 6, 1, gb(house, 8, 1) as u8);
}

/// Whether the lift of the house is moving towards a floor
pub fn lift_has_destination(grid: &Grid, tile: TileIndex) -> bool {
    expect_type(grid, tile, TileType::House);
    has_bit(grid.ext(tile).m7, 0)
}

/// Send the lift to floor `dest` (0..=7)
pub fn set_lift_destination(grid: &mut Grid, tile: TileIndex, dest: u8) {
    expect_type(grid, tile, TileType::House);
    let m7 = &mut grid.ext_mut(tile).m7;
    set_bit(m7, 0);
    sb(m7, 1, 3, dest);
}

/// Floor the lift is heading for
pub fn lift_destination(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::House);
    gb(grid.ext(tile).m7, 1, 3)
}

/// Stop the lift and forget its destination
pub fn halt_lift(grid: &mut Grid, tile: TileIndex) {
    expect_type(grid, tile, TileType::House);
    sb(&mut grid.ext_mut(tile).m7, 0, 4, 0);
}

/// Position of the lift, 0..=36
pub fn lift_position(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::House);
    gb(grid.ext(tile).m6, 2, 6)
}

/// Set the position of the lift
pub fn set_lift_position(grid: &mut Grid, tile: TileIndex, position: u8) {
    expect_type(grid, tile, TileType::House);
    sb(&mut grid.ext_mut(tile).m6, 2, 6, position);
}

/// Whether the house is finished
pub fn is_house_completed(grid: &Grid, tile: TileIndex) -> bool {
    expect_type(grid, tile, TileType::House);
    has_bit(grid.record(tile).m3, 7)
}

/// Mark the house finished or under construction
pub fn set_house_completed(grid: &mut Grid, tile: TileIndex, completed: bool) {
    expect_type(grid, tile, TileType::House);
    assign_bit(&mut grid.record_mut(tile).m3, 7, completed);
}

/// Building stage, 0..=3; a finished house is always at
/// [`TOWN_HOUSE_COMPLETED`]
pub fn house_building_stage(grid: &Grid, tile: TileIndex) -> u8 {
    if is_house_completed(grid, tile) {
        TOWN_HOUSE_COMPLETED
    } else {
        gb(grid.record(tile).m5, 3, 2)
    }
}

/// Construction counter within the current stage; 0 once finished
pub fn house_construction_tick(grid: &Grid, tile: TileIndex) -> u8 {
    if is_house_completed(grid, tile) {
        0
    } else {
        gb(grid.record(tile).m5, 0, 3)
    }
}

/// Advance construction by one tick
///
/// Counter and stage form one five-bit field, so a counter overflow moves
/// to the next stage. Reaching the last stage finishes the house.
pub fn inc_house_construction_tick(grid: &mut Grid, tile: TileIndex) {
    expect_type(grid, tile, TileType::House);
    let m5 = &mut grid.record_mut(tile).m5;
    ab(m5, 0, 5, 1);
    if gb(*m5, 3, 2) == TOWN_HOUSE_COMPLETED {
        set_house_completed(grid, tile, true);
    }
}

/// Start counting the age of a finished house
///
/// # Panics
///
/// Panics when the house is still under construction
pub fn reset_house_age(grid: &mut Grid, tile: TileIndex) {
    assert!(is_house_completed(grid, tile), "house on tile {tile} is not finished");
    grid.record_mut(tile).m5 = 0;
}

/// Age a finished house by one year, saturating at 255
pub fn increment_house_age(grid: &mut Grid, tile: TileIndex) {
    if is_house_completed(grid, tile) {
        let m5 = &mut grid.record_mut(tile).m5;
        *m5 = m5.saturating_add(1);
    }
}

/// Age of a finished house in years; 0 while under construction
pub fn house_age(grid: &Grid, tile: TileIndex) -> u8 {
    if is_house_completed(grid, tile) {
        grid.record(tile).m5
    } else {
        0
    }
}

/// Random bits of a house tile
pub fn house_random_bits(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::House);
    grid.record(tile).m1
}

/// Set the random bits of a house tile
pub fn set_house_random_bits(grid: &mut Grid, tile: TileIndex, random_bits: u8) {
    expect_type(grid, tile, TileType::House);
    grid.record_mut(tile).m1 = random_bits;
}

/// Pending random triggers of a house tile
pub fn house_triggers(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::House);
    gb(grid.record(tile).m3, 0, 5)
}

/// Set the pending random triggers of a house tile
pub fn set_house_triggers(grid: &mut Grid, tile: TileIndex, triggers: u8) {
    expect_type(grid, tile, TileType::House);
    sb(&mut grid.record_mut(tile).m3, 0, 5, triggers);
}

/// Ticks left until the house next produces cargo
pub fn house_processing_time(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::House);
    gb(grid.ext(tile).m6, 2, 6)
}

/// Set the ticks until the house next produces cargo
pub fn set_house_processing_time(grid: &mut Grid, tile: TileIndex, time: u8) {
    expect_type(grid, tile, TileType::House);
    sb(&mut grid.ext_mut(tile).m6, 2, 6, time);
}

/// Count the processing time down by one tick
pub fn dec_house_processing_time(grid: &mut Grid, tile: TileIndex) {
    expect_type(grid, tile, TileType::House);
    let m6 = &mut grid.ext_mut(tile).m6;
    *m6 = m6.wrapping_sub(1 << 2);
}

/// Turn a clear tile into a house of `town`
///
/// A house built straight at [`TOWN_HOUSE_COMPLETED`] is finished with
/// age 0; otherwise `stage` and `counter` start its construction.
///
/// # Panics
///
/// Panics unless the tile is clear ground
pub fn make_house_tile(
    grid: &mut Grid,
    tile: TileIndex,
    town: TownId,
    counter: u8,
    stage: u8,
    house: HouseId,
    random_bits: u8,
    processing_time: u8,
) {
    assert!(
        grid.is_tile_type(tile, TileType::Clear),
        "house on tile {tile} must be built on clear ground"
    );
    stamp(grid, tile, TileType::House);
    let record = grid.record_mut(tile);
    record.m1 = random_bits;
    record.m2 = town;
    set_house_type(grid, tile, house);
    let completed = stage == TOWN_HOUSE_COMPLETED;
    set_house_completed(grid, tile, completed);
    if !completed {
        let m5 = &mut grid.record_mut(tile).m5;
        sb(m5, 3, 2, stage);
        sb(m5, 0, 3, counter);
    }
    set_house_processing_time(grid, tile, processing_time);
}
