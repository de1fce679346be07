//! Clear tiles: bare ground, snow, desert and farm fields
//!
//! | field | bits |
//! |---|---|
//! | density | m5 0..1 |
//! | ground | m5 2..4 |
//! | update counter | m5 5..7 |
//! | snow | m3 4 |
//! | field type | m3 0..3 |
//! | field industry | m2 |
//! | fences SE, SW, NE, NW | m4 2..4, m4 5..7, m3 5..7, m6 2..4 |

use crate::kinds::{IndustryId, expect_type, stamp};
use crate::map::direction::DiagDirection;
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::bits::{clr_bit, gb, has_bit, sb, set_bit};
use crate::tile::owner::Owner;
use crate::tile::record::TileType;

raw_enum! {
    /// Ground of a clear tile
    pub enum ClearGround {
        /// Grass, density 0 being bare land
        Grass = 0,
        /// Rough land
        Rough = 1,
        /// Rocks
        Rocks = 2,
        /// Farm fields
        Fields = 3,
        /// Snow, stored as a flag over another ground
        Snow = 4,
        /// Desert
        Desert = 5,
    }
}

/// Whether a clear tile is covered by snow
pub fn is_snow_tile(grid: &Grid, tile: TileIndex) -> bool {
    expect_type(grid, tile, TileType::Clear);
    has_bit(grid.record(tile).m3, 4)
}

/// Ground of a clear tile, ignoring snow cover
pub fn raw_clear_ground(grid: &Grid, tile: TileIndex) -> ClearGround {
    expect_type(grid, tile, TileType::Clear);
    ClearGround::decode(gb(grid.record(tile).m5, 2, 3))
}

/// Ground of a clear tile; snow wins over whatever lies beneath
pub fn clear_ground(grid: &Grid, tile: TileIndex) -> ClearGround {
    if is_snow_tile(grid, tile) {
        return ClearGround::Snow;
    }
    raw_clear_ground(grid, tile)
}

/// Whether a clear tile has the given ground
pub fn is_clear_ground(grid: &Grid, tile: TileIndex, ground: ClearGround) -> bool {
    clear_ground(grid, tile) == ground
}

/// Whether a tile is clear and has the given ground; any other kind answers false
pub fn is_clear_ground_tile(grid: &Grid, tile: TileIndex, ground: ClearGround) -> bool {
    grid.is_tile_type(tile, TileType::Clear) && is_clear_ground(grid, tile, ground)
}

/// Density of the ground, 0 to 3
pub fn clear_density(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::Clear);
    gb(grid.record(tile).m5, 0, 2)
}

/// Add to the density; overflow runs into the ground bits
pub fn add_clear_density(grid: &mut Grid, tile: TileIndex, delta: i8) {
    expect_type(grid, tile, TileType::Clear);
    let m5 = &mut grid.record_mut(tile).m5;
    *m5 = m5.wrapping_add(delta as u8);
}

/// Set the density, 0 to 3
pub fn set_clear_density(grid: &mut Grid, tile: TileIndex, density: u8) {
    expect_type(grid, tile, TileType::Clear);
    sb(&mut grid.record_mut(tile).m5, 0, 2, density);
}

/// Ticks since the ground last changed
pub fn clear_counter(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::Clear);
    gb(grid.record(tile).m5, 5, 3)
}

/// Add to the update counter
pub fn add_clear_counter(grid: &mut Grid, tile: TileIndex, delta: i8) {
    expect_type(grid, tile, TileType::Clear);
    let m5 = &mut grid.record_mut(tile).m5;
    *m5 = m5.wrapping_add((delta as u8) << 5);
}

/// Set the update counter
pub fn set_clear_counter(grid: &mut Grid, tile: TileIndex, counter: u8) {
    expect_type(grid, tile, TileType::Clear);
    sb(&mut grid.record_mut(tile).m5, 5, 3, counter);
}

/// Set ground and density together, resetting the counter
pub fn set_clear_ground_density(grid: &mut Grid, tile: TileIndex, ground: ClearGround, density: u8) {
    expect_type(grid, tile, TileType::Clear);
    assert!(ground != ClearGround::Snow, "snow is a flag, not a stored ground");
    assert!(density <= 3, "clear density {density} out of range");
    grid.record_mut(tile).m5 = (ground.raw() << 2) | density;
}

#[track_caller]
fn expect_fields(grid: &Grid, tile: TileIndex) {
    assert!(
        is_clear_ground(grid, tile, ClearGround::Fields),
        "tile {tile} is not a field"
    );
}

/// Crop graphics of a field
pub fn field_type(grid: &Grid, tile: TileIndex) -> u8 {
    expect_fields(grid, tile);
    gb(grid.record(tile).m3, 0, 4)
}

/// Set the crop graphics of a field
pub fn set_field_type(grid: &mut Grid, tile: TileIndex, field_type: u8) {
    expect_fields(grid, tile);
    sb(&mut grid.record_mut(tile).m3, 0, 4, field_type);
}

/// Industry that farms a field
pub fn industry_index_of_field(grid: &Grid, tile: TileIndex) -> IndustryId {
    expect_fields(grid, tile);
    grid.record(tile).m2
}

/// Set the industry that farms a field
pub fn set_industry_index_of_field(grid: &mut Grid, tile: TileIndex, industry: IndustryId) {
    expect_fields(grid, tile);
    grid.record_mut(tile).m2 = industry;
}

/// Fence type along one side of a field; 0 means no fence
pub fn fence(grid: &Grid, tile: TileIndex, side: DiagDirection) -> u8 {
    expect_fields(grid, tile);
    match side {
        DiagDirection::SE => gb(grid.record(tile).m4, 2, 3),
        DiagDirection::SW => gb(grid.record(tile).m4, 5, 3),
        DiagDirection::NE => gb(grid.record(tile).m3, 5, 3),
        DiagDirection::NW => gb(grid.ext(tile).m6, 2, 3),
    }
}

/// Set the fence type along one side of a field
pub fn set_fence(grid: &mut Grid, tile: TileIndex, side: DiagDirection, fence: u8) {
    expect_fields(grid, tile);
    match side {
        DiagDirection::SE => sb(&mut grid.record_mut(tile).m4, 2, 3, fence),
        DiagDirection::SW => sb(&mut grid.record_mut(tile).m4, 5, 3, fence),
        DiagDirection::NE => sb(&mut grid.record_mut(tile).m3, 5, 3, fence),
        DiagDirection::NW => sb(&mut grid.ext_mut(tile).m6, 2, 3, fence),
    }
}

/// Make a clear tile owned by nobody
pub fn make_clear(grid: &mut Grid, tile: TileIndex, ground: ClearGround, density: u8) {
    stamp(grid, tile, TileType::Clear);
    grid.set_tile_owner(tile, Owner::NONE);
    set_clear_ground_density(grid, tile, ground, density);
}

/// Make a fully grown field farmed by `industry`
pub fn make_field(grid: &mut Grid, tile: TileIndex, field_type: u8, industry: IndustryId) {
    stamp(grid, tile, TileType::Clear);
    grid.set_tile_owner(tile, Owner::NONE);
    let record = grid.record_mut(tile);
    record.m2 = industry;
    sb(&mut record.m3, 0, 4, field_type);
    set_clear_ground_density(grid, tile, ClearGround::Fields, 3);
}

/// Cover a clear tile with snow; fields are ploughed back to grass
///
/// # Panics
///
/// Panics if the tile is already snowy
pub fn make_snow(grid: &mut Grid, tile: TileIndex, density: u8) {
    assert!(
        !is_clear_ground(grid, tile, ClearGround::Snow),
        "tile {tile} is already covered by snow"
    );
    set_bit(&mut grid.record_mut(tile).m3, 4);
    if raw_clear_ground(grid, tile) == ClearGround::Fields {
        set_clear_ground_density(grid, tile, ClearGround::Grass, density);
    } else {
        set_clear_density(grid, tile, density);
    }
}

/// Remove the snow from a clear tile, leaving the ground beneath at full density
///
/// # Panics
///
/// Panics if the tile has no snow
pub fn clear_snow(grid: &mut Grid, tile: TileIndex) {
    assert!(
        is_clear_ground(grid, tile, ClearGround::Snow),
        "tile {tile} has no snow to clear"
    );
    clr_bit(&mut grid.record_mut(tile).m3, 4);
    set_clear_density(grid, tile, 3);
}
