//! Tree tiles
//!
//! | field | bits |
//! |---|---|
//! | species | m3 |
//! | update counter | m2 0..3 |
//! | ground density | m2 4..5 |
//! | ground | m2 6..8 |
//! | growth stage | m5 0..2 |
//! | tree count − 1 | m5 6..7 |

use crate::kinds::{expect_type, stamp};
use crate::map::geometry::TileIndex;
use crate::map::grid::Grid;
use crate::tile::bits::{gb, sb};
use crate::tile::owner::Owner;
use crate::tile::record::TileType;

/// Tree species; each climate owns a consecutive range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TreeType(pub u8);

impl TreeType {
    /// First temperate species
    pub const TEMPERATE: Self = Self(0x00);
    /// First sub-arctic species
    pub const SUB_ARCTIC: Self = Self(0x0C);
    /// First rainforest species
    pub const RAINFOREST: Self = Self(0x14);
    /// The cactus, the only desert species
    pub const CACTUS: Self = Self(0x1B);
    /// First sub-tropical species
    pub const SUB_TROPICAL: Self = Self(0x1C);
    /// First toyland species
    pub const TOYLAND: Self = Self(0x20);
    /// Marker for "no tree"
    pub const INVALID: Self = Self(0xFF);

    /// Number of temperate species
    pub const COUNT_TEMPERATE: u8 = Self::SUB_ARCTIC.0 - Self::TEMPERATE.0;
    /// Number of sub-arctic species
    pub const COUNT_SUB_ARCTIC: u8 = Self::RAINFOREST.0 - Self::SUB_ARCTIC.0;
    /// Number of rainforest species
    pub const COUNT_RAINFOREST: u8 = Self::CACTUS.0 - Self::RAINFOREST.0;
    /// Number of sub-tropical species, cactus included
    pub const COUNT_SUB_TROPICAL: u8 = Self::TOYLAND.0 - Self::SUB_TROPICAL.0;
    /// Number of toyland species
    pub const COUNT_TOYLAND: u8 = 9;
}

raw_enum! {
    /// Ground under trees
    pub enum TreeGround {
        /// Grass, or bare land at density 0
        Grass = 0,
        /// Rough land
        Rough = 1,
        /// Snow or desert, depending on the climate
        SnowDesert = 2,
        /// Shore
        Shore = 3,
        /// Rough land covered by snow
        RoughSnow = 4,
    }
}

/// Species of the trees on a tile
pub fn tree_type(grid: &Grid, tile: TileIndex) -> TreeType {
    expect_type(grid, tile, TileType::Trees);
    TreeType(grid.record(tile).m3)
}

/// Ground under the trees
pub fn tree_ground(grid: &Grid, tile: TileIndex) -> TreeGround {
    expect_type(grid, tile, TileType::Trees);
    TreeGround::decode(gb(grid.record(tile).m2, 6, 3) as u8)
}

/// Density of the ground under the trees, 0 to 3
pub fn tree_density(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::Trees);
    gb(grid.record(tile).m2, 4, 2) as u8
}

/// Set the ground and its density together
pub fn set_tree_ground_density(grid: &mut Grid, tile: TileIndex, ground: TreeGround, density: u8) {
    expect_type(grid, tile, TileType::Trees);
    let m2 = &mut grid.record_mut(tile).m2;
    sb(m2, 4, 2, u16::from(density));
    sb(m2, 6, 3, u16::from(ground.raw()));
}

/// Number of trees on the tile, 1 to 4
pub fn tree_count(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::Trees);
    gb(grid.record(tile).m5, 6, 2) + 1
}

/// Change the number of trees by `delta`
///
/// # Panics
///
/// Panics when the count would leave 1..=4
pub fn add_tree_count(grid: &mut Grid, tile: TileIndex, delta: i8) {
    let count = tree_count(grid, tile) as i8 + delta;
    assert!((1..=4).contains(&count), "tree count {count} on tile {tile} out of range");
    sb(&mut grid.record_mut(tile).m5, 6, 2, (count - 1) as u8);
}

/// Growth stage of the trees, 0 to 7
pub fn tree_growth(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::Trees);
    gb(grid.record(tile).m5, 0, 3)
}

/// Advance the growth stage without a range check
pub fn add_tree_growth(grid: &mut Grid, tile: TileIndex, delta: i8) {
    expect_type(grid, tile, TileType::Trees);
    let m5 = &mut grid.record_mut(tile).m5;
    *m5 = m5.wrapping_add(delta as u8);
}

/// Set the growth stage, 0 to 7
pub fn set_tree_growth(grid: &mut Grid, tile: TileIndex, growth: u8) {
    expect_type(grid, tile, TileType::Trees);
    sb(&mut grid.record_mut(tile).m5, 0, 3, growth);
}

/// Ticks since the trees last changed, 0 to 15
pub fn tree_counter(grid: &Grid, tile: TileIndex) -> u8 {
    expect_type(grid, tile, TileType::Trees);
    gb(grid.record(tile).m2, 0, 4) as u8
}

/// Add to the update counter; overflow runs into the density bits
pub fn add_tree_counter(grid: &mut Grid, tile: TileIndex, delta: i8) {
    expect_type(grid, tile, TileType::Trees);
    let m2 = &mut grid.record_mut(tile).m2;
    *m2 = m2.wrapping_add(delta as i16 as u16);
}

/// Set the update counter, 0 to 15
pub fn set_tree_counter(grid: &mut Grid, tile: TileIndex, counter: u8) {
    expect_type(grid, tile, TileType::Trees);
    sb(&mut grid.record_mut(tile).m2, 0, 4, u16::from(counter));
}

/// Make a tile of `count` trees owned by nobody
///
/// # Panics
///
/// Panics when `count` is not 1 to 4 or `growth` exceeds 7
pub fn make_tree(
    grid: &mut Grid,
    tile: TileIndex,
    tree: TreeType,
    count: u8,
    growth: u8,
    ground: TreeGround,
    density: u8,
) {
    assert!((1..=4).contains(&count), "tree count {count} out of range");
    stamp(grid, tile, TileType::Trees);
    grid.set_tile_owner(tile, Owner::NONE);
    let record = grid.record_mut(tile);
    record.m3 = tree.0;
    sb(&mut record.m5, 6, 2, count - 1);
    sb(&mut record.m5, 0, 3, growth);
    set_tree_ground_density(grid, tile, ground, density);
}
