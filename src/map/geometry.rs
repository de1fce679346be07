//! Coordinate system of a power-of-two map
//!
//! A tile index packs `(x, y)` as `y << log_x | x`. All index arithmetic is
//! relative to one map's dimensions, so it lives on [`Geometry`] rather than
//! on [`TileIndex`] itself.

use std::fmt;
use std::ops::{Add, Sub};

use rand::Rng;

use crate::io::configuration::MapConfig;
use crate::io::error::Result;
use crate::map::direction::{DiagDirection, Direction};
use crate::tile::bits::gb;

/// Linear index of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileIndex(pub u32);

impl TileIndex {
    /// Sentinel for "no tile"; larger than any index of the largest map
    pub const INVALID: Self = Self(u32::MAX);

    /// Position in the record arrays
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::INVALID {
            write!(f, "#invalid")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

/// Signed difference between two tile indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndexDiff(pub i32);

/// Signed difference split per axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndexDiffC {
    /// Difference along x
    pub x: i16,
    /// Difference along y
    pub y: i16,
}

impl TileIndexDiffC {
    /// Offset of `x` and `y` tiles
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

impl Add<TileIndexDiff> for TileIndex {
    type Output = Self;

    // Unchecked: leaving the map is the caller's problem
    fn add(self, rhs: TileIndexDiff) -> Self {
        Self(self.0.wrapping_add(rhs.0 as u32))
    }
}

impl Sub<TileIndexDiff> for TileIndex {
    type Output = Self;

    fn sub(self, rhs: TileIndexDiff) -> Self {
        Self(self.0.wrapping_sub(rhs.0 as u32))
    }
}

/// Dimensions of one map and the index arithmetic they imply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    log_x: u32,
    log_y: u32,
    size_x: u32,
    size_y: u32,
    size: u32,
    tile_mask: u32,
    freeform_edges: bool,
}

impl Geometry {
    /// Geometry for a validated map config
    ///
    /// # Errors
    ///
    /// Returns [`crate::GridError::InvalidMapSize`] if either axis is not a
    /// power of two between 64 and 4096
    pub fn new(config: &MapConfig) -> Result<Self> {
        config.validate()?;
        let size = config.size_x * config.size_y;
        Ok(Self {
            log_x: config.size_x.trailing_zeros(),
            log_y: config.size_y.trailing_zeros(),
            size_x: config.size_x,
            size_y: config.size_y,
            size,
            tile_mask: size - 1,
            freeform_edges: config.freeform_edges,
        })
    }

    /// Log2 of the x size
    pub const fn log_x(&self) -> u32 {
        self.log_x
    }

    /// Log2 of the y size
    pub const fn log_y(&self) -> u32 {
        self.log_y
    }

    /// Tiles along x
    pub const fn size_x(&self) -> u32 {
        self.size_x
    }

    /// Tiles along y
    pub const fn size_y(&self) -> u32 {
        self.size_y
    }

    /// Total number of tiles
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Largest x coordinate
    pub const fn max_x(&self) -> u32 {
        self.size_x - 1
    }

    /// Largest y coordinate
    pub const fn max_y(&self) -> u32 {
        self.size_y - 1
    }

    /// Mask that wraps any value onto a tile index
    pub const fn tile_mask(&self) -> u32 {
        self.tile_mask
    }

    /// Whether the north-east and north-west edges are void as well
    pub const fn freeform_edges(&self) -> bool {
        self.freeform_edges
    }

    /// Wrap an arbitrary value onto the map
    pub const fn wrap(&self, raw: u32) -> TileIndex {
        TileIndex(raw & self.tile_mask)
    }

    /// Index of the tile at `(x, y)`
    ///
    /// # Panics
    ///
    /// Panics when the coordinate lies outside the map
    pub fn tile_xy(&self, x: u32, y: u32) -> TileIndex {
        assert!(
            x < self.size_x && y < self.size_y,
            "coordinate ({x}, {y}) outside {}x{} map",
            self.size_x,
            self.size_y
        );
        TileIndex((y << self.log_x) + x)
    }

    /// Index of the tile under world coordinate `(x, y)`
    pub const fn tile_virt_xy(&self, x: u32, y: u32) -> TileIndex {
        TileIndex(((y >> 4) << self.log_x) + (x >> 4))
    }

    /// X coordinate of a tile
    pub const fn tile_x(&self, tile: TileIndex) -> u32 {
        tile.0 & self.max_x()
    }

    /// Y coordinate of a tile
    pub const fn tile_y(&self, tile: TileIndex) -> u32 {
        tile.0 >> self.log_x
    }

    /// Index difference of an `(x, y)` offset
    pub const fn tile_diff_xy(&self, x: i32, y: i32) -> TileIndexDiff {
        TileIndexDiff(y * self.size_x as i32 + x)
    }

    /// Index difference of a per-axis offset
    pub const fn to_tile_index_diff(&self, diff: TileIndexDiffC) -> TileIndexDiff {
        TileIndexDiff(((diff.y as i32) << self.log_x) + diff.x as i32)
    }

    /// `tile` moved by `(x, y)`, without wrap checks
    pub fn tile_add_xy(&self, tile: TileIndex, x: i32, y: i32) -> TileIndex {
        tile + self.tile_diff_xy(x, y)
    }

    /// `tile` moved by `(addx, addy)`, or [`TileIndex::INVALID`] when the
    /// result would leave the inner map or wrap around an edge
    pub fn tile_add_wrap(&self, tile: TileIndex, addx: i32, addy: i32) -> TileIndex {
        let x = self.tile_x(tile).wrapping_add(addx as u32);
        let y = self.tile_y(tile).wrapping_add(addy as u32);

        // Freeform maps have void tiles along the north edges too
        if self.freeform_edges && (x == 0 || y == 0) {
            return TileIndex::INVALID;
        }

        if x < self.max_x() && y < self.max_y() {
            return self.tile_xy(x, y);
        }
        TileIndex::INVALID
    }

    /// `tile` moved by `diff`, or [`TileIndex::INVALID`] when that leaves the map
    pub fn add_tile_index_diff_c_wrap(&self, tile: TileIndex, diff: TileIndexDiffC) -> TileIndex {
        let x = self.tile_x(tile).wrapping_add(diff.x as u32);
        let y = self.tile_y(tile).wrapping_add(diff.y as u32);
        if x >= self.size_x || y >= self.size_y {
            return TileIndex::INVALID;
        }
        self.tile_xy(x, y)
    }

    /// Per-axis offset from `tile_b` to `tile_a`
    pub const fn tile_index_to_tile_index_diff_c(
        &self,
        tile_a: TileIndex,
        tile_b: TileIndex,
    ) -> TileIndexDiffC {
        TileIndexDiffC {
            x: self.tile_x(tile_a) as i16 - self.tile_x(tile_b) as i16,
            y: self.tile_y(tile_a) as i16 - self.tile_y(tile_b) as i16,
        }
    }

    /// Index offset to the neighbour across edge `dir`
    pub const fn tile_offs_by_diag_dir(&self, dir: DiagDirection) -> TileIndexDiff {
        self.to_tile_index_diff(dir.offset())
    }

    /// Index offset to the neighbour in direction `dir`
    pub const fn tile_offs_by_dir(&self, dir: Direction) -> TileIndexDiff {
        self.to_tile_index_diff(dir.offset())
    }

    /// Neighbour of `tile` across edge `dir`, unchecked
    pub fn tile_add_by_diag_dir(&self, tile: TileIndex, dir: DiagDirection) -> TileIndex {
        tile + self.tile_offs_by_diag_dir(dir)
    }

    /// Edge direction leading from `from` to `to`, if they share a row or column
    pub const fn diagdir_between_tiles(
        &self,
        from: TileIndex,
        to: TileIndex,
    ) -> Option<DiagDirection> {
        let dx = self.tile_x(to) as i32 - self.tile_x(from) as i32;
        let dy = self.tile_y(to) as i32 - self.tile_y(from) as i32;
        match (dx, dy) {
            (0, 0) => None,
            (0, dy) if dy < 0 => Some(DiagDirection::NW),
            (0, _) => Some(DiagDirection::SE),
            (dx, 0) if dx < 0 => Some(DiagDirection::NE),
            (_, 0) => Some(DiagDirection::SW),
            _ => None,
        }
    }

    /// Whether `tile` lies in the playable interior
    ///
    /// The south-east and south-west edges are never inner; the north edges
    /// are inner unless the map has freeform edges.
    pub const fn is_inner_tile(&self, tile: TileIndex) -> bool {
        let x = self.tile_x(tile);
        let y = self.tile_y(tile);
        x < self.max_x() && y < self.max_y() && ((x > 0 && y > 0) || !self.freeform_edges)
    }

    /// Scale a count given for a 256x256 map by the area of this map
    pub const fn scale_by_map_size(&self, n: u32) -> u32 {
        // Shift by 12 less than the log to keep large counts from overflowing
        ceil_div(n << (self.log_x + self.log_y - 12), 1 << 4)
    }

    /// Scale a count given for a 256x256 map by the circumference of this map
    pub const fn scale_by_map_size_1d(&self, n: u32) -> u32 {
        ceil_div((n << self.log_x) + (n << self.log_y), 1 << 9)
    }

    /// Uniformly chosen tile index
    pub fn random_tile<R: Rng>(&self, rng: &mut R) -> TileIndex {
        self.wrap(rng.random())
    }

    /// Tile index picked by an already drawn random value
    pub const fn random_tile_seed(&self, r: u32) -> TileIndex {
        self.wrap(r)
    }
}

const fn ceil_div(a: u32, b: u32) -> u32 {
    a.div_ceil(b)
}

/// Hash of a tile position, used to spread periodic work over the map
pub const fn tile_hash(x: u32, y: u32) -> u32 {
    let hash = (x >> 4) ^ (x >> 6) ^ (y >> 4);
    hash.wrapping_sub(y >> 6)
}

/// Lowest two bits of [`tile_hash`]
pub fn tile_hash_2bit(x: u32, y: u32) -> u32 {
    gb(tile_hash(x, y), 0, 2)
}
