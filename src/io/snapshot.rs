//! Byte-exact record export and import
//!
//! A core record serialises to eight bytes in field order (`type_bits`,
//! `height`, `m2` little-endian, `m1`, `m3`, `m4`, `m5`) and an extended
//! record to two (`m6`, `m7`). The layout is the wire contract with whatever
//! persistence format sits on top; bits are never reinterpreted here.

use tracing::debug;

use crate::io::configuration::MapConfig;
use crate::io::error::{Result, invalid_parameter};
use crate::map::grid::Grid;
use crate::tile::record::{Tile, TileExtended};

/// Serialised size of a core record
pub const TILE_BYTES: usize = 8;
/// Serialised size of an extended record
pub const TILE_EXTENDED_BYTES: usize = 2;

impl Tile {
    /// Serialise to the persistent byte layout
    #[must_use]
    pub const fn to_bytes(self) -> [u8; TILE_BYTES] {
        let m2 = self.m2.to_le_bytes();
        [
            self.type_bits,
            self.height,
            m2[0],
            m2[1],
            self.m1,
            self.m3,
            self.m4,
            self.m5,
        ]
    }

    /// Deserialise from the persistent byte layout
    #[must_use]
    pub const fn from_bytes(bytes: [u8; TILE_BYTES]) -> Self {
        Self {
            type_bits: bytes[0],
            height: bytes[1],
            m2: u16::from_le_bytes([bytes[2], bytes[3]]),
            m1: bytes[4],
            m3: bytes[5],
            m4: bytes[6],
            m5: bytes[7],
        }
    }
}

impl TileExtended {
    /// Serialise to the persistent byte layout
    #[must_use]
    pub const fn to_bytes(self) -> [u8; TILE_EXTENDED_BYTES] {
        [self.m6, self.m7]
    }

    /// Deserialise from the persistent byte layout
    #[must_use]
    pub const fn from_bytes(bytes: [u8; TILE_EXTENDED_BYTES]) -> Self {
        Self {
            m6: bytes[0],
            m7: bytes[1],
        }
    }
}

/// Export every core record, in tile index order
#[must_use]
pub fn export_tiles(grid: &Grid) -> Vec<u8> {
    let mut out = Vec::with_capacity(grid.tiles().len() * TILE_BYTES);
    for tile in grid.tiles() {
        out.extend_from_slice(&tile.to_bytes());
    }
    out
}

/// Export every extended record, in tile index order
#[must_use]
pub fn export_extended(grid: &Grid) -> Vec<u8> {
    let mut out = Vec::with_capacity(grid.extended().len() * TILE_EXTENDED_BYTES);
    for ext in grid.extended() {
        out.extend_from_slice(&ext.to_bytes());
    }
    out
}

/// Rebuild a grid from byte streams written by [`export_tiles`] and
/// [`export_extended`]
///
/// # Errors
///
/// Returns [`crate::GridError::InvalidParameter`] if either stream is not a
/// whole number of records, and whatever [`Grid::from_records`] reports for
/// a bad config or a record count that does not match the map.
pub fn import(config: &MapConfig, tiles: &[u8], extended: &[u8]) -> Result<Grid> {
    if !tiles.len().is_multiple_of(TILE_BYTES) {
        return Err(invalid_parameter(
            "tiles",
            &tiles.len(),
            &format!("byte length is not a multiple of {TILE_BYTES}"),
        ));
    }
    if !extended.len().is_multiple_of(TILE_EXTENDED_BYTES) {
        return Err(invalid_parameter(
            "extended",
            &extended.len(),
            &format!("byte length is not a multiple of {TILE_EXTENDED_BYTES}"),
        ));
    }

    let core: Vec<Tile> = tiles
        .chunks_exact(TILE_BYTES)
        .map(|chunk| {
            let mut raw = [0u8; TILE_BYTES];
            raw.copy_from_slice(chunk);
            Tile::from_bytes(raw)
        })
        .collect();
    let ext: Vec<TileExtended> = extended
        .chunks_exact(TILE_EXTENDED_BYTES)
        .map(|chunk| TileExtended::from_bytes([chunk[0], chunk[1]]))
        .collect();

    debug!(
        target: "tilegrid::io",
        tiles = core.len(),
        extended = ext.len(),
        "snapshot.import"
    );
    Grid::from_records(config, core, ext)
}
