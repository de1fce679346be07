//! The grid: owner of the tile record arrays
//!
//! One [`Grid`] holds the core and extended record of every cell. Accessor
//! modules borrow it for the duration of a call and never keep references
//! into it, so a re-allocation swaps both arrays at once.

use tracing::info;

use crate::io::configuration::{MAX_TILE_HEIGHT, MapConfig};
use crate::io::error::{GridError, Result};
use crate::kinds::{clear, void};
use crate::kinds::clear::ClearGround;
use crate::map::geometry::{Geometry, TileIndex};
use crate::tile::bits::{gb, sb};
use crate::tile::owner::Owner;
use crate::tile::record::{Tile, TileExtended, TileType, TropicZone};

/// The map: its geometry plus one core and one extended record per tile
#[derive(Debug, Clone)]
pub struct Grid {
    geometry: Geometry,
    tiles: Vec<Tile>,
    extended: Vec<TileExtended>,
}

impl Grid {
    /// Allocate a fresh map
    ///
    /// Tiles on the void edges are made void; every other tile is made
    /// clear grass at full density, owned by nobody.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidMapSize`] for sizes outside the envelope
    pub fn new(config: &MapConfig) -> Result<Self> {
        let geometry = Geometry::new(config)?;
        let count = geometry.size() as usize;
        let mut grid = Self {
            geometry,
            tiles: vec![Tile::default(); count],
            extended: vec![TileExtended::default(); count],
        };

        for raw in 0..geometry.size() {
            let tile = TileIndex(raw);
            if geometry.is_inner_tile(tile) {
                clear::make_clear(&mut grid, tile, ClearGround::Grass, 3);
            } else {
                void::make_void(&mut grid, tile);
            }
        }

        info!(
            target: "tilegrid::map",
            size_x = config.size_x,
            size_y = config.size_y,
            freeform_edges = config.freeform_edges,
            "map.allocate"
        );
        Ok(grid)
    }

    /// Adopt record arrays produced by a loader, as-is
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidMapSize`] for a bad config and
    /// [`GridError::RecordCountMismatch`] when either array does not hold
    /// exactly one record per tile
    pub fn from_records(
        config: &MapConfig,
        tiles: Vec<Tile>,
        extended: Vec<TileExtended>,
    ) -> Result<Self> {
        let geometry = Geometry::new(config)?;
        let expected = geometry.size() as usize;
        if tiles.len() != expected || extended.len() != expected {
            return Err(GridError::RecordCountMismatch {
                expected,
                tiles: tiles.len(),
                extended: extended.len(),
            });
        }

        info!(
            target: "tilegrid::map",
            size_x = config.size_x,
            size_y = config.size_y,
            "map.adopt_records"
        );
        Ok(Self {
            geometry,
            tiles,
            extended,
        })
    }

    /// Replace the whole map with a fresh one of a new size
    ///
    /// Both arrays are built before either is swapped in; on error the
    /// current map is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidMapSize`] for sizes outside the envelope
    pub fn reallocate(&mut self, config: &MapConfig) -> Result<()> {
        *self = Self::new(config)?;
        Ok(())
    }

    /// Coordinate system of this map
    pub const fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Tiles along x
    pub const fn size_x(&self) -> u32 {
        self.geometry.size_x()
    }

    /// Tiles along y
    pub const fn size_y(&self) -> u32 {
        self.geometry.size_y()
    }

    /// Total number of tiles
    pub const fn size(&self) -> u32 {
        self.geometry.size()
    }

    /// Largest x coordinate
    pub const fn max_x(&self) -> u32 {
        self.geometry.max_x()
    }

    /// Largest y coordinate
    pub const fn max_y(&self) -> u32 {
        self.geometry.max_y()
    }

    /// Index of the tile at `(x, y)`
    pub fn tile_xy(&self, x: u32, y: u32) -> TileIndex {
        self.geometry.tile_xy(x, y)
    }

    /// X coordinate of a tile
    pub const fn tile_x(&self, tile: TileIndex) -> u32 {
        self.geometry.tile_x(tile)
    }

    /// Y coordinate of a tile
    pub const fn tile_y(&self, tile: TileIndex) -> u32 {
        self.geometry.tile_y(tile)
    }

    fn slot(&self, tile: TileIndex) -> usize {
        assert!(
            tile.0 < self.geometry.size(),
            "tile {tile} outside map of {} tiles",
            self.geometry.size()
        );
        tile.index()
    }

    /// Core record of a tile
    ///
    /// # Panics
    ///
    /// Panics when `tile` is outside the map
    pub fn record(&self, tile: TileIndex) -> &Tile {
        &self.tiles[self.slot(tile)]
    }

    /// Mutable core record of a tile
    pub fn record_mut(&mut self, tile: TileIndex) -> &mut Tile {
        let slot = self.slot(tile);
        &mut self.tiles[slot]
    }

    /// Extended record of a tile
    pub fn ext(&self, tile: TileIndex) -> &TileExtended {
        &self.extended[self.slot(tile)]
    }

    /// Mutable extended record of a tile
    pub fn ext_mut(&mut self, tile: TileIndex) -> &mut TileExtended {
        let slot = self.slot(tile);
        &mut self.extended[slot]
    }

    /// Both records of a tile, for writers that touch all fields
    pub fn records_mut(&mut self, tile: TileIndex) -> (&mut Tile, &mut TileExtended) {
        let slot = self.slot(tile);
        (&mut self.tiles[slot], &mut self.extended[slot])
    }

    /// All core records in index order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// All extended records in index order
    pub fn extended(&self) -> &[TileExtended] {
        &self.extended
    }

    /// Type tag of a tile
    pub fn tile_type(&self, tile: TileIndex) -> TileType {
        TileType::decode(gb(self.record(tile).type_bits, 4, 4))
    }

    /// Set the type tag of a tile, leaving every other field alone
    ///
    /// # Panics
    ///
    /// Panics when void-ness of `ty` disagrees with the tile's edge status
    pub fn set_tile_type(&mut self, tile: TileIndex, ty: TileType) {
        let inner = self.geometry.is_inner_tile(tile);
        assert!(
            inner == (ty != TileType::Void),
            "tile {tile} ({}, {}) cannot become {ty:?}: void is required exactly on the map edge",
            self.tile_x(tile),
            self.tile_y(tile)
        );
        sb(&mut self.record_mut(tile).type_bits, 4, 4, ty.raw());
    }

    /// Whether a tile has the given type tag
    pub fn is_tile_type(&self, tile: TileIndex, ty: TileType) -> bool {
        self.tile_type(tile) == ty
    }

    /// Whether a tile is on the map and not void
    pub fn is_valid_tile(&self, tile: TileIndex) -> bool {
        tile.0 < self.geometry.size() && !self.is_tile_type(tile, TileType::Void)
    }

    fn assert_ownable(&self, tile: TileIndex) {
        assert!(self.is_valid_tile(tile), "tile {tile} is not a valid tile");
        let ty = self.tile_type(tile);
        assert!(
            ty != TileType::House && ty != TileType::Industry,
            "tile {tile} of type {ty:?} stores no owner"
        );
    }

    /// Owner of a tile
    ///
    /// # Panics
    ///
    /// Panics on void, house and industry tiles, which store no owner
    pub fn tile_owner(&self, tile: TileIndex) -> Owner {
        self.assert_ownable(tile);
        Owner(gb(self.record(tile).m1, 0, 5))
    }

    /// Set the owner of a tile
    pub fn set_tile_owner(&mut self, tile: TileIndex, owner: Owner) {
        self.assert_ownable(tile);
        sb(&mut self.record_mut(tile).m1, 0, 5, owner.0);
    }

    /// Whether `owner` owns the tile
    pub fn is_tile_owner(&self, tile: TileIndex, owner: Owner) -> bool {
        self.tile_owner(tile) == owner
    }

    /// Height of the north corner of a tile, in height levels
    pub fn tile_height(&self, tile: TileIndex) -> u32 {
        u32::from(self.record(tile).height)
    }

    /// Set the height of the north corner of a tile
    ///
    /// # Panics
    ///
    /// Panics when `height` exceeds [`MAX_TILE_HEIGHT`]
    pub fn set_tile_height(&mut self, tile: TileIndex, height: u32) {
        assert!(
            height <= MAX_TILE_HEIGHT,
            "height {height} of tile {tile} exceeds {MAX_TILE_HEIGHT}"
        );
        self.record_mut(tile).height = height as u8;
    }

    /// Tropic zone of a tile
    pub fn tropic_zone(&self, tile: TileIndex) -> TropicZone {
        TropicZone::decode(gb(self.record(tile).type_bits, 0, 2))
    }

    /// Set the tropic zone of a tile
    ///
    /// # Panics
    ///
    /// Panics when giving a void tile any zone but [`TropicZone::Normal`]
    pub fn set_tropic_zone(&mut self, tile: TileIndex, zone: TropicZone) {
        assert!(
            !self.is_tile_type(tile, TileType::Void) || zone == TropicZone::Normal,
            "void tile {tile} must stay in the normal tropic zone"
        );
        sb(&mut self.record_mut(tile).type_bits, 0, 2, zone.raw());
    }

    fn assert_animated(&self, tile: TileIndex) {
        let ty = self.tile_type(tile);
        assert!(
            matches!(
                ty,
                TileType::House | TileType::Object | TileType::Industry | TileType::Station
            ),
            "tile {tile} of type {ty:?} has no animation frame"
        );
    }

    /// Current animation frame of a house, object, industry or station tile
    pub fn animation_frame(&self, tile: TileIndex) -> u8 {
        self.assert_animated(tile);
        self.ext(tile).m7
    }

    /// Set the animation frame of a house, object, industry or station tile
    pub fn set_animation_frame(&mut self, tile: TileIndex, frame: u8) {
        self.assert_animated(tile);
        self.ext_mut(tile).m7 = frame;
    }
}
