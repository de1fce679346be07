use crate::map::geometry::{Geometry, TileIndex};

/// Axis-aligned rectangle of tiles: a north corner plus a width and height
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileArea {
    /// North corner, or [`TileIndex::INVALID`] for an empty area
    pub tile: TileIndex,
    /// Extent along x
    pub w: u16,
    /// Extent along y
    pub h: u16,
}

impl Default for TileArea {
    fn default() -> Self {
        Self::empty()
    }
}

impl TileArea {
    /// Area of `w` by `h` tiles with its north corner at `tile`
    pub const fn new(tile: TileIndex, w: u16, h: u16) -> Self {
        Self { tile, w, h }
    }

    /// Area holding no tiles
    pub const fn empty() -> Self {
        Self::new(TileIndex::INVALID, 0, 0)
    }

    /// Smallest area holding both corners, given in any order
    ///
    /// # Panics
    ///
    /// Panics when either corner is outside the map
    pub fn from_corners(geometry: &Geometry, start: TileIndex, end: TileIndex) -> Self {
        assert!(start.0 < geometry.size(), "corner {start} outside the map");
        assert!(end.0 < geometry.size(), "corner {end} outside the map");

        let (mut sx, mut sy) = (geometry.tile_x(start), geometry.tile_y(start));
        let (mut ex, mut ey) = (geometry.tile_x(end), geometry.tile_y(end));
        if sx > ex {
            std::mem::swap(&mut sx, &mut ex);
        }
        if sy > ey {
            std::mem::swap(&mut sy, &mut ey);
        }

        Self::new(
            geometry.tile_xy(sx, sy),
            (ex - sx + 1) as u16,
            (ey - sy + 1) as u16,
        )
    }

    /// Whether the area holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Number of tiles in the area
    pub const fn len(&self) -> usize {
        self.w as usize * self.h as usize
    }

    /// Make the area empty
    pub const fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Grow the area to include `tile`
    pub fn add(&mut self, geometry: &Geometry, tile: TileIndex) {
        if self.tile == TileIndex::INVALID {
            *self = Self::new(tile, 1, 1);
            return;
        }

        let sx = geometry.tile_x(self.tile);
        let sy = geometry.tile_y(self.tile);
        let ex = sx + u32::from(self.w) - 1;
        let ey = sy + u32::from(self.h) - 1;

        let ax = geometry.tile_x(tile);
        let ay = geometry.tile_y(tile);

        let (sx, sy) = (sx.min(ax), sy.min(ay));
        let (ex, ey) = (ex.max(ax), ey.max(ay));

        *self = Self::new(
            geometry.tile_xy(sx, sy),
            (ex - sx + 1) as u16,
            (ey - sy + 1) as u16,
        );
    }

    /// Whether the two areas share at least one tile
    pub fn intersects(&self, geometry: &Geometry, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let left1 = geometry.tile_x(self.tile);
        let top1 = geometry.tile_y(self.tile);
        let right1 = left1 + u32::from(self.w) - 1;
        let bottom1 = top1 + u32::from(self.h) - 1;

        let left2 = geometry.tile_x(other.tile);
        let top2 = geometry.tile_y(other.tile);
        let right2 = left2 + u32::from(other.w) - 1;
        let bottom2 = top2 + u32::from(other.h) - 1;

        !(left2 > right1 || right2 < left1 || top2 > bottom1 || bottom2 < top1)
    }

    /// Whether `tile` lies inside the area
    pub fn contains(&self, geometry: &Geometry, tile: TileIndex) -> bool {
        if self.is_empty() {
            return false;
        }

        let left = geometry.tile_x(self.tile);
        let top = geometry.tile_y(self.tile);
        let x = geometry.tile_x(tile);
        let y = geometry.tile_y(tile);

        (left..left + u32::from(self.w)).contains(&x) && (top..top + u32::from(self.h)).contains(&y)
    }

    /// Shrink the area so it ends at the map's south edges
    ///
    /// # Panics
    ///
    /// Panics when the north corner is outside the map
    pub fn clamp_to_map(&mut self, geometry: &Geometry) {
        assert!(
            self.tile.0 < geometry.size(),
            "area corner {} outside the map",
            self.tile
        );
        let room_x = geometry.size_x() - geometry.tile_x(self.tile);
        let room_y = geometry.size_y() - geometry.tile_y(self.tile);
        self.w = self.w.min(room_x.min(u32::from(u16::MAX)) as u16);
        self.h = self.h.min(room_y.min(u32::from(u16::MAX)) as u16);
    }

    /// Tile in the middle of the area, rounding towards the north corner
    pub fn center_tile(&self, geometry: &Geometry) -> TileIndex {
        geometry.tile_add_xy(self.tile, i32::from(self.w / 2), i32::from(self.h / 2))
    }

    /// Every tile of the area, row by row from the north corner
    pub fn iter(&self, geometry: &Geometry) -> OrthogonalTileIterator {
        OrthogonalTileIterator::new(geometry, self)
    }
}

/// Walks a [`TileArea`] row by row, x fastest
#[derive(Debug, Clone)]
pub struct OrthogonalTileIterator {
    tile: TileIndex,
    w: u32,
    x: u32,
    y: u32,
    row_step: i32,
}

impl OrthogonalTileIterator {
    /// Iterator over every tile of `area`
    pub fn new(geometry: &Geometry, area: &TileArea) -> Self {
        let tile = if area.is_empty() {
            TileIndex::INVALID
        } else {
            area.tile
        };
        Self {
            tile,
            w: u32::from(area.w),
            x: u32::from(area.w),
            y: u32::from(area.h),
            // From the end of one row to the start of the next
            row_step: geometry.tile_diff_xy(1, 1).0 - i32::from(area.w),
        }
    }

    /// Iterator over the rectangle spanned by two corners
    pub fn from_corners(geometry: &Geometry, start: TileIndex, end: TileIndex) -> Self {
        Self::new(geometry, &TileArea::from_corners(geometry, start, end))
    }

    /// Tile the iterator will yield next, or [`TileIndex::INVALID`] when done
    pub const fn current(&self) -> TileIndex {
        self.tile
    }

    fn advance(&mut self) {
        self.x -= 1;
        if self.x > 0 {
            self.tile = TileIndex(self.tile.0 + 1);
            return;
        }
        self.y -= 1;
        if self.y > 0 {
            self.x = self.w;
            self.tile = TileIndex(self.tile.0.wrapping_add_signed(self.row_step));
        } else {
            self.tile = TileIndex::INVALID;
        }
    }
}

impl Iterator for OrthogonalTileIterator {
    type Item = TileIndex;

    fn next(&mut self) -> Option<TileIndex> {
        if self.tile == TileIndex::INVALID {
            return None;
        }
        let tile = self.tile;
        self.advance();
        Some(tile)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.tile == TileIndex::INVALID {
            return (0, Some(0));
        }
        let left = (self.y as usize - 1) * self.w as usize + self.x as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for OrthogonalTileIterator {}

impl std::iter::FusedIterator for OrthogonalTileIterator {}
