use crate::map::geometry::{Geometry, TileIndex};

/// Rectangle rotated by 45 degrees
///
/// `a` runs along the south-east diagonal (x + y grows) and `b` along the
/// south-west diagonal (y - x grows). Both extents are one past the end, so
/// they are never 0 for an area built from corners, and their sign gives
/// the direction the area stretches from its base tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagonalTileArea {
    /// Base tile, or [`TileIndex::INVALID`] for an empty area
    pub tile: TileIndex,
    /// Extent in rotated x
    pub a: i16,
    /// Extent in rotated y
    pub b: i16,
}

impl Default for DiagonalTileArea {
    fn default() -> Self {
        Self::empty()
    }
}

impl DiagonalTileArea {
    /// Area of extents `a` and `b` from `tile`
    pub const fn new(tile: TileIndex, a: i16, b: i16) -> Self {
        Self { tile, a, b }
    }

    /// Area holding no tiles
    pub const fn empty() -> Self {
        Self::new(TileIndex::INVALID, 0, 0)
    }

    /// Area spanned by two corner tiles, based at `start`
    ///
    /// # Panics
    ///
    /// Panics when either corner is outside the map
    pub fn from_corners(geometry: &Geometry, start: TileIndex, end: TileIndex) -> Self {
        assert!(start.0 < geometry.size(), "corner {start} outside the map");
        assert!(end.0 < geometry.size(), "corner {end} outside the map");

        let (sx, sy) = (geometry.tile_x(start) as i32, geometry.tile_y(start) as i32);
        let (ex, ey) = (geometry.tile_x(end) as i32, geometry.tile_y(end) as i32);

        // The base cannot move to a corner with all-positive extents: that
        // corner may fall between tiles
        let a = ey + ex - sy - sx;
        let b = ey - ex - sy + sx;
        let one_past = |n: i32| if n > 0 { n + 1 } else { n - 1 };

        Self::new(start, one_past(a) as i16, one_past(b) as i16)
    }

    /// Make the area empty
    pub const fn clear(&mut self) {
        *self = Self::empty();
    }

    /// Whether `tile` lies inside the area
    pub fn contains(&self, geometry: &Geometry, tile: TileIndex) -> bool {
        if self.tile == TileIndex::INVALID {
            return false;
        }

        let (x, y) = (geometry.tile_x(tile) as i32, geometry.tile_y(tile) as i32);
        let a = y + x;
        let b = y - x;

        let (bx, by) = (geometry.tile_x(self.tile) as i32, geometry.tile_y(self.tile) as i32);
        let mut start_a = by + bx;
        let mut start_b = by - bx;
        let mut end_a = start_a + i32::from(self.a);
        let mut end_b = start_b + i32::from(self.b);

        // Swap, keeping the end one past the last row
        if start_a > end_a {
            (start_a, end_a) = (end_a + 1, start_a + 1);
        }
        if start_b > end_b {
            (start_b, end_b) = (end_b + 1, start_b + 1);
        }

        (start_a..end_a).contains(&a) && (start_b..end_b).contains(&b)
    }

    /// Every tile of the area on the map, column by column in rotated space
    pub fn iter(&self, geometry: &Geometry) -> DiagonalTileIterator {
        DiagonalTileIterator::new(geometry, self)
    }
}

/// Walks a [`DiagonalTileArea`], skipping tiles beyond the map edges
#[derive(Debug, Clone)]
pub struct DiagonalTileIterator {
    tile: TileIndex,
    geometry: Geometry,
    base_x: i32,
    base_y: i32,
    a_cur: i32,
    b_cur: i32,
    a_max: i32,
    b_max: i32,
}

impl DiagonalTileIterator {
    /// Iterator over every tile of `area`, starting at its base tile
    ///
    /// An area with a zero extent holds no tiles.
    pub fn new(geometry: &Geometry, area: &DiagonalTileArea) -> Self {
        let tile = if area.a == 0 || area.b == 0 {
            TileIndex::INVALID
        } else {
            area.tile
        };
        let (base_x, base_y) = if tile == TileIndex::INVALID {
            (0, 0)
        } else {
            (geometry.tile_x(tile) as i32, geometry.tile_y(tile) as i32)
        };
        Self {
            tile,
            geometry: *geometry,
            base_x,
            base_y,
            a_cur: 0,
            b_cur: 0,
            a_max: i32::from(area.a),
            b_max: i32::from(area.b),
        }
    }

    /// Iterator over the area spanned by two corners
    pub fn from_corners(geometry: &Geometry, start: TileIndex, end: TileIndex) -> Self {
        Self::new(geometry, &DiagonalTileArea::from_corners(geometry, start, end))
    }

    fn step(&mut self) {
        if self.a_max == 1 || self.a_max == -1 {
            // Every second column is empty: skip straight over it
            self.a_cur = 0;
            self.b_cur = if self.b_max > 0 {
                (self.b_cur + 2).min(self.b_max)
            } else {
                (self.b_cur - 2).max(self.b_max)
            };
            return;
        }

        let new_line = if self.a_max > 0 {
            self.a_cur += 2;
            self.a_cur >= self.a_max
        } else {
            self.a_cur -= 2;
            self.a_cur <= self.a_max
        };
        if new_line {
            // Odd columns start one tile further along a
            self.a_cur = if self.a_cur.abs() % 2 == 0 {
                self.a_max.signum()
            } else {
                0
            };
            self.b_cur += self.b_max.signum();
        }
    }

    fn advance(&mut self) {
        loop {
            self.step();

            let x = self.base_x + (self.a_cur - self.b_cur) / 2;
            let y = self.base_y + (self.b_cur + self.a_cur) / 2;
            let on_map = (0..self.geometry.size_x() as i32).contains(&x)
                && (0..self.geometry.size_y() as i32).contains(&y);
            self.tile = if on_map {
                self.geometry.tile_xy(x as u32, y as u32)
            } else {
                TileIndex::INVALID
            };

            if self.tile != TileIndex::INVALID || self.b_cur == self.b_max {
                break;
            }
        }

        if self.b_cur == self.b_max {
            self.tile = TileIndex::INVALID;
        }
    }
}

impl Iterator for DiagonalTileIterator {
    type Item = TileIndex;

    fn next(&mut self) -> Option<TileIndex> {
        if self.tile == TileIndex::INVALID {
            return None;
        }
        let tile = self.tile;
        self.advance();
        Some(tile)
    }
}

impl std::iter::FusedIterator for DiagonalTileIterator {}
