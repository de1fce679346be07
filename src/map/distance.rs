//! Distance metrics between tiles and to the map edge

use crate::map::direction::DiagDirection;
use crate::map::geometry::{Geometry, TileIndex};

impl Geometry {
    /// Sum of the per-axis distances
    pub const fn distance_manhattan(&self, t0: TileIndex, t1: TileIndex) -> u32 {
        let (dx, dy) = self.deltas(t0, t1);
        dx + dy
    }

    /// Squared euclidean distance
    pub const fn distance_square(&self, t0: TileIndex, t1: TileIndex) -> u32 {
        let (dx, dy) = self.deltas(t0, t1);
        dx * dx + dy * dy
    }

    /// Largest of the per-axis distances
    pub const fn distance_max(&self, t0: TileIndex, t1: TileIndex) -> u32 {
        let (dx, dy) = self.deltas(t0, t1);
        if dx > dy { dx } else { dy }
    }

    /// Twice the largest plus the smallest per-axis distance
    ///
    /// Prefers diagonal routes over straight ones of the same
    /// [`distance_max`](Self::distance_max).
    pub const fn distance_max_plus_manhattan(&self, t0: TileIndex, t1: TileIndex) -> u32 {
        let (dx, dy) = self.deltas(t0, t1);
        if dx > dy { 2 * dx + dy } else { 2 * dy + dx }
    }

    /// Distance to the closest of the four map edges
    pub const fn distance_from_edge(&self, tile: TileIndex) -> u32 {
        let xl = self.tile_x(tile);
        let yl = self.tile_y(tile);
        let xh = self.size_x() - 1 - xl;
        let yh = self.size_y() - 1 - yl;
        let low = if xl < yl { xl } else { yl };
        let high = if xh < yh { xh } else { yh };
        if low < high { low } else { high }
    }

    /// Distance to the playable edge in direction `dir`
    ///
    /// Void border tiles lie beyond the playable edge and answer 0.
    pub const fn distance_from_edge_dir(&self, tile: TileIndex, dir: DiagDirection) -> u32 {
        let freeform = self.freeform_edges() as u32;
        match dir {
            DiagDirection::NE => self.tile_x(tile).saturating_sub(freeform),
            DiagDirection::NW => self.tile_y(tile).saturating_sub(freeform),
            DiagDirection::SW => self.max_x().saturating_sub(self.tile_x(tile) + 1),
            DiagDirection::SE => self.max_y().saturating_sub(self.tile_y(tile) + 1),
        }
    }

    const fn deltas(&self, t0: TileIndex, t1: TileIndex) -> (u32, u32) {
        (
            self.tile_x(t0).abs_diff(self.tile_x(t1)),
            self.tile_y(t0).abs_diff(self.tile_y(t1)),
        )
    }
}
