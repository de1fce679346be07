//! Tests for per-block storage

#[cfg(test)]
mod tests {
    use tilegrid::area::{TileArea, TileMatrix};
    use tilegrid::{Geometry, MapConfig};

    // Tests that growing keeps the values of existing blocks
    #[test]
    fn test_growth_keeps_existing_blocks() {
        let g = Geometry::new(&MapConfig::new(256, 256)).unwrap();
        let mut matrix: TileMatrix<u32, 16> = TileMatrix::new();
        assert_eq!(matrix.get(&g, g.tile_xy(40, 40)), None);

        *matrix.get_mut(&g, g.tile_xy(40, 40)) = 7;
        assert_eq!(*matrix.area(), TileArea::new(g.tile_xy(32, 32), 16, 16));

        // Grows north-west: the old block moves inside the new storage
        *matrix.get_mut(&g, g.tile_xy(3, 20)) = 9;
        assert_eq!(*matrix.area(), TileArea::new(g.tile_xy(0, 16), 48, 32));
        assert_eq!(matrix.get(&g, g.tile_xy(47, 47)), Some(&7));
        assert_eq!(matrix.get(&g, g.tile_xy(0, 31)), Some(&9));
        assert_eq!(matrix.get(&g, g.tile_xy(20, 40)), Some(&0));
        assert_eq!(matrix.get(&g, g.tile_xy(100, 100)), None);
    }

    // Tests the block area widened by neighbouring blocks
    #[test]
    fn test_area_for_tile_clamps_at_edges() {
        let g = Geometry::new(&MapConfig::new(64, 64)).unwrap();
        let area = TileMatrix::<u8, 16>::area_for_tile(&g, g.tile_xy(5, 60), 1);
        assert_eq!(area, TileArea::new(g.tile_xy(0, 32), 32, 32));

        let area = TileMatrix::<u8, 16>::area_for_tile(&g, g.tile_xy(20, 20), 0);
        assert_eq!(area, TileArea::new(g.tile_xy(16, 16), 16, 16));
        assert_eq!(TileMatrix::<u8, 16>::GRID, 16);
    }
}
