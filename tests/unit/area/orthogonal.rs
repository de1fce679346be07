//! Tests for rectangular areas and their iterator

#[cfg(test)]
mod tests {
    use tilegrid::area::{OrthogonalTileIterator, TileArea};
    use tilegrid::{Geometry, MapConfig, TileIndex};

    fn geometry() -> Geometry {
        Geometry::new(&MapConfig::new(64, 64)).unwrap()
    }

    // Tests that corners in any order give the same rectangle
    #[test]
    fn test_from_corners_normalises() {
        let g = geometry();
        let area = TileArea::from_corners(&g, g.tile_xy(5, 5), g.tile_xy(2, 8));
        assert_eq!(area, TileArea::new(g.tile_xy(2, 5), 4, 4));
        assert_eq!(TileArea::from_corners(&g, g.tile_xy(2, 8), g.tile_xy(5, 5)), area);
        assert_eq!(area.len(), 16);
    }

    // Tests growing an area tile by tile
    #[test]
    fn test_add_grows_from_empty() {
        let g = geometry();
        let mut area = TileArea::empty();
        assert!(area.is_empty());
        area.add(&g, g.tile_xy(3, 4));
        assert_eq!(area, TileArea::new(g.tile_xy(3, 4), 1, 1));
        area.add(&g, g.tile_xy(1, 6));
        assert_eq!(area, TileArea::new(g.tile_xy(1, 4), 3, 3));

        area.clear();
        assert_eq!(area, TileArea::default());
    }

    // Tests containment and intersection
    #[test]
    fn test_contains_and_intersects() {
        let g = geometry();
        let area = TileArea::new(g.tile_xy(10, 10), 3, 2);
        assert!(area.contains(&g, g.tile_xy(12, 11)));
        assert!(!area.contains(&g, g.tile_xy(13, 11)));
        assert!(!area.contains(&g, g.tile_xy(10, 12)));

        assert!(area.intersects(&g, &TileArea::new(g.tile_xy(12, 11), 5, 5)));
        assert!(!area.intersects(&g, &TileArea::new(g.tile_xy(13, 10), 5, 5)));
        assert!(!area.intersects(&g, &TileArea::empty()));
        assert!(!TileArea::empty().contains(&g, g.tile_xy(0, 0)));
    }

    // Tests clamping at the south edges and the centre tile
    #[test]
    fn test_clamp_and_center() {
        let g = geometry();
        let mut area = TileArea::new(g.tile_xy(60, 50), 10, 20);
        area.clamp_to_map(&g);
        assert_eq!((area.w, area.h), (4, 14));

        let area = TileArea::new(g.tile_xy(10, 10), 5, 4);
        assert_eq!(area.center_tile(&g), g.tile_xy(12, 12));
    }

    // Tests that tiles come row by row, x fastest
    #[test]
    fn test_iterator_visits_rows_in_order() {
        let g = geometry();
        let area = TileArea::new(g.tile_xy(2, 3), 2, 2);
        let tiles: Vec<_> = area.iter(&g).collect();
        assert_eq!(
            tiles,
            vec![g.tile_xy(2, 3), g.tile_xy(3, 3), g.tile_xy(2, 4), g.tile_xy(3, 4)]
        );

        let from_corners: Vec<_> =
            OrthogonalTileIterator::from_corners(&g, g.tile_xy(3, 4), g.tile_xy(2, 3)).collect();
        assert_eq!(from_corners, tiles);
    }

    // Tests the exact length as the iterator runs down
    #[test]
    fn test_size_hint_counts_down() {
        let g = geometry();
        let mut iter = TileArea::new(g.tile_xy(1, 1), 3, 2).iter(&g);
        assert_eq!(iter.len(), 6);
        assert_eq!(iter.current(), g.tile_xy(1, 1));
        iter.next();
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.current(), g.tile_xy(1, 2));
        assert_eq!(iter.by_ref().count(), 3);
        assert_eq!(iter.current(), TileIndex::INVALID);
        assert_eq!(iter.next(), None);
    }

    // Tests that an empty area yields nothing
    #[test]
    fn test_empty_area_iterates_nothing() {
        let g = geometry();
        assert_eq!(TileArea::empty().iter(&g).count(), 0);
        assert_eq!(TileArea::new(g.tile_xy(4, 4), 3, 0).iter(&g).len(), 0);
    }
}
