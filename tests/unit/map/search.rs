//! Tests for the spiral tile search and the closest-water distance

#[cfg(test)]
mod tests {
    use crate::common::{at, grid64, sea64};
    use tilegrid::io::configuration::{MAX_LAND_SEARCH, MAX_WATER_SEARCH, WATER_ONLY_MAP_LAND_DISTANCE};
    use tilegrid::kinds::{station, water};
    use tilegrid::kinds::water::WaterClass;
    use tilegrid::{Grid, TileIndex};

    fn visit_order(grid: &Grid, x: u32, y: u32, size: u32) -> Vec<(u32, u32)> {
        let geometry = grid.geometry();
        let mut seen = Vec::new();
        let found = geometry.circular_tile_search(at(grid, x, y), size, |tile| {
            seen.push((geometry.tile_x(tile), geometry.tile_y(tile)));
            false
        });
        assert!(found.is_none());
        seen
    }

    // Tests the visiting order of an odd-sized search
    #[test]
    fn test_odd_search_order() {
        let grid = grid64();
        assert_eq!(
            visit_order(&grid, 10, 10, 3),
            [
                (10, 10),
                (11, 9),
                (10, 9),
                (9, 9),
                (9, 10),
                (9, 11),
                (10, 11),
                (11, 11),
                (11, 10),
            ]
        );
    }

    // Tests that an even-sized search centres on the north corner
    #[test]
    fn test_even_search_order() {
        let grid = grid64();
        assert_eq!(
            visit_order(&grid, 10, 10, 2),
            [(11, 10), (10, 10), (10, 11), (11, 11)]
        );
    }

    // Tests that each tile of a larger square is visited exactly once
    #[test]
    fn test_search_covers_square_once() {
        let grid = grid64();
        let mut seen = visit_order(&grid, 30, 30, 7);
        assert_eq!(seen.len(), 49);
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 49);
        assert!(seen.iter().all(|&(x, y)| (27..=33).contains(&x) && (27..=33).contains(&y)));
    }

    // Tests that tiles off the map are skipped
    #[test]
    fn test_search_skips_off_map() {
        let grid = grid64();
        let seen = visit_order(&grid, 63, 10, 3);
        assert_eq!(seen.len(), 6);
        assert!(seen.iter().all(|&(x, _)| x <= 63));
    }

    // Tests that the search stops at the first accepted tile
    #[test]
    fn test_search_finds_first_match() {
        let grid = grid64();
        let geometry = grid.geometry();
        let target = at(&grid, 12, 11);
        let mut tested = 0;
        let found = geometry.circular_tile_search(at(&grid, 10, 10), 9, |tile| {
            tested += 1;
            tile == target
        });
        assert_eq!(found, Some(target));
        assert!(tested < 81);
    }

    // Tests a single-tile search
    #[test]
    fn test_size_one_search() {
        let grid = grid64();
        let tile = at(&grid, 5, 5);
        assert_eq!(grid.geometry().circular_tile_search(tile, 1, |_| true), Some(tile));
        assert_eq!(grid.geometry().circular_tile_search(tile, 1, |_| false), None);
    }

    // Tests the rings around a rectangular hole, which is never tested itself
    #[test]
    fn test_search_with_hole() {
        let grid = grid64();
        let geometry = grid.geometry();
        let mut seen = Vec::new();
        let found = geometry.circular_tile_search_with_hole(at(&grid, 20, 20), 1, 3, 2, |tile| {
            seen.push(tile);
            false
        });
        assert!(found.is_none());
        // One ring around a 3x2 hole
        assert_eq!(seen.len(), 2 * (3 + 2) + 4);
        let hole: Vec<TileIndex> = (21..24)
            .flat_map(|x| (21..23).map(move |y| (x, y)))
            .map(|(x, y)| at(&grid, x, y))
            .collect();
        assert!(seen.iter().all(|tile| !hole.contains(tile)));
        assert!(seen.contains(&at(&grid, 20, 20)));
        assert!(seen.contains(&at(&grid, 24, 23)));
    }

    #[test]
    #[should_panic(expected = "positive size")]
    fn test_zero_size_panics() {
        let grid = grid64();
        let _ = grid.geometry().circular_tile_search(at(&grid, 5, 5), 0, |_| true);
    }

    // Tests the manhattan distance to the closest water
    #[test]
    fn test_closest_water() {
        let mut grid = grid64();
        let sea = at(&grid, 20, 20);
        let shore = at(&grid, 22, 21);
        water::make_sea(&mut grid, sea);
        // Coast is land and must not be found
        water::make_shore(&mut grid, shore);

        assert_eq!(grid.closest_water_distance(at(&grid, 23, 21), true), 4);
        assert_eq!(grid.closest_water_distance(at(&grid, 20, 20), true), 0);
        assert_eq!(grid.closest_water_distance(at(&grid, 20, 20), false), 1);
    }

    // Tests the cap when there is no water at all
    #[test]
    fn test_no_water_returns_cap() {
        let grid = grid64();
        assert_eq!(grid.closest_water_distance(at(&grid, 30, 30), true), MAX_WATER_SEARCH);
    }

    // Tests the land search on maps without reachable land
    #[test]
    fn test_land_search_on_water_maps() {
        let mut grid = sea64();
        let from = at(&grid, 30, 30);
        assert_eq!(grid.closest_water_distance(from, false), MAX_LAND_SEARCH);

        // A buoy is not land but makes the map not water-only
        let buoy = at(&grid, 5, 5);
        station::make_buoy(&mut grid, buoy, 1, WaterClass::Sea);
        assert_eq!(grid.closest_water_distance(from, false), WATER_ONLY_MAP_LAND_DISTANCE);
    }
}
