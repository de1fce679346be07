//! Tests for tree tiles

#[cfg(test)]
mod tests {
    use crate::common::{at, grid64};
    use tilegrid::kinds::tree::{self, TreeGround, TreeType};
    use tilegrid::{Owner, TropicZone};

    // Tests the fields written by make_tree
    #[test]
    fn test_make_tree() {
        let mut grid = grid64();
        let tile = at(&grid, 15, 16);
        grid.set_tropic_zone(tile, TropicZone::Desert);
        tree::make_tree(&mut grid, tile, TreeType::CACTUS, 3, 5, TreeGround::SnowDesert, 2);

        assert_eq!(tree::tree_type(&grid, tile), TreeType::CACTUS);
        assert_eq!(tree::tree_count(&grid, tile), 3);
        assert_eq!(tree::tree_growth(&grid, tile), 5);
        assert_eq!(tree::tree_ground(&grid, tile), TreeGround::SnowDesert);
        assert_eq!(tree::tree_density(&grid, tile), 2);
        assert_eq!(tree::tree_counter(&grid, tile), 0);
        assert_eq!(grid.tile_owner(tile), Owner::NONE);
        assert_eq!(grid.tropic_zone(tile), TropicZone::Desert);
    }

    // Tests that the climate ranges cover the species table without gaps
    #[test]
    fn test_species_ranges() {
        assert_eq!(
            TreeType::TEMPERATE.0 + TreeType::COUNT_TEMPERATE,
            TreeType::SUB_ARCTIC.0
        );
        assert_eq!(
            TreeType::RAINFOREST.0 + TreeType::COUNT_RAINFOREST,
            TreeType::CACTUS.0
        );
        assert_eq!(
            TreeType::SUB_TROPICAL.0 + TreeType::COUNT_SUB_TROPICAL,
            TreeType::TOYLAND.0
        );
    }

    // Tests adding and removing trees within 1..=4
    #[test]
    fn test_tree_count() {
        let mut grid = grid64();
        let tile = at(&grid, 15, 16);
        tree::make_tree(&mut grid, tile, TreeType(2), 1, 0, TreeGround::Grass, 3);
        tree::add_tree_count(&mut grid, tile, 3);
        assert_eq!(tree::tree_count(&grid, tile), 4);
        tree::add_tree_count(&mut grid, tile, -2);
        assert_eq!(tree::tree_count(&grid, tile), 2);
        assert_eq!(tree::tree_growth(&grid, tile), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_tree_count_overflow_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 15, 16);
        tree::make_tree(&mut grid, tile, TreeType(2), 4, 0, TreeGround::Grass, 3);
        tree::add_tree_count(&mut grid, tile, 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_make_zero_trees_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 15, 16);
        tree::make_tree(&mut grid, tile, TreeType(2), 0, 0, TreeGround::Grass, 3);
    }

    // Tests that growth and count share m5 without interfering
    #[test]
    fn test_growth() {
        let mut grid = grid64();
        let tile = at(&grid, 17, 16);
        tree::make_tree(&mut grid, tile, TreeType(4), 2, 0, TreeGround::Rough, 1);
        tree::add_tree_growth(&mut grid, tile, 3);
        assert_eq!(tree::tree_growth(&grid, tile), 3);
        tree::set_tree_growth(&mut grid, tile, 7);
        assert_eq!(tree::tree_growth(&grid, tile), 7);
        assert_eq!(tree::tree_count(&grid, tile), 2);
    }

    // Tests that a counter overflow carries into the ground density
    #[test]
    fn test_counter_overflow_carries_into_density() {
        let mut grid = grid64();
        let tile = at(&grid, 18, 16);
        tree::make_tree(&mut grid, tile, TreeType(4), 1, 0, TreeGround::Rough, 1);
        tree::set_tree_counter(&mut grid, tile, 15);
        tree::add_tree_counter(&mut grid, tile, 1);
        assert_eq!(tree::tree_counter(&grid, tile), 0);
        assert_eq!(tree::tree_density(&grid, tile), 2);
        assert_eq!(tree::tree_ground(&grid, tile), TreeGround::Rough);
    }

    // Tests changing the ground under standing trees
    #[test]
    fn test_set_ground_density() {
        let mut grid = grid64();
        let tile = at(&grid, 19, 16);
        tree::make_tree(&mut grid, tile, TreeType(4), 1, 0, TreeGround::Grass, 3);
        tree::set_tree_counter(&mut grid, tile, 9);
        tree::set_tree_ground_density(&mut grid, tile, TreeGround::Shore, 0);
        assert_eq!(tree::tree_ground(&grid, tile), TreeGround::Shore);
        assert_eq!(tree::tree_density(&grid, tile), 0);
        assert_eq!(tree::tree_counter(&grid, tile), 9);
    }

    #[test]
    #[should_panic(expected = "expected Trees")]
    fn test_tree_type_on_clear_panics() {
        let grid = grid64();
        let _ = tree::tree_type(&grid, at(&grid, 5, 5));
    }
}
