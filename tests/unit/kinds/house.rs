//! Tests for town houses

#[cfg(test)]
mod tests {
    use crate::common::{at, grid64};
    use tilegrid::kinds::house::{self, TOWN_HOUSE_COMPLETED};
    use tilegrid::kinds::road;
    use tilegrid::transport::{RoadBits, RoadTypes};
    use tilegrid::{DiagDirection, Owner};

    // Tests a house built straight into its finished state
    #[test]
    fn test_make_completed_house() {
        let mut grid = grid64();
        let tile = at(&grid, 10, 10);
        house::make_house_tile(&mut grid, tile, 7, 0, TOWN_HOUSE_COMPLETED, 0x1A5, 0x3C, 20);

        assert_eq!(house::town_index(&grid, tile), 7);
        assert_eq!(house::house_type(&grid, tile), 0x1A5);
        assert!(house::is_house_completed(&grid, tile));
        assert_eq!(house::house_building_stage(&grid, tile), TOWN_HOUSE_COMPLETED);
        assert_eq!(house::house_construction_tick(&grid, tile), 0);
        assert_eq!(house::house_age(&grid, tile), 0);
        assert_eq!(house::house_random_bits(&grid, tile), 0x3C);
        assert_eq!(house::house_processing_time(&grid, tile), 20);
    }

    // Tests that a counter overflow moves to the next stage and finishes the house
    #[test]
    fn test_construction_finishes_house() {
        let mut grid = grid64();
        let tile = at(&grid, 11, 10);
        house::make_house_tile(&mut grid, tile, 1, 6, 2, 3, 0, 0);
        assert!(!house::is_house_completed(&grid, tile));
        assert_eq!(house::house_building_stage(&grid, tile), 2);
        assert_eq!(house::house_construction_tick(&grid, tile), 6);

        house::inc_house_construction_tick(&mut grid, tile);
        assert_eq!(house::house_construction_tick(&grid, tile), 7);
        assert!(!house::is_house_completed(&grid, tile));

        house::inc_house_construction_tick(&mut grid, tile);
        assert!(house::is_house_completed(&grid, tile));
        assert_eq!(house::house_building_stage(&grid, tile), TOWN_HOUSE_COMPLETED);
        assert_eq!(house::house_type(&grid, tile), 3);

        house::reset_house_age(&mut grid, tile);
        assert_eq!(house::house_age(&grid, tile), 0);
    }

    // Tests that age counts only on finished houses and saturates
    #[test]
    fn test_house_age() {
        let mut grid = grid64();
        let building = at(&grid, 12, 10);
        let done = at(&grid, 13, 10);
        house::make_house_tile(&mut grid, building, 1, 0, 0, 3, 0, 0);
        house::make_house_tile(&mut grid, done, 1, 0, TOWN_HOUSE_COMPLETED, 3, 0, 0);

        house::increment_house_age(&mut grid, building);
        assert_eq!(house::house_age(&grid, building), 0);
        assert_eq!(house::house_construction_tick(&grid, building), 0);

        for _ in 0..300 {
            house::increment_house_age(&mut grid, done);
        }
        assert_eq!(house::house_age(&grid, done), u8::MAX);
    }

    #[test]
    #[should_panic(expected = "is not finished")]
    fn test_reset_age_under_construction_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 12, 10);
        house::make_house_tile(&mut grid, tile, 1, 0, 1, 3, 0, 0);
        house::reset_house_age(&mut grid, tile);
    }

    // Tests the lift fields alongside the triggers and type
    #[test]
    fn test_lift() {
        let mut grid = grid64();
        let tile = at(&grid, 14, 10);
        house::make_house_tile(&mut grid, tile, 2, 0, TOWN_HOUSE_COMPLETED, 0x100, 0, 0);

        assert!(!house::lift_has_destination(&grid, tile));
        house::set_lift_destination(&mut grid, tile, 5);
        house::set_lift_position(&mut grid, tile, 36);
        house::set_house_triggers(&mut grid, tile, 0x1F);
        assert!(house::lift_has_destination(&grid, tile));
        assert_eq!(house::lift_destination(&grid, tile), 5);
        assert_eq!(house::lift_position(&grid, tile), 36);
        assert_eq!(house::house_triggers(&grid, tile), 0x1F);
        assert_eq!(house::house_type(&grid, tile), 0x100);

        house::halt_lift(&mut grid, tile);
        assert!(!house::lift_has_destination(&grid, tile));
        assert_eq!(house::lift_destination(&grid, tile), 0);
        assert_eq!(house::lift_position(&grid, tile), 36);
    }

    // Tests the processing countdown
    #[test]
    fn test_processing_time() {
        let mut grid = grid64();
        let tile = at(&grid, 15, 10);
        house::make_house_tile(&mut grid, tile, 2, 0, TOWN_HOUSE_COMPLETED, 1, 0, 3);
        house::dec_house_processing_time(&mut grid, tile);
        assert_eq!(house::house_processing_time(&grid, tile), 2);
        house::set_house_processing_time(&mut grid, tile, 63);
        assert_eq!(house::house_processing_time(&grid, tile), 63);
    }

    // Tests the town index shared with road tiles
    #[test]
    fn test_town_index_on_road() {
        let mut grid = grid64();
        let tile = at(&grid, 16, 10);
        road::make_road_normal(&mut grid, tile, RoadBits::X, RoadTypes::ROAD, 11, Owner::TOWN, Owner::NONE);
        assert_eq!(house::town_index(&grid, tile), 11);
        house::set_town_index(&mut grid, tile, 12);
        assert_eq!(house::town_index(&grid, tile), 12);
    }

    #[test]
    #[should_panic(expected = "belongs to no town")]
    fn test_town_index_on_depot_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 16, 10);
        road::make_road_depot(
            &mut grid,
            tile,
            Owner::company(0),
            1,
            DiagDirection::NE,
            tilegrid::transport::RoadType::Road,
        );
        let _ = house::town_index(&grid, tile);
    }

    #[test]
    #[should_panic(expected = "must be built on clear ground")]
    fn test_house_on_house_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 17, 10);
        house::make_house_tile(&mut grid, tile, 1, 0, TOWN_HOUSE_COMPLETED, 1, 0, 0);
        house::make_house_tile(&mut grid, tile, 1, 0, TOWN_HOUSE_COMPLETED, 1, 0, 0);
    }

    #[test]
    #[should_panic(expected = "does not fit nine bits")]
    fn test_house_type_too_large_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 18, 10);
        house::make_house_tile(&mut grid, tile, 1, 0, TOWN_HOUSE_COMPLETED, 0x200, 0, 0);
    }
}
