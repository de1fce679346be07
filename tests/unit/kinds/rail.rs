//! Tests for plain rail, signals and rail depots

#[cfg(test)]
mod tests {
    use crate::common::{at, grid64};
    use tilegrid::kinds::rail::{self, RailGroundType, RailTileType};
    use tilegrid::transport::{
        RailType, SignalState, SignalType, SignalVariant, Track, TrackBits, Trackdir,
    };
    use tilegrid::{DiagDirection, Owner};

    fn signalled_x(grid: &mut tilegrid::Grid, x: u32, y: u32, ty: SignalType) -> tilegrid::TileIndex {
        let tile = at(grid, x, y);
        rail::make_rail_normal(grid, tile, Owner::company(0), TrackBits::X, RailType::RAIL);
        rail::set_has_signals(grid, tile, true);
        rail::set_signal_type(grid, tile, None, ty);
        rail::set_present_signals(grid, tile, 0xC);
        tile
    }

    // Tests the fields written by make_rail_normal
    #[test]
    fn test_make_rail_normal() {
        let mut grid = grid64();
        let tile = at(&grid, 5, 6);
        grid.set_tile_height(tile, 4);
        rail::make_rail_normal(&mut grid, tile, Owner::company(3), TrackBits::CROSS, RailType::MONO);

        assert_eq!(rail::rail_tile_type(&grid, tile), RailTileType::Normal);
        assert!(rail::is_plain_rail_tile(&grid, tile));
        assert!(!rail::has_signals(&grid, tile));
        assert_eq!(rail::track_bits(&grid, tile), TrackBits::CROSS);
        assert!(rail::has_track(&grid, tile, Track::Y));
        assert!(!rail::has_track(&grid, tile, Track::Upper));
        assert_eq!(rail::rail_type(&grid, tile), RailType::MONO);
        assert_eq!(grid.tile_owner(tile), Owner::company(3));
        assert_eq!(grid.tile_height(tile), 4);
        assert_eq!(rail::rail_ground_type(&grid, tile), RailGroundType::Barren);

        rail::set_track_bits(&mut grid, tile, TrackBits::X);
        rail::set_rail_type(&mut grid, tile, RailType::MAGLEV);
        rail::set_rail_ground_type(&mut grid, tile, RailGroundType::IceDesert);
        assert_eq!(rail::track_bits(&grid, tile), TrackBits::X);
        assert_eq!(rail::rail_type(&grid, tile), RailType::MAGLEV);
        assert!(rail::is_snow_rail_ground(&grid, tile));
    }

    // Tests the two-slot reservation encoding
    #[test]
    fn test_track_reservation() {
        let mut grid = grid64();
        let tile = at(&grid, 9, 9);
        rail::make_rail_normal(&mut grid, tile, Owner::company(0), TrackBits::HORZ, RailType::RAIL);
        assert!(rail::rail_reservation_track_bits(&grid, tile).is_empty());

        assert!(rail::try_reserve_track(&mut grid, tile, Track::Lower));
        assert_eq!(rail::rail_reservation_track_bits(&grid, tile), TrackBits::LOWER);
        assert!(!rail::try_reserve_track(&mut grid, tile, Track::Lower));

        // Parallel half-tile tracks may both be reserved
        assert!(rail::try_reserve_track(&mut grid, tile, Track::Upper));
        assert_eq!(rail::rail_reservation_track_bits(&grid, tile), TrackBits::HORZ);

        rail::unreserve_track(&mut grid, tile, Track::Upper);
        assert_eq!(rail::rail_reservation_track_bits(&grid, tile), TrackBits::LOWER);
        rail::unreserve_track(&mut grid, tile, Track::Lower);
        assert!(rail::rail_reservation_track_bits(&grid, tile).is_empty());
    }

    // Tests that crossing reservations are refused
    #[test]
    fn test_crossing_reservation_refused() {
        let mut grid = grid64();
        let tile = at(&grid, 9, 9);
        rail::make_rail_normal(&mut grid, tile, Owner::company(0), TrackBits::CROSS, RailType::RAIL);
        assert!(rail::try_reserve_track(&mut grid, tile, Track::X));
        assert!(!rail::try_reserve_track(&mut grid, tile, Track::Y));
        assert_eq!(rail::rail_reservation_track_bits(&grid, tile), TrackBits::X);
    }

    #[test]
    #[should_panic(expected = "overlapping reservation")]
    fn test_set_overlapping_reservation_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 9, 9);
        rail::make_rail_normal(&mut grid, tile, Owner::company(0), TrackBits::CROSS, RailType::RAIL);
        rail::set_track_reservation(&mut grid, tile, TrackBits::CROSS);
    }

    #[test]
    #[should_panic(expected = "has no track")]
    fn test_reserve_missing_track_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 9, 9);
        rail::make_rail_normal(&mut grid, tile, Owner::company(0), TrackBits::X, RailType::RAIL);
        let _ = rail::try_reserve_track(&mut grid, tile, Track::Left);
    }

    // Tests the depot fields and their reservation bit
    #[test]
    fn test_rail_depot() {
        let mut grid = grid64();
        let tile = at(&grid, 14, 3);
        rail::make_rail_depot(&mut grid, tile, Owner::company(1), 77, DiagDirection::SE, RailType::ELECTRIC);

        assert!(rail::is_rail_depot_tile(&grid, tile));
        assert!(!rail::is_plain_rail_tile(&grid, tile));
        assert_eq!(rail::rail_depot_direction(&grid, tile), DiagDirection::SE);
        assert_eq!(rail::rail_depot_track(&grid, tile), Track::Y);
        assert_eq!(rail::rail_depot_index(&grid, tile), 77);
        assert_eq!(rail::rail_type(&grid, tile), RailType::ELECTRIC);

        assert!(!rail::has_depot_reservation(&grid, tile));
        rail::set_depot_reservation(&mut grid, tile, true);
        assert_eq!(rail::depot_reservation_track_bits(&grid, tile), TrackBits::Y);
        assert_eq!(rail::rail_depot_direction(&grid, tile), DiagDirection::SE);
        rail::set_depot_reservation(&mut grid, tile, false);
        assert!(rail::depot_reservation_track_bits(&grid, tile).is_empty());
    }

    #[test]
    #[should_panic(expected = "not plain rail")]
    fn test_track_bits_on_depot_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 14, 3);
        rail::make_rail_depot(&mut grid, tile, Owner::company(1), 1, DiagDirection::NE, RailType::RAIL);
        let _ = rail::track_bits(&grid, tile);
    }

    // Tests that signal type and variant are stored per track pair
    #[test]
    fn test_signal_type_per_pair() {
        let mut grid = grid64();
        let tile = at(&grid, 20, 20);
        rail::make_rail_normal(&mut grid, tile, Owner::company(0), TrackBits::HORZ, RailType::RAIL);
        rail::set_has_signals(&mut grid, tile, true);
        assert_eq!(rail::rail_tile_type(&grid, tile), RailTileType::Signals);

        rail::set_signal_type(&mut grid, tile, Some(Track::Upper), SignalType::Entry);
        rail::set_signal_type(&mut grid, tile, Some(Track::Lower), SignalType::Exit);
        rail::set_signal_variant(&mut grid, tile, Some(Track::Lower), SignalVariant::Semaphore);

        assert_eq!(rail::signal_type(&grid, tile, Track::Upper), SignalType::Entry);
        assert_eq!(rail::signal_type(&grid, tile, Track::Lower), SignalType::Exit);
        assert!(rail::is_presignal_entry(&grid, tile, Track::Upper));
        assert!(rail::is_presignal_exit(&grid, tile, Track::Lower));
        assert_eq!(rail::signal_variant(&grid, tile, Track::Upper), SignalVariant::Electric);
        assert_eq!(rail::signal_variant(&grid, tile, Track::Lower), SignalVariant::Semaphore);

        rail::set_signal_type(&mut grid, tile, None, SignalType::Combo);
        assert_eq!(rail::signal_type(&grid, tile, Track::Upper), SignalType::Combo);
        assert_eq!(rail::signal_type(&grid, tile, Track::Lower), SignalType::Combo);
        // The track bits are untouched by the signal fields
        assert_eq!(rail::track_bits(&grid, tile), TrackBits::HORZ);
    }

    // Tests the side rotation of a path signal, which never returns to both sides
    #[test]
    fn test_cycle_signal_side_pbs() {
        let mut grid = grid64();
        let tile = signalled_x(&mut grid, 30, 30, SignalType::Pbs);

        let mut seen = Vec::new();
        for _ in 0..3 {
            rail::cycle_signal_side(&mut grid, tile, Track::X);
            seen.push(rail::present_signals(&grid, tile));
        }
        assert_eq!(seen, [0x8, 0x4, 0x8]);
    }

    // Tests the side rotation of a block signal, which wraps to both sides
    #[test]
    fn test_cycle_signal_side_block() {
        let mut grid = grid64();
        let tile = signalled_x(&mut grid, 30, 30, SignalType::Normal);

        let mut seen = Vec::new();
        for _ in 0..3 {
            rail::cycle_signal_side(&mut grid, tile, Track::X);
            seen.push(rail::present_signals(&grid, tile));
        }
        assert_eq!(seen, [0x8, 0x4, 0xC]);
    }

    // Tests reading and writing states through trackdirs
    #[test]
    fn test_signal_state_by_trackdir() {
        let mut grid = grid64();
        let tile = signalled_x(&mut grid, 31, 30, SignalType::Normal);
        rail::set_signal_states(&mut grid, tile, 0);

        assert!(rail::has_signal_on_track(&grid, tile, Track::X));
        // X and Y share the upper signal slots of the pair
        assert!(rail::has_signal_on_track(&grid, tile, Track::Y));
        assert!(!rail::has_signal_on_track(&grid, tile, Track::Lower));
        assert!(rail::has_signal_on_trackdir(&grid, tile, Trackdir::XNe));
        assert!(rail::has_signal_on_trackdir(&grid, tile, Trackdir::XSw));

        rail::set_signal_state_by_trackdir(&mut grid, tile, Trackdir::XNe, SignalState::Green);
        assert_eq!(rail::signal_state_by_trackdir(&grid, tile, Trackdir::XNe), SignalState::Green);
        assert_eq!(rail::signal_state_by_trackdir(&grid, tile, Trackdir::XSw), SignalState::Red);
        assert_eq!(rail::signal_states(&grid, tile), Trackdir::XNe.signal_along());
        assert_eq!(
            rail::single_signal_state(&grid, tile, 3),
            SignalState::Green
        );

        rail::set_signal_state_by_trackdir(&mut grid, tile, Trackdir::XNe, SignalState::Red);
        assert_eq!(rail::signal_states(&grid, tile), 0);
    }

    // Tests the one-way and path queries, which accept any tile kind
    #[test]
    fn test_oneway_and_pbs_queries() {
        let mut grid = grid64();
        let pbs = signalled_x(&mut grid, 40, 40, SignalType::PbsOneway);
        // Keep only the signal facing trains heading north-east
        rail::set_present_signals(&mut grid, pbs, Trackdir::XNe.signal_along());

        assert!(rail::has_pbs_signal_on_trackdir(&grid, pbs, Trackdir::XNe));
        assert!(!rail::has_pbs_signal_on_trackdir(&grid, pbs, Trackdir::XSw));
        assert!(rail::has_oneway_signal_blocking_trackdir(&grid, pbs, Trackdir::XSw));
        assert!(!rail::has_oneway_signal_blocking_trackdir(&grid, pbs, Trackdir::XNe));

        let grass = at(&grid, 41, 40);
        assert!(!rail::has_pbs_signal_on_trackdir(&grid, grass, Trackdir::XNe));
        assert!(!rail::has_oneway_signal_blocking_trackdir(&grid, grass, Trackdir::XNe));
    }

    #[test]
    #[should_panic(expected = "has no signals")]
    fn test_signal_type_without_signals_panics() {
        let mut grid = grid64();
        let tile = at(&grid, 20, 20);
        rail::make_rail_normal(&mut grid, tile, Owner::company(0), TrackBits::X, RailType::RAIL);
        let _ = rail::signal_type(&grid, tile, Track::X);
    }

    #[test]
    #[should_panic(expected = "carries no rail")]
    fn test_rail_type_on_grass_panics() {
        let grid = grid64();
        let _ = rail::rail_type(&grid, at(&grid, 20, 20));
    }
}
