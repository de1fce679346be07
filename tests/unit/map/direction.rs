//! Tests for compass directions and axes

#[cfg(test)]
mod tests {
    use tilegrid::map::direction::{TILEOFFS_BY_DIAGDIR, TILEOFFS_BY_DIR};
    use tilegrid::{Axis, DiagDirection, Direction, TileIndexDiffC};

    // Tests that reversing twice is a no-op and cancels the offset
    #[test]
    fn test_reverse_is_involution() {
        for &dir in DiagDirection::ALL {
            assert_eq!(dir.reverse().reverse(), dir);
            assert_eq!(dir.reverse().axis(), dir.axis());
            let (a, b) = (dir.offset(), dir.reverse().offset());
            assert_eq!((a.x + b.x, a.y + b.y), (0, 0));
        }
        for &dir in Direction::ALL {
            assert_eq!(dir.reverse().reverse(), dir);
            let (a, b) = (dir.offset(), dir.reverse().offset());
            assert_eq!((a.x + b.x, a.y + b.y), (0, 0));
        }
    }

    // Tests the edge offsets
    #[test]
    fn test_edge_offsets() {
        assert_eq!(DiagDirection::NE.offset(), TileIndexDiffC::new(-1, 0));
        assert_eq!(DiagDirection::SE.offset(), TileIndexDiffC::new(0, 1));
        assert_eq!(DiagDirection::SW.offset(), TileIndexDiffC::new(1, 0));
        assert_eq!(DiagDirection::NW.offset(), TileIndexDiffC::new(0, -1));
        assert_eq!(TILEOFFS_BY_DIAGDIR.len(), DiagDirection::ALL.len());
    }

    // Tests the corner offsets
    #[test]
    fn test_corner_offsets() {
        assert_eq!(Direction::N.offset(), TileIndexDiffC::new(-1, -1));
        assert_eq!(Direction::E.offset(), TileIndexDiffC::new(-1, 1));
        assert_eq!(Direction::S.offset(), TileIndexDiffC::new(1, 1));
        assert_eq!(Direction::W.offset(), TileIndexDiffC::new(1, -1));
        assert_eq!(TILEOFFS_BY_DIR.len(), Direction::ALL.len());
    }

    // Tests that edge directions agree between the four and the eight
    #[test]
    fn test_edge_directions_agree() {
        for &dir in DiagDirection::ALL {
            assert_eq!(dir.to_direction().offset(), dir.offset());
            assert_eq!(dir.to_direction().to_diag_dir(), Some(dir));
        }
        for dir in [Direction::N, Direction::E, Direction::S, Direction::W] {
            assert_eq!(dir.to_diag_dir(), None);
        }
    }

    // Tests axis conversions
    #[test]
    fn test_axes() {
        assert_eq!(Axis::X.other(), Axis::Y);
        assert_eq!(Axis::Y.other(), Axis::X);
        assert_eq!(Axis::X.to_diag_dir(), DiagDirection::SW);
        assert_eq!(Axis::Y.to_diag_dir(), DiagDirection::SE);
        for &dir in DiagDirection::ALL {
            let south = matches!(dir, DiagDirection::SE | DiagDirection::SW);
            assert_eq!(DiagDirection::from_axis(dir.axis(), south), dir);
        }
    }
}
