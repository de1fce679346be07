//! Tests for slopes and corners

#[cfg(test)]
mod tests {
    use tilegrid::map::slope::{Corner, Slope};

    // Tests the single-corner slopes against their corners
    #[test]
    fn test_one_corner_raised() {
        for &corner in Corner::ALL {
            let slope = Slope::with_one_corner_raised(corner);
            assert!(slope.is_one_corner_raised(), "{corner:?}");
            assert_eq!(slope.max_z(), 1);
            assert_eq!(corner.opposite().opposite(), corner);
        }
        assert_eq!(Slope::with_one_corner_raised(Corner::N), Slope::N);
        assert!(!Slope::NE.is_one_corner_raised());
        assert!(!Slope::STEEP_N.is_one_corner_raised());
    }

    // Tests the height span of each slope class
    #[test]
    fn test_max_z() {
        assert_eq!(Slope::FLAT.max_z(), 0);
        assert_eq!(Slope::EW.max_z(), 1);
        assert_eq!(Slope::STEEP_W.max_z(), 2);
        assert!(Slope::STEEP_W.is_steep());
        assert!(!Slope::NWS.is_steep());
    }

    // Tests that inverting flips the raised corners
    #[test]
    fn test_inverted() {
        assert_eq!(Slope::N.inverted(), Slope::WSE);
        assert_eq!(Slope::FLAT.inverted(), Slope::ELEVATED);
        assert_eq!(Slope::NS.inverted(), Slope::EW);
    }

    // Tests that inverting keeps the steep marker and the half-tile bits
    #[test]
    fn test_inverted_keeps_steep() {
        let inverted = Slope::STEEP_N.inverted();
        assert!(inverted.is_steep());
        assert_eq!(inverted, Slope::STEEP | Slope::S);
        assert_eq!(inverted.inverted(), Slope::STEEP_N);

        let half = Slope::HALFTILE | Slope::N;
        assert_eq!(half.inverted(), Slope::HALFTILE | Slope::WSE);
    }

    // Tests the half-tile marker
    #[test]
    fn test_halftile() {
        let half = Slope::HALFTILE | Slope::from_bits_retain(Corner::E.raw() << 6);
        assert!(half.is_halftile());
        assert!(!Slope::STEEP_S.is_halftile());
        assert_eq!(half & Slope::HALFTILE_MASK, half);
    }
}
