//! Tile slopes and corners

use bitflags::bitflags;

raw_enum! {
    /// Corner of a tile
    pub enum Corner {
        /// West corner
        W = 0,
        /// South corner
        S = 1,
        /// East corner
        E = 2,
        /// North corner
        N = 3,
    }
}

bitflags! {
    /// Raised corners of a tile, plus the steep and half-tile markers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Slope: u8 {
        /// West corner raised
        const W = 0x01;
        /// South corner raised
        const S = 0x02;
        /// East corner raised
        const E = 0x04;
        /// North corner raised
        const N = 0x08;
        /// One corner is two levels above the opposite one
        const STEEP = 0x10;
        /// North and west corners raised
        const NW = Self::N.bits() | Self::W.bits();
        /// South and west corners raised
        const SW = Self::S.bits() | Self::W.bits();
        /// South and east corners raised
        const SE = Self::S.bits() | Self::E.bits();
        /// North and east corners raised
        const NE = Self::N.bits() | Self::E.bits();
        /// East and west corners raised
        const EW = Self::E.bits() | Self::W.bits();
        /// North and south corners raised
        const NS = Self::N.bits() | Self::S.bits();
        /// All four corners raised, used as a mask
        const ELEVATED = 0x0F;
        /// All corners but east raised
        const NWS = Self::N.bits() | Self::W.bits() | Self::S.bits();
        /// All corners but north raised
        const WSE = Self::W.bits() | Self::S.bits() | Self::E.bits();
        /// All corners but west raised
        const SEN = Self::S.bits() | Self::E.bits() | Self::N.bits();
        /// All corners but south raised
        const ENW = Self::E.bits() | Self::N.bits() | Self::W.bits();
        /// Steep slope peaking at the west corner
        const STEEP_W = Self::STEEP.bits() | Self::NWS.bits();
        /// Steep slope peaking at the south corner
        const STEEP_S = Self::STEEP.bits() | Self::WSE.bits();
        /// Steep slope peaking at the east corner
        const STEEP_E = Self::STEEP.bits() | Self::SEN.bits();
        /// Steep slope peaking at the north corner
        const STEEP_N = Self::STEEP.bits() | Self::ENW.bits();
        /// Half of the tile is levelled; the corner sits in the top two bits
        const HALFTILE = 0x20;
        /// Mask of the half-tile marker and its corner
        const HALFTILE_MASK = 0xE0;
    }
}

impl Slope {
    /// No corner raised
    pub const FLAT: Self = Self::empty();

    /// Slope with only `corner` raised
    pub const fn with_one_corner_raised(corner: Corner) -> Self {
        Self::from_bits_retain(1 << corner as u8)
    }

    /// Whether this is a steep slope
    pub const fn is_steep(self) -> bool {
        self.contains(Self::STEEP)
    }

    /// Whether half of the tile is levelled
    pub const fn is_halftile(self) -> bool {
        self.contains(Self::HALFTILE)
    }

    /// Slope with every corner flipped; the steep marker is kept
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self::from_bits_retain(self.bits() ^ Self::ELEVATED.bits())
    }

    /// Whether exactly one corner is raised and the slope is not steep
    pub const fn is_one_corner_raised(self) -> bool {
        matches!(self.bits(), 0x01 | 0x02 | 0x04 | 0x08)
    }

    /// Height of the highest corner above the lowest one
    pub const fn max_z(self) -> u32 {
        if self.is_empty() {
            0
        } else if self.is_steep() {
            2
        } else {
            1
        }
    }
}

impl Corner {
    /// The corner diagonally across the tile
    pub const fn opposite(self) -> Self {
        match self {
            Self::W => Self::E,
            Self::S => Self::N,
            Self::E => Self::W,
            Self::N => Self::S,
        }
    }
}
