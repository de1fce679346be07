//! Tracks and trackdirs
//!
//! A tile holds up to six track pieces: the two diagonals (X, Y) and the
//! four half-tile pieces along its edges. A trackdir is a track plus a
//! direction of travel; bit 3 of a trackdir selects the reverse direction.

use bitflags::bitflags;

use crate::map::direction::{Axis, DiagDirection};

raw_enum! {
    /// One of the six track pieces of a tile
    pub enum Track {
        /// Along the X axis, north-east to south-west
        X = 0,
        /// Along the Y axis, north-west to south-east
        Y = 1,
        /// In the upper (north) corner
        Upper = 2,
        /// In the lower (south) corner
        Lower = 3,
        /// In the left (west) corner
        Left = 4,
        /// In the right (east) corner
        Right = 5,
    }
}

raw_enum! {
    /// A track with a direction of travel
    pub enum Trackdir {
        /// X axis towards north-east
        XNe = 0,
        /// Y axis towards south-east
        YSe = 1,
        /// Upper track towards east
        UpperE = 2,
        /// Lower track towards east
        LowerE = 3,
        /// Left track towards south
        LeftS = 4,
        /// Right track towards south
        RightS = 5,
        /// Road vehicle reversing at the north-east end
        RvrevNe = 6,
        /// Road vehicle reversing at the south-east end
        RvrevSe = 7,
        /// X axis towards south-west
        XSw = 8,
        /// Y axis towards north-west
        YNw = 9,
        /// Upper track towards west
        UpperW = 10,
        /// Lower track towards west
        LowerW = 11,
        /// Left track towards north
        LeftN = 12,
        /// Right track towards north
        RightN = 13,
        /// Road vehicle reversing at the south-west end
        RvrevSw = 14,
        /// Road vehicle reversing at the north-west end
        RvrevNw = 15,
    }
}

bitflags! {
    /// Set of track pieces on a tile
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TrackBits: u8 {
        /// X track
        const X = 1 << 0;
        /// Y track
        const Y = 1 << 1;
        /// Upper track
        const UPPER = 1 << 2;
        /// Lower track
        const LOWER = 1 << 3;
        /// Left track
        const LEFT = 1 << 4;
        /// Right track
        const RIGHT = 1 << 5;
        /// Both diagonal tracks
        const CROSS = Self::X.bits() | Self::Y.bits();
        /// Upper and lower tracks
        const HORZ = Self::UPPER.bits() | Self::LOWER.bits();
        /// Left and right tracks
        const VERT = Self::LEFT.bits() | Self::RIGHT.bits();
        /// All six tracks
        const ALL = 0x3F;
        /// Vehicle is inside a tunnel or on a bridge
        const WORMHOLE = 0x40;
        /// Vehicle is inside a depot
        const DEPOT = 0x80;
    }
}

bitflags! {
    /// Set of trackdirs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TrackdirBits: u16 {
        /// Every trackdir a train can take, in both directions
        const ALL = 0x3F3F;
    }
}

// Presence bit of the signal facing along each trackdir, within a track
// pair; the reversing trackdirs carry no signal
const SIGNAL_ALONG_TRACKDIR: [u8; 16] = [
    0x8, 0x8, 0x8, 0x2, 0x4, 0x1, 0, 0, 0x4, 0x4, 0x4, 0x1, 0x8, 0x2, 0, 0,
];
const SIGNAL_AGAINST_TRACKDIR: [u8; 16] = [
    0x4, 0x4, 0x4, 0x1, 0x8, 0x2, 0, 0, 0x8, 0x8, 0x8, 0x2, 0x4, 0x1, 0, 0,
];
const SIGNAL_ON_TRACK: [u8; 6] = [0xC, 0xC, 0xC, 0x3, 0xC, 0x3];

impl Track {
    /// Single-bit set holding this track
    pub const fn bits(self) -> TrackBits {
        TrackBits::from_bits_retain(1 << self as u8)
    }

    /// The track that, together with this one, covers a track pair
    ///
    /// X pairs with Y, upper with lower, left with right.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
            Self::Upper => Self::Lower,
            Self::Lower => Self::Upper,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Diagonal track along an axis
    pub const fn from_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
        }
    }

    /// Diagonal track leaving a tile across edge `dir`
    pub const fn from_diag_dir(dir: DiagDirection) -> Self {
        Self::from_axis(dir.axis())
    }

    /// Whether the track belongs to the second signal slot of its pair
    pub const fn is_lower_or_right(self) -> bool {
        matches!(self, Self::Lower | Self::Right)
    }

    /// Signal presence bits of both signals on this track
    pub const fn signal_bits(self) -> u8 {
        SIGNAL_ON_TRACK[self as usize]
    }

    /// Trackdir along this track in its default direction
    pub const fn to_trackdir(self) -> Trackdir {
        match self {
            Self::X => Trackdir::XNe,
            Self::Y => Trackdir::YSe,
            Self::Upper => Trackdir::UpperE,
            Self::Lower => Trackdir::LowerE,
            Self::Left => Trackdir::LeftS,
            Self::Right => Trackdir::RightS,
        }
    }
}

impl TrackBits {
    /// Lowest track in the set
    pub fn first_track(self) -> Option<Track> {
        let bits = (self & Self::ALL).bits();
        if bits == 0 {
            return None;
        }
        Track::from_raw(bits.trailing_zeros() as u8)
    }

    /// Tracks in the set, lowest first
    pub fn tracks(self) -> impl Iterator<Item = Track> {
        Track::ALL
            .iter()
            .copied()
            .filter(move |track| self.contains(track.bits()))
    }

    /// Whether the tracks in the set cross or join each other
    ///
    /// A single track never overlaps; two parallel half-tile tracks do not
    /// either.
    pub fn overlap(self) -> bool {
        if self.bits().count_ones() < 2 {
            return false;
        }
        self != Self::HORZ && self != Self::VERT
    }

    /// The same tracks in both directions of travel
    pub const fn to_trackdir_bits(self) -> TrackdirBits {
        let bits = (self.bits() & Self::ALL.bits()) as u16;
        TrackdirBits::from_bits_retain(bits * 0x101)
    }
}

impl Trackdir {
    /// The track this trackdir runs on
    ///
    /// # Panics
    ///
    /// Panics on the road-vehicle reversing trackdirs, which lie on no track
    pub fn track(self) -> Track {
        Track::decode(self as u8 & 7)
    }

    /// Same track, opposite direction
    #[must_use]
    pub fn reverse(self) -> Self {
        Self::decode(self as u8 ^ 8)
    }

    /// Diagonal trackdir leaving a tile across edge `dir`
    pub const fn from_diag_dir(dir: DiagDirection) -> Self {
        match dir {
            DiagDirection::NE => Self::XNe,
            DiagDirection::SE => Self::YSe,
            DiagDirection::SW => Self::XSw,
            DiagDirection::NW => Self::YNw,
        }
    }

    /// Whether this is a road-vehicle reversing trackdir
    pub const fn is_reversing(self) -> bool {
        matches!(self as u8 & 7, 6 | 7)
    }

    /// Presence bit of the signal that faces a train running along this trackdir
    pub const fn signal_along(self) -> u8 {
        SIGNAL_ALONG_TRACKDIR[self as usize]
    }

    /// Presence bit of the signal that faces a train running against this trackdir
    pub const fn signal_against(self) -> u8 {
        SIGNAL_AGAINST_TRACKDIR[self as usize]
    }

    /// Single-bit set holding this trackdir
    pub const fn bits(self) -> TrackdirBits {
        TrackdirBits::from_bits_retain(1 << self as u8)
    }
}
