//! Road pieces, road types and one-way restrictions

use bitflags::bitflags;

use crate::map::direction::{Axis, DiagDirection};

raw_enum! {
    /// Road or tram
    pub enum RoadType {
        /// Road for road vehicles
        Road = 0,
        /// Tram track
        Tram = 1,
    }
}

raw_enum! {
    /// Directions in which driving along a one-way road is forbidden
    pub enum DisallowedRoadDirections {
        /// Two-way road
        None = 0,
        /// No driving towards the south
        Southbound = 1,
        /// No driving towards the north
        Northbound = 2,
        /// Closed both ways
        Both = 3,
    }
}

bitflags! {
    /// Set of road types present on a tile
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RoadTypes: u8 {
        /// Road
        const ROAD = 1 << 0;
        /// Tram
        const TRAM = 1 << 1;
        /// Both
        const ALL = Self::ROAD.bits() | Self::TRAM.bits();
    }
}

bitflags! {
    /// Road pieces on a tile, one bit per half-tile towards an edge
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RoadBits: u8 {
        /// Towards the north-west edge
        const NW = 1 << 0;
        /// Towards the south-west edge
        const SW = 1 << 1;
        /// Towards the south-east edge
        const SE = 1 << 2;
        /// Towards the north-east edge
        const NE = 1 << 3;
        /// Straight along the X axis
        const X = Self::SW.bits() | Self::NE.bits();
        /// Straight along the Y axis
        const Y = Self::NW.bits() | Self::SE.bits();
        /// Corner piece at the north
        const N = Self::NE.bits() | Self::NW.bits();
        /// Corner piece at the east
        const E = Self::NE.bits() | Self::SE.bits();
        /// Corner piece at the south
        const S = Self::SE.bits() | Self::SW.bits();
        /// Corner piece at the west
        const W = Self::NW.bits() | Self::SW.bits();
        /// Full crossing
        const ALL = 0x0F;
    }
}

impl RoadType {
    /// Single-type set holding this road type
    pub const fn types(self) -> RoadTypes {
        RoadTypes::from_bits_retain(1 << self as u8)
    }
}

impl RoadBits {
    /// The half-tile piece towards edge `dir`
    pub const fn from_diag_dir(dir: DiagDirection) -> Self {
        Self::from_bits_retain(Self::NW.bits() << (3 ^ dir as u8))
    }

    /// Straight piece along `axis`
    pub const fn from_axis(axis: Axis) -> Self {
        match axis {
            Axis::X => Self::X,
            Axis::Y => Self::Y,
        }
    }
}
