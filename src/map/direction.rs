//! Compass directions, axes and their tile offsets
//!
//! The map's x axis runs from north-east to south-west and its y axis from
//! north-west to south-east, so north is the corner at (0, 0).

use crate::map::geometry::TileIndexDiffC;

raw_enum! {
    /// One of the four edge directions of a tile
    pub enum DiagDirection {
        /// North-east, towards decreasing x
        NE = 0,
        /// South-east, towards increasing y
        SE = 1,
        /// South-west, towards increasing x
        SW = 2,
        /// North-west, towards decreasing y
        NW = 3,
    }
}

raw_enum! {
    /// One of the eight directions, corners included
    pub enum Direction {
        /// North
        N = 0,
        /// North-east
        NE = 1,
        /// East
        E = 2,
        /// South-east
        SE = 3,
        /// South
        S = 4,
        /// South-west
        SW = 5,
        /// West
        W = 6,
        /// North-west
        NW = 7,
    }
}

raw_enum! {
    /// Map axis
    pub enum Axis {
        /// Runs north-east to south-west
        X = 0,
        /// Runs north-west to south-east
        Y = 1,
    }
}

/// Offsets of the neighbour across each tile edge, indexed by [`DiagDirection`]
pub const TILEOFFS_BY_DIAGDIR: [TileIndexDiffC; 4] = [
    TileIndexDiffC::new(-1, 0),
    TileIndexDiffC::new(0, 1),
    TileIndexDiffC::new(1, 0),
    TileIndexDiffC::new(0, -1),
];

/// Offsets of the neighbour in each direction, indexed by [`Direction`]
pub const TILEOFFS_BY_DIR: [TileIndexDiffC; 8] = [
    TileIndexDiffC::new(-1, -1),
    TileIndexDiffC::new(-1, 0),
    TileIndexDiffC::new(-1, 1),
    TileIndexDiffC::new(0, 1),
    TileIndexDiffC::new(1, 1),
    TileIndexDiffC::new(1, 0),
    TileIndexDiffC::new(1, -1),
    TileIndexDiffC::new(0, -1),
];

impl DiagDirection {
    /// Direction pointing the other way
    pub const fn reverse(self) -> Self {
        match self {
            Self::NE => Self::SW,
            Self::SE => Self::NW,
            Self::SW => Self::NE,
            Self::NW => Self::SE,
        }
    }

    /// Axis this direction runs along
    pub const fn axis(self) -> Axis {
        match self {
            Self::NE | Self::SW => Axis::X,
            Self::SE | Self::NW => Axis::Y,
        }
    }

    /// Offset to the neighbour across this edge
    pub const fn offset(self) -> TileIndexDiffC {
        TILEOFFS_BY_DIAGDIR[self as usize]
    }

    /// Same direction among the eight
    pub const fn to_direction(self) -> Direction {
        match self {
            Self::NE => Direction::NE,
            Self::SE => Direction::SE,
            Self::SW => Direction::SW,
            Self::NW => Direction::NW,
        }
    }

    /// Direction along `axis`, to its northern end unless `south` is set
    pub const fn from_axis(axis: Axis, south: bool) -> Self {
        match (axis, south) {
            (Axis::X, false) => Self::NE,
            (Axis::X, true) => Self::SW,
            (Axis::Y, false) => Self::NW,
            (Axis::Y, true) => Self::SE,
        }
    }
}

impl Direction {
    /// Direction pointing the other way
    pub const fn reverse(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::NE => Self::SW,
            Self::E => Self::W,
            Self::SE => Self::NW,
            Self::S => Self::N,
            Self::SW => Self::NE,
            Self::W => Self::E,
            Self::NW => Self::SE,
        }
    }

    /// Offset to the neighbour in this direction
    pub const fn offset(self) -> TileIndexDiffC {
        TILEOFFS_BY_DIR[self as usize]
    }

    /// The edge direction, when this direction crosses an edge rather than a corner
    pub const fn to_diag_dir(self) -> Option<DiagDirection> {
        match self {
            Self::NE => Some(DiagDirection::NE),
            Self::SE => Some(DiagDirection::SE),
            Self::SW => Some(DiagDirection::SW),
            Self::NW => Some(DiagDirection::NW),
            Self::N | Self::E | Self::S | Self::W => None,
        }
    }
}

impl Axis {
    /// The perpendicular axis
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Direction along this axis towards its southern end
    pub const fn to_diag_dir(self) -> DiagDirection {
        DiagDirection::from_axis(self, true)
    }
}
