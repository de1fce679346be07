//! Rail, road and signal vocabulary shared by several tile kinds

/// Road bits, road types and one-way restrictions
pub mod road;
/// Signal types, variants and the per-trackdir signal masks
pub mod signal;
/// Tracks, trackdirs and their bit sets
pub mod track;

pub use road::{DisallowedRoadDirections, RoadBits, RoadType, RoadTypes};
pub use signal::{SignalState, SignalType, SignalVariant};
pub use track::{Track, TrackBits, Trackdir, TrackdirBits};

raw_enum! {
    /// Kind of transport a tunnel, bridge or depot serves
    pub enum TransportType {
        /// Trains
        Rail = 0,
        /// Road vehicles and trams
        Road = 1,
        /// Ships
        Water = 2,
        /// Aircraft
        Air = 3,
    }
}

/// Rail type of a track piece, an index into the rail type table
///
/// Stored in four bits; only the first four types are built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RailType(pub u8);

impl RailType {
    /// Standard rail
    pub const RAIL: Self = Self(0);
    /// Electrified rail
    pub const ELECTRIC: Self = Self(1);
    /// Monorail
    pub const MONO: Self = Self(2);
    /// Maglev
    pub const MAGLEV: Self = Self(3);
    /// One past the last storable rail type
    pub const END: Self = Self(16);
    /// Marker for "no rail type"
    pub const INVALID: Self = Self(0xFF);
}
