//! Packed tile-grid storage engine for transport-simulation maps
//!
//! The map is a power-of-two rectangle of fixed-size tile records. Every cell
//! carries a type tag and a handful of small numeric fields whose meaning is
//! decided by that tag; the per-kind accessor modules under [`kinds`] are the
//! only sanctioned way to read or write those fields.

#![forbid(unsafe_code)]

/// Declares a `#[repr(u8)]` enum stored in a tile bit field, with raw
/// conversions in both directions
macro_rules! raw_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant = $value ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Decode a raw stored value, if it names a variant
            #[must_use]
            pub const fn from_raw(raw: u8) -> Option<Self> {
                match raw {
                    $( $value => Some(Self::$variant), )+
                    _ => None,
                }
            }

            /// Value as stored in the tile record
            #[must_use]
            pub const fn raw(self) -> u8 {
                self as u8
            }

            /// Decode a value read back from a record; a value outside the
            /// enum means the record is corrupt
            #[allow(dead_code)]
            pub(crate) fn decode(raw: u8) -> Self {
                match Self::from_raw(raw) {
                    Some(value) => value,
                    None => panic!(concat!("corrupt ", stringify!($name), " field value {}"), raw),
                }
            }
        }
    };
}

/// Per-region collections of tiles and their iterators
pub mod area;
/// Configuration, errors and raw record access
pub mod io;
/// Per-kind tile accessors
pub mod kinds;
/// Map geometry, the grid store and map-wide algorithms
pub mod map;
/// Tile record layout and the bit-field primitives behind it
pub mod tile;
/// Rail, road and signal vocabulary shared by several tile kinds
pub mod transport;

pub use io::configuration::MapConfig;
pub use io::error::{GridError, Result};
pub use map::direction::{Axis, DiagDirection, Direction};
pub use map::geometry::{Geometry, TileIndex, TileIndexDiff, TileIndexDiffC};
pub use map::grid::Grid;
pub use tile::owner::Owner;
pub use tile::record::{TileType, TropicZone};
