//! Tile owner identifiers

use std::fmt;

/// Owner of a tile or of the road/tram pieces on it
///
/// Companies are numbered from zero; the remaining values are the special
/// owners below. Stored in five bits, so [`Owner::INVALID`] never reaches a
/// record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Owner(pub u8);

impl Owner {
    /// First company
    pub const COMPANY_FIRST: Self = Self(0x00);
    /// Maximum number of companies
    pub const MAX_COMPANIES: u8 = 0x0F;
    /// A town owns the tile, or the road on it
    pub const TOWN: Self = Self(0x0F);
    /// Nobody owns the tile
    pub const NONE: Self = Self(0x10);
    /// The tile is owned by water
    pub const WATER: Self = Self(0x11);
    /// The tile is owned by the script deity
    pub const DEITY: Self = Self(0x12);
    /// Marker for an unset owner
    pub const INVALID: Self = Self(0xFF);

    /// Owner for company number `n`
    ///
    /// # Panics
    ///
    /// Panics when `n` is not a company number
    pub const fn company(n: u8) -> Self {
        assert!(n < Self::MAX_COMPANIES, "company number out of range");
        Self(n)
    }

    /// Whether this owner is one of the companies
    pub const fn is_company(self) -> bool {
        self.0 < Self::MAX_COMPANIES
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::TOWN => write!(f, "town"),
            Self::NONE => write!(f, "none"),
            Self::WATER => write!(f, "water"),
            Self::DEITY => write!(f, "deity"),
            Self::INVALID => write!(f, "invalid"),
            Self(n) => write!(f, "company {n}"),
        }
    }
}
