//! Core and extended tile records

raw_enum! {
    /// Type tag of a tile, stored in bits 4..7 of the type byte
    pub enum TileType {
        /// Bare land: grass, rough land, rocks, fields, snow or desert
        Clear = 0,
        /// Rail track, signals or a rail depot
        Railway = 1,
        /// Road, level crossing or road depot
        Road = 2,
        /// Part of a town house
        House = 3,
        /// Trees
        Trees = 4,
        /// Station, waypoint, airport, dock, buoy or oil rig tile
        Station = 5,
        /// Sea, canal, river, coast, lock or ship depot
        Water = 6,
        /// Outside the playable area
        Void = 7,
        /// Part of an industry
        Industry = 8,
        /// Tunnel portal or bridge ramp
        TunnelBridge = 9,
        /// Stand-alone object such as a transmitter or lighthouse
        Object = 10,
    }
}

raw_enum! {
    /// Climate zone of a tile in the sub-tropical climate
    pub enum TropicZone {
        /// Neither desert nor rainforest
        Normal = 0,
        /// Desert
        Desert = 1,
        /// Rainforest
        Rainforest = 2,
    }
}

/// Core tile record
///
/// `type_bits` holds the type tag (bits 4..7), the bridge-above flags (bits
/// 2..3) and the tropic zone (bits 0..1). `height` is the height of the
/// north corner. The remaining fields are kind-specific.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Type tag, bridge-above flags and tropic zone
    pub type_bits: u8,
    /// Height of the north corner
    pub height: u8,
    /// Kind-specific, usually an index into a pool
    pub m2: u16,
    /// Owner and water class, or kind-specific
    pub m1: u8,
    /// Kind-specific
    pub m3: u8,
    /// Kind-specific
    pub m4: u8,
    /// Kind-specific, usually the sub-type
    pub m5: u8,
}

/// Extended tile record, stored in a parallel array
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TileExtended {
    /// Kind-specific
    pub m6: u8,
    /// Kind-specific, also the animation frame of animated kinds
    pub m7: u8,
}
