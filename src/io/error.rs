//! Error types for the fallible grid entry points
//!
//! Only input that arrives from outside the engine can fail softly: map
//! configuration and raw record arrays handed over by a loader. Misuse of
//! the accessors is a programming error and panics instead.

use thiserror::Error;

/// Main error type for grid construction and raw record import
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Map axis is not a power of two within the size envelope
    #[error("Invalid map size {size} on axis {axis}: must be a power of two between 64 and 4096")]
    InvalidMapSize {
        /// Axis that failed validation
        axis: &'static str,
        /// Requested size along that axis
        size: u32,
    },

    /// Imported record arrays do not match the map size
    #[error(
        "Record count mismatch: map needs {expected} tiles, got {tiles} core and {extended} extended records"
    )]
    RecordCountMismatch {
        /// Tile count implied by the map size
        expected: usize,
        /// Length of the core record array
        tiles: usize,
        /// Length of the extended record array
        extended: usize,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
