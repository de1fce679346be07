//! Configuration, error types and raw record access
//!
//! Nothing in here knows what a tile kind means. The constants fix the map
//! envelope, [`error`] covers the few fallible entry points, and
//! [`snapshot`] gives a persistence layer byte-level access to the records.

/// Engine constants and map configuration
pub mod configuration;
/// Error type and result alias
pub mod error;
/// Raw byte access to tile records
pub mod snapshot;
