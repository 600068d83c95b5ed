//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main satdeck crate to keep signatures consistent
//! across tests.

/// Type alias for satellite database model.
pub type SatelliteModel = entity::satellite::Model;

/// Type alias for group database model.
pub type GroupModel = entity::group::Model;

/// Type alias for satellite to group association model.
pub type SatelliteGroupModel = entity::satellite_group::Model;
