//! Database model type aliases.
//!
//! Shorthands for the SeaORM models generated in the `entity` crate.

/// Type alias for the satellite database model.
///
/// # Fields (from `entity::satellite::Model`)
/// - `id` - Primary key
/// - `name` - Satellite name
/// - `line1` / `line2` - The two lines of the element set
/// - `status` - Application status flag, 1 for active
/// - `created_at` / `updated_at` - Server assigned timestamps
pub type SatelliteModel = entity::satellite::Model;

/// Type alias for the group database model.
///
/// # Fields (from `entity::group::Model`)
/// - `id` - Primary key
/// - `group_name` - Unique group name
/// - `description` - Optional description
/// - `status` - Application status flag, 1 for enabled
/// - `created_at` / `updated_at` - Server assigned timestamps
pub type GroupModel = entity::group::Model;
