//! Test fixture modules for database record creation.
//!
//! - `satellite` - Satellite records built from the element set constants
//! - `group` - Group records and satellite to group associations

pub mod group;
pub mod satellite;
