//! Utility helpers for the server.
//!
//! Element set parsing, mapping of database models to wire records and request field
//! validation.

pub mod format;
pub mod tle;
pub mod validate;
