//! Server application models.
//!
//! Application state shared with every handler and type aliases for the SeaORM models.

pub mod app;
pub mod db;
