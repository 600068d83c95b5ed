//! Wire-format data transfer objects.
//!
//! Every request body, query string and response payload exchanged over the HTTP API is
//! declared here. Field names are serialized in camelCase to match the web client.

pub mod api;
pub mod group;
pub mod satellite;
pub mod scene;
