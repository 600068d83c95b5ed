//! Service layer for business logic and orchestration.
//!
//! Services validate requests, coordinate repositories (opening a transaction when a
//! mutation spans several tables) and format results into the wire DTOs.

pub mod group;
pub mod satellite;
pub mod scene;
pub mod seed;
