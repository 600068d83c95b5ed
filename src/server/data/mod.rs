//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table each and are generic over
//! [`sea_orm::ConnectionTrait`] so services can run them on a connection or inside
//! a transaction.

pub mod group;
pub mod satellite;
pub mod satellite_group;
