//! Server application core modules.
//!
//! HTTP routing, request handling, business logic and persistence for the satellite
//! catalogue service.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
