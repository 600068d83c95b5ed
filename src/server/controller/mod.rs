//! HTTP controller endpoints for the satdeck web API.
//!
//! Axum handlers for satellites, groups and the scene batch operations. Handlers extract and
//! validate the request, call a service and wrap the result in the `{ code, message, data }`
//! envelope. Extractor rejections are converted into validation errors so malformed requests
//! receive the same envelope. Every handler carries a utoipa path annotation.

pub mod group;
pub mod satellite;
pub mod scene;
