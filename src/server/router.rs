//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module registers every API endpoint with its OpenAPI specification via utoipa and
//! serves Swagger UI at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /api/satellites` - Paginated satellite list
/// - `POST /api/satellites` - Create a satellite
/// - `GET|PUT|DELETE /api/satellites/{id}` - Satellite detail, replace and delete
/// - `GET /api/satellites/{id}/export-tle` - Element set text export
/// - `GET|POST /api/groups` - Group list and create
/// - `GET|PUT|DELETE /api/groups/{id}` - Group detail, replace and delete
/// - `GET|POST|DELETE /api/groups/{id}/satellites` - Group members, associate, disassociate
/// - `POST /api/scene/orbital-params` - Batch orbital parameters
/// - `POST /api/scene/sync-tle` - Element set synchronisation
///
/// The OpenAPI document is served at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::from(db));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Satdeck", description = "Satellite catalogue API"), tags(
        (name = controller::satellite::SATELLITE_TAG, description = "Satellite catalogue routes"),
        (name = controller::group::GROUP_TAG, description = "Satellite group routes"),
        (name = controller::scene::SCENE_TAG, description = "Scene batch routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::satellite::get_satellites,
            controller::satellite::create_satellite
        ))
        .routes(routes!(
            controller::satellite::get_satellite,
            controller::satellite::update_satellite,
            controller::satellite::delete_satellite
        ))
        .routes(routes!(controller::satellite::export_satellite_tle))
        .routes(routes!(
            controller::group::get_groups,
            controller::group::create_group
        ))
        .routes(routes!(
            controller::group::get_group,
            controller::group::update_group,
            controller::group::delete_group
        ))
        .routes(routes!(
            controller::group::get_group_satellites,
            controller::group::associate_satellites,
            controller::group::disassociate_satellites
        ))
        .routes(routes!(controller::scene::get_orbital_params))
        .routes(routes!(controller::scene::sync_tle))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
