use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, SatelliteIdsDto},
        scene::{OrbitalParamsBatchDto, SyncResultDto},
    },
    server::{error::Error, model::app::AppState, service::scene::SceneService},
};

pub static SCENE_TAG: &str = "scene";

/// Derive orbital parameters for a batch of satellites, keyed by satellite ID
#[utoipa::path(
    post,
    path = "/api/scene/orbital-params",
    tag = SCENE_TAG,
    request_body = SatelliteIdsDto,
    responses(
        (status = 200, description = "Orbital parameters of the satellites found", body = ApiResponse<OrbitalParamsBatchDto>),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orbital_params(
    State(state): State<AppState>,
    payload: Result<Json<SatelliteIdsDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let params = SceneService::new(&state.db)
        .orbital_params(payload.satellite_ids)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(params))))
}

/// Synchronise element sets, no upstream source is configured so nothing is updated
#[utoipa::path(
    post,
    path = "/api/scene/sync-tle",
    tag = SCENE_TAG,
    responses(
        (status = 200, description = "Number of satellites updated", body = ApiResponse<SyncResultDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync_tle(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let result = SceneService::new(&state.db).sync_tle().await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(result))))
}
