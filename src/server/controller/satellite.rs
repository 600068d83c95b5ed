use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        satellite::{
            CreateSatelliteDto, SatelliteDto, SatelliteListDto, SatelliteQuery, UpdateSatelliteDto,
        },
    },
    server::{error::Error, model::app::AppState, service::satellite::SatelliteService},
};

pub static SATELLITE_TAG: &str = "satellite";

/// List satellites, paginated and optionally filtered by name, group and status
#[utoipa::path(
    get,
    path = "/api/satellites",
    tag = SATELLITE_TAG,
    params(SatelliteQuery),
    responses(
        (status = 200, description = "Success when listing satellites", body = ApiResponse<SatelliteListDto>),
        (status = 400, description = "Invalid pagination or malformed query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_satellites(
    State(state): State<AppState>,
    query: Result<Query<SatelliteQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query?;

    let satellites = SatelliteService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(satellites))))
}

/// Get a satellite with its groups and derived orbital parameters
#[utoipa::path(
    get,
    path = "/api/satellites/{id}",
    tag = SATELLITE_TAG,
    params(("id" = i32, Path, description = "Satellite ID")),
    responses(
        (status = 200, description = "Success when retrieving satellite", body = ApiResponse<SatelliteDto>),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_satellite(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(satellite_id) = path?;

    let satellite = SatelliteService::new(&state.db).get(satellite_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(satellite))))
}

/// Create a satellite, optionally placing it in existing groups
#[utoipa::path(
    post,
    path = "/api/satellites",
    tag = SATELLITE_TAG,
    request_body = CreateSatelliteDto,
    responses(
        (status = 200, description = "Success when creating satellite", body = ApiResponse<SatelliteDto>),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_satellite(
    State(state): State<AppState>,
    payload: Result<Json<CreateSatelliteDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let satellite = SatelliteService::new(&state.db).create(payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(satellite))))
}

/// Replace a satellite's name and element set, and its groups when provided
#[utoipa::path(
    put,
    path = "/api/satellites/{id}",
    tag = SATELLITE_TAG,
    params(("id" = i32, Path, description = "Satellite ID")),
    request_body = UpdateSatelliteDto,
    responses(
        (status = 200, description = "Success when updating satellite", body = ApiResponse<SatelliteDto>),
        (status = 400, description = "Missing field or malformed body", body = ErrorDto),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_satellite(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateSatelliteDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(satellite_id) = path?;
    let Json(payload) = payload?;

    let satellite = SatelliteService::new(&state.db)
        .update(satellite_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(satellite))))
}

/// Delete a satellite, removing it from all groups
#[utoipa::path(
    delete,
    path = "/api/satellites/{id}",
    tag = SATELLITE_TAG,
    params(("id" = i32, Path, description = "Satellite ID")),
    responses(
        (status = 200, description = "Success when deleting satellite", body = ApiResponse<bool>),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_satellite(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(satellite_id) = path?;

    SatelliteService::new(&state.db).delete(satellite_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(true))))
}

/// Export a satellite as three line element text
#[utoipa::path(
    get,
    path = "/api/satellites/{id}/export-tle",
    tag = SATELLITE_TAG,
    params(("id" = i32, Path, description = "Satellite ID")),
    responses(
        (status = 200, description = "Name, line 1 and line 2 separated by newlines", body = ApiResponse<String>),
        (status = 404, description = "Satellite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_satellite_tle(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(satellite_id) = path?;

    let tle = SatelliteService::new(&state.db)
        .export_tle(satellite_id)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(tle))))
}
