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
        api::{ApiResponse, ErrorDto, PageQuery, SatelliteIdsDto},
        group::{
            AssociationResultDto, CreateGroupDto, GroupDto, GroupListDto, GroupQuery,
            UpdateGroupDto,
        },
        satellite::SatelliteListDto,
    },
    server::{error::Error, model::app::AppState, service::group::GroupService},
};

pub static GROUP_TAG: &str = "group";

/// List all groups, optionally filtered by name and status
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    params(GroupQuery),
    responses(
        (status = 200, description = "Success when listing groups", body = ApiResponse<GroupListDto>),
        (status = 400, description = "Malformed query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    query: Result<Query<GroupQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Query(query) = query?;

    let groups = GroupService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(groups))))
}

/// Get a group with its satellite count
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Success when retrieving group", body = ApiResponse<GroupDto>),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(group_id) = path?;

    let group = GroupService::new(&state.db).get(group_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(group))))
}

/// Create a group with a unique name
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 200, description = "Success when creating group", body = ApiResponse<GroupDto>),
        (status = 400, description = "Missing group name or malformed body", body = ErrorDto),
        (status = 409, description = "Group name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    payload: Result<Json<CreateGroupDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Json(payload) = payload?;

    let group = GroupService::new(&state.db).create(payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(group))))
}

/// Replace a group's name and description, and its status when provided
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Success when updating group", body = ApiResponse<GroupDto>),
        (status = 400, description = "Missing group name or malformed body", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 409, description = "Group name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateGroupDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(group_id) = path?;
    let Json(payload) = payload?;

    let group = GroupService::new(&state.db).update(group_id, payload).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(group))))
}

/// Delete a group, its satellites are kept
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Success when deleting group", body = ApiResponse<bool>),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(group_id) = path?;

    GroupService::new(&state.db).delete(group_id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(true))))
}

/// List the satellites of a group, paginated in satellite ID order
#[utoipa::path(
    get,
    path = "/api/groups/{id}/satellites",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID"), PageQuery),
    responses(
        (status = 200, description = "Success when listing group satellites", body = ApiResponse<SatelliteListDto>),
        (status = 400, description = "Invalid pagination or malformed query", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_satellites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(group_id) = path?;
    let Query(query) = query?;

    let satellites = GroupService::new(&state.db)
        .list_satellites(group_id, query)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(satellites))))
}

/// Add satellites to a group, reporting how many were newly associated
#[utoipa::path(
    post,
    path = "/api/groups/{id}/satellites",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = SatelliteIdsDto,
    responses(
        (status = 200, description = "Success when associating satellites", body = ApiResponse<AssociationResultDto>),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn associate_satellites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SatelliteIdsDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(group_id) = path?;
    let Json(payload) = payload?;

    let result = GroupService::new(&state.db)
        .associate(group_id, payload.satellite_ids)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(result))))
}

/// Remove satellites from a group, reporting how many were removed
#[utoipa::path(
    delete,
    path = "/api/groups/{id}/satellites",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = SatelliteIdsDto,
    responses(
        (status = 200, description = "Success when disassociating satellites", body = ApiResponse<AssociationResultDto>),
        (status = 400, description = "Malformed body", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn disassociate_satellites(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<SatelliteIdsDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let Path(group_id) = path?;
    let Json(payload) = payload?;

    let result = GroupService::new(&state.db)
        .disassociate(group_id, payload.satellite_ids)
        .await?;

    Ok((StatusCode::OK, Json(ApiResponse::success(result))))
}
