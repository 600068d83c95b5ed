//! Tests for the group controller endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use satdeck::{
    model::{
        api::{PageQuery, SatelliteIdsDto},
        group::{CreateGroupDto, GroupQuery, UpdateGroupDto},
    },
    server::controller::group::{
        associate_satellites, create_group, delete_group, disassociate_satellites, get_group,
        get_group_satellites, get_groups, update_group,
    },
};

use super::*;

fn satellite_ids(ids: &[i32]) -> SatelliteIdsDto {
    SatelliteIdsDto {
        satellite_ids: ids.to_vec(),
    }
}

/// Expect 200 with every group and the total
#[tokio::test]
async fn get_groups_returns_all() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_group("Imaging")
        .with_mock_group("Weather")
        .build()
        .await?;

    let result = get_groups(
        State(test.into_app_state()),
        Ok(Query(GroupQuery::default())),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["list"][1]["groupName"], "Weather");
    assert_eq!(body["data"]["list"][1]["satelliteCount"], 0);

    Ok(())
}

/// Expect 404 for an unknown group
#[tokio::test]
async fn get_group_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let result = get_group(State(test.into_app_state()), Ok(Path(1))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["code"], 404);

    Ok(())
}

/// Expect 200 for a new name and 409 when the name is taken
#[tokio::test]
async fn create_group_reports_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let payload = CreateGroupDto {
        group_name: Some("Imaging".to_string()),
        description: Some("Earth imaging".to_string()),
        status: None,
    };

    let created = create_group(State(test.into_app_state()), Ok(Json(payload.clone()))).await;
    let resp = created.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"]["groupName"], "Imaging");
    assert_eq!(body["data"]["description"], "Earth imaging");
    assert_eq!(body["data"]["satelliteCount"], 0);

    let duplicate = create_group(State(test.into_app_state()), Ok(Json(payload))).await;
    let resp = duplicate.into_response();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body = body_json(resp).await;
    assert_eq!(body["code"], 409);

    Ok(())
}

/// Expect 400 when the group name is blank
#[tokio::test]
async fn create_group_rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let result = create_group(
        State(test.into_app_state()),
        Ok(Json(CreateGroupDto {
            group_name: Some(" ".to_string()),
            ..Default::default()
        })),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 409 when renaming onto another group's name
#[tokio::test]
async fn update_group_reports_conflict() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_group("Imaging")
        .with_mock_group("Weather")
        .build()
        .await?;

    let result = update_group(
        State(test.into_app_state()),
        Ok(Path(2)),
        Ok(Json(UpdateGroupDto {
            group_name: Some("Imaging".to_string()),
            ..Default::default()
        })),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::CONFLICT);

    Ok(())
}

/// Expect 200 with data true when deleting a group
#[tokio::test]
async fn delete_group_returns_true() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_group("Imaging")
        .build()
        .await?;

    let result = delete_group(State(test.into_app_state()), Ok(Path(1))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["data"], true);

    Ok(())
}

/// Expect associate, list and disassociate to report counts through the envelope
#[tokio::test]
async fn manages_group_members() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .with_mock_satellite("SAT-B")
        .with_mock_group("Imaging")
        .build()
        .await?;

    let associated = associate_satellites(
        State(test.into_app_state()),
        Ok(Path(1)),
        Ok(Json(satellite_ids(&[1, 2, 404]))),
    )
    .await;
    let body = body_json(associated.into_response()).await;
    assert_eq!(body["data"]["success"], true);
    assert_eq!(body["data"]["associatedCount"], 2);

    let members = get_group_satellites(
        State(test.into_app_state()),
        Ok(Path(1)),
        Ok(Query(PageQuery {
            page: Some(1),
            size: Some(1),
        })),
    )
    .await;
    let body = body_json(members.into_response()).await;
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["list"][0]["name"], "SAT-A");

    let removed = disassociate_satellites(
        State(test.into_app_state()),
        Ok(Path(1)),
        Ok(Json(satellite_ids(&[2, 2]))),
    )
    .await;
    let body = body_json(removed.into_response()).await;
    assert_eq!(body["data"]["associatedCount"], 1);

    Ok(())
}

/// Expect 404 when associating with an unknown group
#[tokio::test]
async fn associate_satellites_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let result = associate_satellites(
        State(test.into_app_state()),
        Ok(Path(1)),
        Ok(Json(satellite_ids(&[1]))),
    )
    .await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}
