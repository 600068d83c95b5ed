//! Tests for the satellite controller endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use satdeck::{
    model::satellite::{CreateSatelliteDto, SatelliteQuery, UpdateSatelliteDto},
    server::controller::satellite::{
        create_satellite, delete_satellite, export_satellite_tle, get_satellite, get_satellites,
        update_satellite,
    },
};

use super::*;

/// Expect 200 with the paginated list in the envelope
#[tokio::test]
async fn get_satellites_returns_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .with_mock_satellite("SAT-B")
        .build()
        .await?;

    let result = get_satellites(
        State(test.into_app_state()),
        Ok(Query(SatelliteQuery::default())),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["code"], 200);
    assert_eq!(body["message"], "success");
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["page"], 1);
    assert_eq!(body["data"]["size"], 20);
    assert_eq!(body["data"]["list"][0]["name"], "SAT-A");

    Ok(())
}

/// Expect 400 with the error envelope for size 0
#[tokio::test]
async fn get_satellites_rejects_zero_size() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let result = get_satellites(
        State(test.into_app_state()),
        Ok(Query(SatelliteQuery {
            size: Some(0),
            ..Default::default()
        })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body = body_json(resp).await;
    assert_eq!(body["code"], 400);
    assert!(body["data"].is_null());

    Ok(())
}

/// Expect 500 with a generic message when the store fails
#[tokio::test]
async fn get_satellites_hides_store_errors() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_satellites(
        State(test.into_app_state()),
        Ok(Query(SatelliteQuery::default())),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = body_json(resp).await;
    assert_eq!(body["code"], 500);
    assert_eq!(body["message"], "Internal server error");

    Ok(())
}

/// Expect 200 with groups and orbital parameters in the detail view
#[tokio::test]
async fn get_satellite_returns_detail() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .with_mock_group("Imaging")
        .with_membership("SAT-A", "Imaging")
        .build()
        .await?;

    let result = get_satellite(State(test.into_app_state()), Ok(Path(1))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["groups"][0]["groupName"], "Imaging");
    assert_eq!(data["groups"][0]["satelliteCount"], 1);
    assert!(data["orbitalParams"]["inclination"].is_f64());
    assert!(data["createAt"].is_string());
    assert!(data["updateAt"].is_string());

    Ok(())
}

/// Expect 404 with the error envelope for an unknown satellite
#[tokio::test]
async fn get_satellite_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let result = get_satellite(State(test.into_app_state()), Ok(Path(9))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_json(resp).await;
    assert_eq!(body["code"], 404);
    assert!(body["data"].is_null());

    Ok(())
}

/// Expect 200 with the created satellite, without orbital parameters
#[tokio::test]
async fn create_satellite_returns_created() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_group("Imaging")
        .build()
        .await?;

    let result = create_satellite(
        State(test.into_app_state()),
        Ok(Json(CreateSatelliteDto {
            name: Some(constant::ISS_NAME.to_string()),
            line1: Some(constant::ISS_LINE1.to_string()),
            line2: Some(constant::ISS_LINE2.to_string()),
            group_ids: Some(vec![1]),
        })),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["data"]["name"], constant::ISS_NAME);
    assert_eq!(body["data"]["status"], 1);
    assert_eq!(body["data"]["groups"][0]["id"], 1);
    assert!(body["data"].get("orbitalParams").is_none());

    Ok(())
}

/// Expect 400 when a required field is missing
#[tokio::test]
async fn create_satellite_rejects_missing_line() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let result = create_satellite(
        State(test.into_app_state()),
        Ok(Json(CreateSatelliteDto {
            name: Some("SAT-A".to_string()),
            line1: Some(constant::ISS_LINE1.to_string()),
            ..Default::default()
        })),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 with the replaced fields
#[tokio::test]
async fn update_satellite_returns_updated() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .build()
        .await?;

    let result = update_satellite(
        State(test.into_app_state()),
        Ok(Path(1)),
        Ok(Json(UpdateSatelliteDto {
            name: Some(constant::TIANGONG_NAME.to_string()),
            line1: Some(constant::TIANGONG_LINE1.to_string()),
            line2: Some(constant::TIANGONG_LINE2.to_string()),
            status: Some(0),
            group_ids: None,
        })),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["data"]["name"], constant::TIANGONG_NAME);
    assert_eq!(body["data"]["status"], 0);

    Ok(())
}

/// Expect 404 when updating an unknown satellite
#[tokio::test]
async fn update_satellite_returns_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let result = update_satellite(
        State(test.into_app_state()),
        Ok(Path(3)),
        Ok(Json(UpdateSatelliteDto {
            name: Some("SAT-A".to_string()),
            line1: Some(constant::ISS_LINE1.to_string()),
            line2: Some(constant::ISS_LINE2.to_string()),
            ..Default::default()
        })),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 with data true, then 404 on a second delete
#[tokio::test]
async fn delete_satellite_returns_true() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .build()
        .await?;

    let result = delete_satellite(State(test.into_app_state()), Ok(Path(1))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    assert_eq!(body["data"], true);

    let again = delete_satellite(State(test.into_app_state()), Ok(Path(1))).await;
    assert_eq!(again.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect the three line element text as data
#[tokio::test]
async fn export_satellite_tle_returns_text() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite(constant::ISS_NAME)
        .build()
        .await?;

    let result = export_satellite_tle(State(test.into_app_state()), Ok(Path(1))).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let expected = format!(
        "{}\n{}\n{}",
        constant::ISS_NAME,
        constant::ISS_LINE1,
        constant::ISS_LINE2
    );
    assert_eq!(body["data"], expected.as_str());

    Ok(())
}
