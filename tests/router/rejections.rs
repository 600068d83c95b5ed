use super::*;

/// Expect 400 with the envelope for a body that is not JSON
#[tokio::test]
async fn rejects_malformed_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/groups")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let (status, body) = send(&test, req).await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);
    assert!(body["data"].is_null());

    Ok(())
}

/// Expect 400 when the JSON content type is missing
#[tokio::test]
async fn rejects_missing_content_type() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/scene/orbital-params")
        .body(Body::from(r#"{"satelliteIds":[1]}"#))
        .unwrap();
    let (status, body) = send(&test, req).await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);

    Ok(())
}

/// Expect 400 for a path ID that is not an integer
#[tokio::test]
async fn rejects_malformed_path_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let (status, body) = send(&test, request(Method::GET, "/api/satellites/abc", None)).await;

    assert_eq!(status, 400);
    assert_eq!(body["code"], 400);

    Ok(())
}

/// Expect 400 for a page that is not a number or below 1
#[tokio::test]
async fn rejects_invalid_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_group("Imaging")
        .build()
        .await?;

    let (status, _) = send(&test, request(Method::GET, "/api/satellites?page=two", None)).await;
    assert_eq!(status, 400);

    let (status, _) = send(
        &test,
        request(Method::GET, "/api/groups/1/satellites?page=0", None),
    )
    .await;
    assert_eq!(status, 400);

    Ok(())
}

/// Expect 400 instead of a failed request when page or size exceed the row range
#[tokio::test]
async fn rejects_out_of_range_paging() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .with_mock_group("Imaging")
        .build()
        .await?;

    for uri in [
        "/api/satellites?page=18446744073709551615&size=2",
        "/api/satellites?page=1&size=18446744073709551615",
        "/api/satellites?page=3&size=9223372036854775807",
        "/api/groups/1/satellites?page=18446744073709551615&size=2",
        "/api/groups/1/satellites?page=1&size=18446744073709551615",
    ] {
        let (status, body) = send(&test, request(Method::GET, uri, None)).await;

        assert_eq!(status, 400, "{}", uri);
        assert_eq!(body["code"], 400);
        assert!(body["data"].is_null());
    }

    Ok(())
}

/// Expect the largest in-range size to list every satellite
#[tokio::test]
async fn accepts_largest_page_size() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .with_mock_satellite("SAT-B")
        .build()
        .await?;

    let (status, body) = send(
        &test,
        request(
            Method::GET,
            "/api/satellites?page=1&size=9223372036854775807",
            None,
        ),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["list"].as_array().unwrap().len(), 2);

    Ok(())
}

/// Expect 404 with the envelope for unknown IDs on every resource
#[tokio::test]
async fn reports_unknown_ids() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    for uri in [
        "/api/satellites/42",
        "/api/satellites/42/export-tle",
        "/api/groups/42",
        "/api/groups/42/satellites",
    ] {
        let (status, body) = send(&test, request(Method::GET, uri, None)).await;

        assert_eq!(status, 404, "{}", uri);
        assert_eq!(body["code"], 404);
    }

    Ok(())
}

/// Expect the OpenAPI document to list the catalogue routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = send(
        &test,
        request(Method::GET, "/api/docs/openapi.json", None),
    )
    .await;

    assert_eq!(status, 200);
    assert!(body["paths"]["/api/satellites/{id}"].is_object());
    assert!(body["paths"]["/api/groups/{id}/satellites"].is_object());
    assert!(body["paths"]["/api/scene/orbital-params"].is_object());

    Ok(())
}
