use super::*;

/// Expect a satellite created into a group to show exactly that group in its detail view
#[tokio::test]
async fn create_group_then_satellite_shows_membership() -> Result<(), TestError> {
    let test = TestBuilder::new().with_satellite_tables().build().await?;

    let (status, group) = send(
        &test,
        request(
            Method::POST,
            "/api/groups",
            Some(json!({ "groupName": "Imaging" })),
        ),
    )
    .await;
    assert_eq!(status, 200);
    let group_id = group["data"]["id"].as_i64().unwrap();

    let (status, satellite) = send(
        &test,
        request(
            Method::POST,
            "/api/satellites",
            Some(json!({
                "name": "SAT-A",
                "line1": constant::ISS_LINE1,
                "line2": constant::ISS_LINE2,
                "groupIds": [group_id],
            })),
        ),
    )
    .await;
    assert_eq!(status, 200);
    let satellite_id = satellite["data"]["id"].as_i64().unwrap();

    let (status, detail) = send(
        &test,
        request(
            Method::GET,
            &format!("/api/satellites/{}", satellite_id),
            None,
        ),
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(detail["code"], 200);

    let groups = detail["data"]["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0]["groupName"], "Imaging");

    let params = &detail["data"]["orbitalParams"];
    for field in [
        "semiMajorAxis",
        "eccentricity",
        "inclination",
        "argumentOfPerigee",
        "rightAscension",
        "meanAnomaly",
        "period",
    ] {
        assert!(params[field].is_number(), "{} is not numeric", field);
    }

    Ok(())
}

/// Expect the second of exactly two satellites with size 1, page 2
#[tokio::test]
async fn paginates_two_satellites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .with_mock_satellite("SAT-B")
        .build()
        .await?;

    let (status, body) = send(
        &test,
        request(Method::GET, "/api/satellites?size=1&page=2", None),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["total"], 2);
    assert_eq!(body["data"]["page"], 2);
    assert_eq!(body["data"]["size"], 1);
    assert_eq!(body["data"]["list"].as_array().unwrap().len(), 1);

    Ok(())
}

/// Expect keyword and group filters from the query string applied
#[tokio::test]
async fn filters_satellites_by_query() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("NOAA-19")
        .with_mock_satellite("NOAA-18")
        .with_mock_satellite("METEOR-M2")
        .with_mock_group("Weather")
        .with_membership("NOAA-19", "Weather")
        .with_membership("METEOR-M2", "Weather")
        .build()
        .await?;

    let (_, body) = send(
        &test,
        request(Method::GET, "/api/satellites?keyword=NOAA&groupId=1", None),
    )
    .await;

    assert_eq!(body["data"]["total"], 1);
    assert_eq!(body["data"]["list"][0]["name"], "NOAA-19");

    Ok(())
}

/// Expect association changes and deletions reflected across both sides
#[tokio::test]
async fn deletes_keep_other_side() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .with_mock_satellite("SAT-B")
        .with_mock_group("Imaging")
        .with_mock_group("Weather")
        .build()
        .await?;

    let (_, body) = send(
        &test,
        request(
            Method::POST,
            "/api/groups/1/satellites",
            Some(json!({ "satelliteIds": [1, 2] })),
        ),
    )
    .await;
    assert_eq!(body["data"]["associatedCount"], 2);

    let (_, body) = send(
        &test,
        request(
            Method::POST,
            "/api/groups/2/satellites",
            Some(json!({ "satelliteIds": [1] })),
        ),
    )
    .await;
    assert_eq!(body["data"]["associatedCount"], 1);

    let (status, _) = send(&test, request(Method::DELETE, "/api/satellites/1", None)).await;
    assert_eq!(status, 200);

    let (_, members) = send(
        &test,
        request(Method::GET, "/api/groups/1/satellites", None),
    )
    .await;
    assert_eq!(members["data"]["total"], 1);
    assert_eq!(members["data"]["list"][0]["id"], 2);

    let (status, _) = send(&test, request(Method::DELETE, "/api/groups/1", None)).await;
    assert_eq!(status, 200);

    let (status, satellite) = send(&test, request(Method::GET, "/api/satellites/2", None)).await;
    assert_eq!(status, 200);
    assert!(satellite["data"]["groups"].as_array().unwrap().is_empty());

    let (_, group) = send(&test, request(Method::GET, "/api/groups/2", None)).await;
    assert_eq!(group["data"]["satelliteCount"], 0);

    Ok(())
}

/// Expect disassociation with a JSON body on DELETE
#[tokio::test]
async fn disassociates_with_delete_body() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_satellite_tables()
        .with_mock_satellite("SAT-A")
        .with_mock_group("Imaging")
        .with_membership("SAT-A", "Imaging")
        .build()
        .await?;

    let (status, body) = send(
        &test,
        request(
            Method::DELETE,
            "/api/groups/1/satellites",
            Some(json!({ "satelliteIds": [1] })),
        ),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["data"]["success"], true);
    assert_eq!(body["data"]["associatedCount"], 1);

    Ok(())
}
