use axum::http::{Method, StatusCode};
use serde_json::json;

use super::*;

/// Expect 404 with the planet error for a missing planet
#[tokio::test]
async fn missing_planet_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/planets/999").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Planet not found" }));

    Ok(())
}

/// Expect the listed people to match the inserted rows
#[tokio::test]
async fn lists_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_person(1)
        .with_mock_person(2)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/people").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|person| person["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"Person 1"));
    assert!(names.contains(&"Person 2"));

    Ok(())
}

/// Expect no serialized user to carry a password
#[tokio::test]
async fn users_never_expose_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/users").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let text = body_text(resp).await;
    assert!(!text.contains("password"));
    assert!(!text.contains("hunter2"));

    Ok(())
}

/// Expect favorites of existing users to be 200 and of unknown users to be 404
#[tokio::test]
async fn user_favorites_status_follows_user_existence() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .build()
        .await?;
    let app = app(&test);

    for user_id in [1, 2] {
        let resp = send(&app, Method::GET, &format!("/users/{}/favorites", user_id)).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(body_json(resp).await, json!({ "planets": [], "people": [] }));
    }

    for user_id in [0, 3, 999] {
        let resp = send(&app, Method::GET, &format!("/users/{}/favorites", user_id)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    Ok(())
}

/// Expect a non-integer id to be rejected before reaching the database
#[tokio::test]
async fn non_integer_id_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/planets/tatooine").await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
