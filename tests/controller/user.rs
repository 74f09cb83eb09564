use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::user::{get_user_favorites, get_users, hello};
use serde_json::json;

use super::*;

/// Expect the greeting message, trailing space included
#[tokio::test]
async fn greets() {
    let resp = hello().await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "Hello, this is your GET /user response " })
    );
}

/// Expect users to be listed without their password
#[tokio::test]
async fn lists_users_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .build()
        .await?;

    let result = get_users(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user.get("password").is_none());
        assert!(user.get("email").is_some());
    }

    Ok(())
}

/// Expect empty groups for a user without favorites
#[tokio::test]
async fn empty_favorites_for_existing_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let result = get_user_favorites(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!({ "planets": [], "people": [] }));

    Ok(())
}

/// Expect only the requested user's favorites
#[tokio::test]
async fn favorites_of_requested_user_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .with_mock_planet(1)
        .with_mock_person(1)
        .with_planet_favorite(1, 1)
        .with_planet_favorite(2, 1)
        .with_person_favorite(2, 1)
        .build()
        .await?;

    let result = get_user_favorites(State(test.to_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "planets": [{ "id": 1, "user_ID": 1, "planets_ID": 1 }],
            "people": []
        })
    );

    Ok(())
}

/// Expect 404 for a user that does not exist
#[tokio::test]
async fn not_found_for_missing_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_user_favorites(State(test.to_app_state()), Path(42)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Usuario no encontrado" })
    );

    Ok(())
}
