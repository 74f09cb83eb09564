use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::server::controller::person::{get_people, get_person};
use serde_json::json;

use super::*;

/// Expect 200 with an empty array when no people exist
#[tokio::test]
async fn lists_no_people() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_people(State(test.to_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, json!([]));

    Ok(())
}

/// Expect 200 with the serialized person
#[tokio::test]
async fn gets_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_person(3)
        .build()
        .await?;

    let result = get_person(State(test.to_app_state()), Path(3)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "id": 3,
            "birth_year": "19BBY",
            "eye_color": "blue",
            "gender": "male",
            "name": "Person 3",
            "mass": "77",
            "is_active": true
        })
    );

    Ok(())
}

/// Expect 404 when the person does not exist
#[tokio::test]
async fn not_found_for_missing_person() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_person(1)
        .build()
        .await?;

    let result = get_person(State(test.to_app_state()), Path(2)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Person not found" }));

    Ok(())
}
