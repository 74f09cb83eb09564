use axum::http::{Method, StatusCode};
use serde_json::json;

use super::*;

/// Expect 201 for the first favorite and 400 when repeating it
#[tokio::test]
async fn planet_favorite_created_then_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_planet(5)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::POST, "/favorite/planet/5").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(resp).await,
        json!({ "id": 1, "user_ID": 1, "planets_ID": 5 })
    );

    let resp = send(&app, Method::POST, "/favorite/planet/5").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Este planeta ya es un favorito" })
    );

    Ok(())
}

/// Expect 404 when deleting a favorite that was never created
#[tokio::test]
async fn deleting_absent_favorite_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_person(1)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::DELETE, "/favorite/people/1").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Favorito no encontrado" })
    );

    Ok(())
}

/// Expect a created favorite to show up in the user's list until it is deleted
#[tokio::test]
async fn favorite_round_trip() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .with_mock_planet(2)
        .with_mock_person(3)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::POST, "/favorite/planet/2").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let resp = send(&app, Method::POST, "/favorite/people/3").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(&app, Method::GET, "/users/1/favorites").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({
            "planets": [{ "id": 1, "user_ID": 1, "planets_ID": 2 }],
            "people": [{ "id": 1, "user_ID": 1, "people_ID": 3 }]
        })
    );

    let resp = send(&app, Method::DELETE, "/favorite/planet/2").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "error": "Planeta favorito eliminado" })
    );
    let resp = send(&app, Method::DELETE, "/favorite/people/3").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, Method::GET, "/users/1/favorites").await;
    assert_eq!(body_json(resp).await, json!({ "planets": [], "people": [] }));

    Ok(())
}

/// Expect 404 for a favorite of a person that does not exist
#[tokio::test]
async fn favorite_of_missing_person_is_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user(1)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::POST, "/favorite/people/77").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Person not found" }));

    Ok(())
}
