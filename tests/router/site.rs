use axum::http::{Method, StatusCode};
use serde_json::json;

use super::*;

/// Expect the index to link parameterless GET endpoints only
#[tokio::test]
async fn index_lists_parameterless_get_endpoints() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let html = body_text(resp).await;
    for link in ["/people", "/planets", "/user", "/users"] {
        assert!(html.contains(&format!("<a href=\"{link}\">{link}</a>")));
    }
    assert!(!html.contains("{planet_id}"));
    assert!(!html.contains("/favorite/"));

    Ok(())
}

/// Expect the greeting through the router
#[tokio::test]
async fn greeting() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/user").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        json!({ "msg": "Hello, this is your GET /user response " })
    );

    Ok(())
}

/// Expect unknown routes to get a JSON 404
#[tokio::test]
async fn unknown_route_is_json_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/starships").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(resp).await, json!({ "error": "Not found" }));

    Ok(())
}

/// Expect the OpenAPI document to describe the favorite routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/api/docs/openapi.json").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = body_json(resp).await;
    let favorite = &doc["paths"]["/favorite/planet/{planet_id}"];
    assert!(favorite.get("post").is_some());
    assert!(favorite.get("delete").is_some());

    Ok(())
}
