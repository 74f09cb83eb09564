//! Tests driving the full router.
//!
//! Requests go through routing, extractors and error conversion exactly as they would
//! when served, using `tower::ServiceExt::oneshot`.

mod catalog;
mod favorite;
mod site;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
    Router,
};
use holocron::server::{model::app::AppState, router::routes};
use holocron_test_utils::prelude::*;
use tower::ServiceExt;

use crate::util::{body_json, body_text};

/// Build the application router over the test database, acting as user 1
fn app(test: &TestContext) -> Router {
    routes().with_state(test.to_app_state::<AppState>())
}

/// Send a request without body through the router
async fn send(app: &Router, method: Method, uri: &str) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}
