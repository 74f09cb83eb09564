//! Index page and fallback for unknown routes.

use axum::{http::StatusCode, response::Html};
use utoipa::openapi::OpenApi;

use crate::server::error::{api::ApiError, Error};

/// Collect every GET endpoint without path parameters from the OpenAPI document
///
/// Paths are returned in the document's order, which is sorted by path.
pub fn collect_links(api: &OpenApi) -> Vec<String> {
    api.paths
        .paths
        .iter()
        .filter(|(path, item)| item.get.is_some() && !path.contains('{'))
        .map(|(path, _)| path.clone())
        .collect()
}

/// Render the HTML index listing the provided endpoints
pub async fn sitemap(links: Vec<String>) -> Html<String> {
    let items: String = links
        .iter()
        .map(|link| format!("<li><a href=\"{link}\">{link}</a></li>"))
        .collect();

    Html(format!(
        "<div style=\"text-align: center;\">\
         <h1>Holocron API</h1>\
         <p>API docs: <a href=\"/api/docs\">/api/docs</a></p>\
         <p>Start working on your project by following the links below:</p>\
         <ul style=\"text-align: left;\">{items}</ul>\
         </div>"
    ))
}

/// Fallback for any request that matches no route
pub async fn not_found() -> Error {
    ApiError::Custom {
        status: StatusCode::NOT_FOUND,
        message: "Not found".to_string(),
    }
    .into()
}
