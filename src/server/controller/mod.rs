//! HTTP controller endpoints for the Holocron API.
//!
//! Axum handlers for the catalog, users and favorites. Controllers extract path parameters
//! and the acting user, call the matching service and turn the result into a JSON
//! response. Every handler is annotated with utoipa for the OpenAPI document.

pub mod favorite;
pub mod person;
pub mod planet;
pub mod sitemap;
pub mod user;
pub mod util;
