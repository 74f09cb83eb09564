//! HTTP routing and OpenAPI documentation configuration.
//!
//! Every endpoint is registered here along with its OpenAPI specification. The collected
//! document feeds both Swagger UI at `/api/docs` and the HTML index served at `/`.

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /` - HTML index of the parameterless GET endpoints
/// - `GET /user` - Greeting
/// - `GET /users` - List users
/// - `GET /users/{user_id}/favorites` - Favorites of a user
/// - `GET /people`, `GET /people/{person_id}` - Person catalog
/// - `GET /planets`, `GET /planets/{planet_id}` - Planet catalog
/// - `POST`/`DELETE /favorite/people/{person_id}` - Add or remove a person favorite
/// - `POST`/`DELETE /favorite/planet/{planet_id}` - Add or remove a planet favorite
///
/// Requests that match no route receive a JSON 404.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, config.current_user_id));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::planet::PLANET_TAG, description = "Planet catalog API routes"),
        (name = controller::person::PERSON_TAG, description = "Person catalog API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::hello))
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::person::get_people))
        .routes(routes!(controller::person::get_person))
        .routes(routes!(controller::planet::get_planets))
        .routes(routes!(controller::planet::get_planet))
        .routes(routes!(
            controller::favorite::add_person_favorite,
            controller::favorite::delete_person_favorite
        ))
        .routes(routes!(
            controller::favorite::add_planet_favorite,
            controller::favorite::delete_planet_favorite
        ))
        .split_for_parts();

    let links = controller::sitemap::collect_links(&api);

    routes
        .route("/", get(move || controller::sitemap::sitemap(links.clone())))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::sitemap::not_found)
}
