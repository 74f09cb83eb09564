use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{
        api::{ErrorDto, GreetingDto},
        favorite::UserFavoritesDto,
        user::UserDto,
    },
    server::{error::Error, model::app::AppState, service::user::UserService},
};

pub static USER_TAG: &str = "user";

/// Greeting used to check the API is reachable
#[utoipa::path(
    get,
    path = "/user",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Greeting message", body = GreetingDto)
    ),
)]
pub async fn hello() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(GreetingDto {
            msg: "Hello, this is your GET /user response ".to_string(),
        }),
    )
}

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users, passwords excluded", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    tracing::debug!("Found {} users", users.len());

    Ok((StatusCode::OK, Json(users)))
}

/// Get the planet & person favorites of a user
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = USER_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user")
    ),
    responses(
        (status = 200, description = "Favorites grouped by kind", body = UserFavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = UserService::new(&state.db)
        .get_user_favorites(user_id)
        .await?;

    tracing::debug!(
        user_id = %user_id,
        "Found {} planet & {} person favorites",
        favorites.planets.len(),
        favorites.people.len()
    );

    Ok((StatusCode::OK, Json(favorites)))
}
