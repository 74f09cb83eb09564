use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        favorite::{FavoriteDeletedDto, PersonFavoriteDto, PlanetFavoriteDto},
    },
    server::{
        controller::util::current_user::CurrentUser, error::Error, model::app::AppState,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a person to the current user's favorites
///
/// # Responses
/// - 201 (Created): The new favorite
/// - 400 (Bad Request): The person is already a favorite of the current user
/// - 404 (Not Found): The current user or the person does not exist
#[utoipa::path(
    post,
    path = "/favorite/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("person_id" = i32, Path, description = "ID of the person to favorite")
    ),
    responses(
        (status = 201, description = "Favorite created", body = PersonFavoriteDto),
        (status = 400, description = "Person is already a favorite", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_person_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .add_person_favorite(current_user.id(), person_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Add a planet to the current user's favorites
///
/// # Responses
/// - 201 (Created): The new favorite
/// - 400 (Bad Request): The planet is already a favorite of the current user
/// - 404 (Not Found): The current user or the planet does not exist
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet to favorite")
    ),
    responses(
        (status = 201, description = "Favorite created", body = PlanetFavoriteDto),
        (status = 400, description = "Planet is already a favorite", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_planet_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite = FavoriteService::new(&state.db)
        .add_planet_favorite(current_user.id(), planet_id)
        .await?;

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// Remove a person from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("person_id" = i32, Path, description = "ID of the favorited person")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = FavoriteDeletedDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_person_favorite(current_user.id(), person_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteDeletedDto {
            message: "Persona favorita eliminada".to_string(),
        }),
    ))
}

/// Remove a planet from the current user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the favorited planet")
    ),
    responses(
        (status = 200, description = "Favorite removed", body = FavoriteDeletedDto),
        (status = 404, description = "Favorite not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_planet_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FavoriteService::new(&state.db)
        .remove_planet_favorite(current_user.id(), planet_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(FavoriteDeletedDto {
            message: "Planeta favorito eliminado".to_string(),
        }),
    ))
}
