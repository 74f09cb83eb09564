use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use dioxus_logger::tracing;

use crate::{
    model::{api::ErrorDto, person::PersonDto},
    server::{error::Error, model::app::AppState, service::person::PersonService},
};

pub static PERSON_TAG: &str = "person";

/// List every person of the catalog
#[utoipa::path(
    get,
    path = "/people",
    tag = PERSON_TAG,
    responses(
        (status = 200, description = "All people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = PersonService::new(&state.db).get_people().await?;

    tracing::debug!("Found {} people", people.len());

    Ok((StatusCode::OK, Json(people)))
}

/// Get a single person by ID
#[utoipa::path(
    get,
    path = "/people/{person_id}",
    tag = PERSON_TAG,
    params(
        ("person_id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 200, description = "The person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = PersonService::new(&state.db).get_person(person_id).await?;

    tracing::debug!(person_id = %person_id, "Found person");

    Ok((StatusCode::OK, Json(person)))
}
