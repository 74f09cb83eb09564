use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors caused by the request itself rather than by the server.
///
/// The `Display` output is meant for logs, the message sent to the client is chosen in
/// the [`IntoResponse`] implementation.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("User ID {0} not found in database")]
    UserNotFound(i32),
    #[error("Planet ID {0} not found in database")]
    PlanetNotFound(i32),
    #[error("Person ID {0} not found in database")]
    PersonNotFound(i32),
    #[error("User ID {user_id} has no favorite for planet ID {planet_id}")]
    PlanetFavoriteNotFound { user_id: i32, planet_id: i32 },
    #[error("User ID {user_id} has no favorite for person ID {person_id}")]
    PersonFavoriteNotFound { user_id: i32, person_id: i32 },
    #[error("User ID {user_id} already has planet ID {planet_id} as a favorite")]
    PlanetFavoriteExists { user_id: i32, planet_id: i32 },
    #[error("User ID {user_id} already has person ID {person_id} as a favorite")]
    PersonFavoriteExists { user_id: i32, person_id: i32 },
    /// Application error carrying its own status code & client message
    #[error("{message}")]
    Custom { status: StatusCode, message: String },
}

impl ApiError {
    /// Status code & client facing message for this error
    pub fn status_and_message(&self) -> (StatusCode, &str) {
        match self {
            Self::UserNotFound(_) => (StatusCode::NOT_FOUND, "Usuario no encontrado"),
            Self::PlanetNotFound(_) => (StatusCode::NOT_FOUND, "Planet not found"),
            Self::PersonNotFound(_) => (StatusCode::NOT_FOUND, "Person not found"),
            Self::PlanetFavoriteNotFound { .. } | Self::PersonFavoriteNotFound { .. } => {
                (StatusCode::NOT_FOUND, "Favorito no encontrado")
            }
            Self::PlanetFavoriteExists { .. } => {
                (StatusCode::BAD_REQUEST, "Este planeta ya es un favorito")
            }
            Self::PersonFavoriteExists { .. } => {
                (StatusCode::BAD_REQUEST, "Este personaje ya es un favorito")
            }
            Self::Custom { status, message } => (*status, message.as_str()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = self.status_and_message();

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
