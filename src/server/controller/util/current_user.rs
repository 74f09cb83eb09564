use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::model::app::AppState;

/// Identity that favorite mutations act on.
///
/// No authentication exists yet, so the identity always resolves to the configured
/// current user from [`AppState`]. Handlers receive it as an extractor and pass it on
/// explicitly, keeping the services independent of where the identity comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i32);

impl CurrentUser {
    pub fn id(&self) -> i32 {
        self.0
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Infallible;

    async fn from_request_parts(
        _parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(state.current_user_id))
    }
}
