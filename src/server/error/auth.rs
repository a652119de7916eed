use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The CSRF state returned by Discord does not match the one stored in the session.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// No CSRF state was stored, typically because the callback was opened directly.
    #[error("No CSRF state found in session")]
    CsrfMissingValue,

    /// Exchanging the authorization code for an access token failed.
    #[error("Failed to exchange authorization code: {0}")]
    TokenExchange(String),

    /// Request requires a logged in user but the session has none.
    #[error("No user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(String),
}

/// Maps authentication errors to client-facing responses.
///
/// - `CsrfValidationFailed` / `CsrfMissingValue` / `TokenExchange` → 400
/// - `UserNotInSession` → 401
/// - `UserNotInDatabase` → 404
///
/// Details are logged at debug level; messages returned to the client stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::CsrfValidationFailed | Self::CsrfMissingValue | Self::TokenExchange(_) => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
