use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::AuthGuard,
        session::{AuthSession, CsrfSession},
    },
    service::{
        auth::AuthService,
        notification::{events, publish_event},
    },
    state::AppState,
};

/// Query parameters Discord appends to the OAuth2 redirect.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state to compare against the session value.
    pub state: String,
    /// Authorization code to exchange for an access token.
    pub code: String,
}

/// GET /api/auth/login - Redirect to Discord's consent screen
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// GET /api/auth/callback - Complete the Discord login
///
/// Validates the CSRF state, exchanges the code, creates or refreshes the user and
/// stores its id in the session.
///
/// # Returns
/// - `200 OK`: The logged-in user
/// - `400 Bad Request`: CSRF mismatch or failed code exchange
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db, &state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.0.state).await?;

    let (user, created) = auth_service.callback(params.0.code).await?;
    AuthSession::new(&session)
        .set_user_id(user.id.clone())
        .await?;

    let dto = user.into_dto();
    if created {
        publish_event(state.notifier.as_ref(), events::USER_CREATED, &dto);
    }

    Ok((StatusCode::OK, Json(dto)))
}

/// GET /api/auth/logout - Clear the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user - Return the logged-in user
///
/// # Returns
/// - `200 OK`: The user
/// - `401 Unauthorized`: Nobody is logged in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let Some(stored_state) = CsrfSession::new(session).take_token().await? else {
        return Err(AuthError::CsrfMissingValue.into());
    };

    if stored_state != csrf_state {
        return Err(AuthError::CsrfValidationFailed.into());
    }

    Ok(())
}
