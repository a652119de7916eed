//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by controllers. Domain errors with
//! their own status mapping (`AuthError`, `TransferError`) implement `IntoResponse`
//! themselves and are delegated to; everything else collapses into a generic
//! 500 response with the detail logged server-side.

pub mod auth;
pub mod config;
pub mod ledger;
pub mod notify;
pub mod transfer;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, transfer::TransferError},
};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error, mapped by `AuthError::into_response`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Ledger operation error, mapped by `TransferError::into_response`.
    #[error(transparent)]
    TransferErr(#[from] TransferError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error, raised while preparing the session store.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Outbound HTTP request to Discord failed.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Listener bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),
}

/// Maps each error variant to a status code and JSON body.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`
/// - 404 Not Found - `NotFound`
/// - Delegated - `AuthErr` and `TransferErr`
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::TransferErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wraps any displayable error into a 500 response.
///
/// The full message is logged; the client only sees "Internal server error".
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = AppError::NotFound("Guild 1 not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_maps_to_500() {
        let response = AppError::DbErr(sea_orm::DbErr::Custom("boom".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn transfer_error_keeps_its_status() {
        let response = AppError::from(TransferError::InvalidOperation).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
