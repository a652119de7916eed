//! Ledger operation errors.
//!
//! `TransferError` is returned by the transfer engine for both two-party transfers
//! and direct balance updates. Its response body is `{ kind, message }` so clients
//! can branch on `kind` and decide whether to retry.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::transfer::TransferErrorDto;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransferError {
    /// Sender and recipient are the same account.
    #[error("Cannot transfer credits to the same account (self-transfer)")]
    InvalidOperation,

    /// Empty id, non-positive amount, negative balance or arithmetic overflow.
    #[error("{0}")]
    InvalidArgument(String),

    /// The named account does not exist.
    #[error("Account {0} not found")]
    NotFound(String),

    #[error("Account {account} has a balance of {balance}, cannot withdraw {requested}")]
    InsufficientFunds {
        account: String,
        balance: i64,
        requested: i64,
    },

    /// Caller supplied an expected version that is no longer current.
    #[error("Account {account} is at version {actual}, expected version {expected}")]
    VersionMismatch {
        account: String,
        expected: i64,
        actual: i64,
    },

    /// Every attempt lost a version conflict.
    #[error("Transfer gave up after {attempts} conflicting attempts, please retry")]
    Contention { attempts: u32 },

    /// The ledger store failed or kept timing out.
    #[error("Ledger store unavailable: {0}")]
    Unavailable(String),
}

impl TransferError {
    /// Stable, machine readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidOperation => "InvalidOperation",
            Self::InvalidArgument(_) => "InvalidArgument",
            Self::NotFound(_) => "NotFound",
            Self::InsufficientFunds { .. } => "InsufficientFunds",
            Self::VersionMismatch { .. } => "VersionMismatch",
            Self::Contention { .. } => "Contention",
            Self::Unavailable(_) => "Unavailable",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidOperation | Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InsufficientFunds { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::VersionMismatch { .. } => StatusCode::CONFLICT,
            Self::Contention { .. } | Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Whether the client may retry the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Contention { .. } | Self::Unavailable(_))
    }
}

impl IntoResponse for TransferError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Unavailable(detail) => {
                tracing::error!("Ledger store unavailable: {}", detail);
                "Ledger store unavailable, please retry".to_string()
            }
            err => err.to_string(),
        };

        (
            self.status(),
            Json(TransferErrorDto {
                kind: self.kind().to_string(),
                message,
            }),
        )
            .into_response()
    }
}
