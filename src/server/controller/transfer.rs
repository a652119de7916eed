use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::transfer::TransferRequestDto,
    server::{error::AppError, model::ledger::TransferRequest, state::AppState},
};

/// POST /api/transfers - Move credits between two accounts
///
/// Both accounts change in one conditional commit. `balanceUpdated` is published
/// for each account by the transfer engine.
///
/// # Returns
/// - `200 OK`: Both post-transfer accounts; `replayed` is set when the idempotency key had already landed
/// - `400 Bad Request`: Self-transfer, invalid amount or overflow
/// - `404 Not Found`: Either account is missing
/// - `422 Unprocessable Entity`: Insufficient funds
/// - `503 Service Unavailable`: Contention or ledger failure, safe to retry with the same key
pub async fn create_transfer(
    State(state): State<AppState>,
    Json(payload): Json<TransferRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = state
        .transfer_engine
        .transfer(TransferRequest::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
