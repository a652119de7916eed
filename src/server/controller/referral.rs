use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    model::referral::{CreateReferralDto, UpdateReferralDto},
    server::{
        error::AppError,
        model::referral::ReferralParam,
        service::{
            notification::{events, publish_event},
            referral::ReferralService,
        },
        state::AppState,
    },
};

pub async fn get_referrals(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let referrals = ReferralService::new(&state.db).get_all().await?;

    let referrals_dto: Vec<_> = referrals.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(referrals_dto)))
}

/// GET /api/referrals/{id} - Referral with the referred user and guild
pub async fn get_referral(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let details = ReferralService::new(&state.db).get_details(id).await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

pub async fn create_referral(
    State(state): State<AppState>,
    Json(payload): Json<CreateReferralDto>,
) -> Result<impl IntoResponse, AppError> {
    let referral = ReferralService::new(&state.db)
        .create(ReferralParam::from_create_dto(payload))
        .await?;

    let dto = referral.into_dto();
    publish_event(state.notifier.as_ref(), events::REFERRAL_CREATED, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn update_referral(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateReferralDto>,
) -> Result<impl IntoResponse, AppError> {
    let referral = ReferralService::new(&state.db)
        .update(id, ReferralParam::from_update_dto(payload))
        .await?;

    let dto = referral.into_dto();
    publish_event(state.notifier.as_ref(), events::REFERRAL_UPDATED, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn delete_referral(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ReferralService::new(&state.db).delete(id).await?;

    publish_event(state.notifier.as_ref(), events::REFERRAL_DELETED, &json!({ "id": id }));

    Ok(StatusCode::NO_CONTENT)
}
