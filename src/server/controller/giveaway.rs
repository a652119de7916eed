//! Giveaway endpoints.
//!
//! HTTP responses include item keys; the copies broadcast to socket clients are
//! redacted.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    model::giveaway::{CreateGiveawayDto, UpdateGiveawayDto},
    server::{
        error::AppError,
        model::giveaway::{CreateGiveawayParam, UpdateGiveawayParam},
        service::{
            giveaway::GiveawayService,
            notification::{events, publish_event},
        },
        state::AppState,
    },
};

pub async fn get_giveaways(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let giveaways = GiveawayService::new(&state.db).get_all().await?;

    let giveaways_dto: Vec<_> = giveaways.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(giveaways_dto)))
}

pub async fn get_giveaway(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let giveaway = GiveawayService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(giveaway.into_dto())))
}

pub async fn create_giveaway(
    State(state): State<AppState>,
    Json(payload): Json<CreateGiveawayDto>,
) -> Result<impl IntoResponse, AppError> {
    let giveaway = GiveawayService::new(&state.db)
        .create(CreateGiveawayParam::from_dto(payload))
        .await?;

    let dto = giveaway.into_dto();
    publish_event(
        state.notifier.as_ref(),
        events::GIVEAWAY_CREATED,
        &dto.redacted(),
    );

    Ok((StatusCode::CREATED, Json(dto)))
}

/// PUT /api/giveaways/{id} - Update the giveaway and replace all of its items
pub async fn update_giveaway(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateGiveawayDto>,
) -> Result<impl IntoResponse, AppError> {
    let giveaway = GiveawayService::new(&state.db)
        .update(id, UpdateGiveawayParam::from_dto(payload))
        .await?;

    let dto = giveaway.into_dto();
    publish_event(
        state.notifier.as_ref(),
        events::GIVEAWAY_UPDATED,
        &dto.redacted(),
    );

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn delete_giveaway(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    GiveawayService::new(&state.db).delete(id).await?;

    publish_event(state.notifier.as_ref(), events::GIVEAWAY_DELETED, &json!({ "id": id }));

    Ok(StatusCode::NO_CONTENT)
}
