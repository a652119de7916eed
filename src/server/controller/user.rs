//! User endpoints, including level, settings, profile and direct balance updates.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    model::user::{
        CreateUserDto, UpdateBalanceDto, UpdateUserDto, UpdateUserLevelDto, UpdateUserProfileDto,
        UpdateUserSettingsDto,
    },
    server::{
        error::AppError,
        model::{
            ledger::BalanceUpdate,
            user::{CreateUserParam, SetLevelParam, UpdateUserParam, UserProfile, UserSettings},
        },
        service::{
            notification::{events, publish_event},
            user::UserService,
        },
        state::AppState,
    },
};

/// GET /api/users
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let users_dto: Vec<_> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// GET /api/users/{id} - User with balance, level, settings and profile
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let details = UserService::new(&state.db).get_details(&id).await?;

    Ok((StatusCode::OK, Json(details.into_dto())))
}

/// POST /api/users
///
/// Creates the user along with a zero balance, level 0 and default settings and
/// profile in one transaction.
///
/// # Returns
/// - `201 Created`: The new user
/// - `400 Bad Request`: Invalid input or the id is taken
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParam::from_dto(payload))
        .await?;

    let dto = user.into_dto();
    publish_event(state.notifier.as_ref(), events::USER_CREATED, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

/// PUT /api/users/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .update(&id, UpdateUserParam::from_dto(payload))
        .await?;

    let dto = user.into_dto();
    publish_event(state.notifier.as_ref(), events::USER_UPDATED, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// DELETE /api/users/{id} - Delete the user and all of its owned records
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(&id).await?;

    publish_event(state.notifier.as_ref(), events::USER_DELETED, &json!({ "id": id }));

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_level(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let level = UserService::new(&state.db).get_level(&id).await?;

    Ok((StatusCode::OK, Json(level.into_dto())))
}

/// PUT /api/users/{id}/level - Set experience and level; the timestamp is set server-side
///
/// An optional `balance`/`netWorth` pair is the level-up reward. It overwrites the
/// account through the transfer engine before the level is stored, which also
/// publishes `balanceUpdated`.
///
/// # Returns
/// - `200 OK`: The stored level
/// - `400 Bad Request`: Negative values, or only one of `balance`/`netWorth`
/// - `404 Not Found`: No user with that id
/// - `503 Service Unavailable`: Contention or ledger failure while applying the reward
pub async fn set_level(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserLevelDto>,
) -> Result<impl IntoResponse, AppError> {
    let level = UserService::new(&state.db)
        .set_level(&state.transfer_engine, SetLevelParam::from_dto(id, payload))
        .await?;

    let dto = level.into_dto();
    publish_event(state.notifier.as_ref(), events::USER_LEVEL_UPDATED, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn get_settings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let settings = UserService::new(&state.db).get_settings(&id).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

pub async fn set_settings(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let settings = UserService::new(&state.db)
        .set_settings(UserSettings {
            user_id: id,
            level_notifications: payload.level_notifications,
            direct_messages: payload.direct_messages,
        })
        .await?;

    let dto = settings.into_dto();
    publish_event(state.notifier.as_ref(), events::USER_SETTINGS_UPDATED, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db).get_profile(&id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

pub async fn set_profile(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateUserProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db)
        .set_profile(UserProfile {
            user_id: id,
            bio: payload.bio,
            background: payload.background,
        })
        .await?;

    let dto = profile.into_dto();
    publish_event(state.notifier.as_ref(), events::USER_PROFILE_UPDATED, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// PUT /api/users/{id}/balance - Overwrite the account's balance fields
///
/// Goes through the transfer engine's conditional commit, which publishes
/// `balanceUpdated` itself.
///
/// # Returns
/// - `200 OK`: The updated account
/// - `400 Bad Request`: Negative balance
/// - `404 Not Found`: No account for the user
/// - `409 Conflict`: `expectedVersion` is stale
/// - `503 Service Unavailable`: Contention or ledger failure, safe to retry
pub async fn update_balance(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateBalanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let account = state
        .transfer_engine
        .update_balance(BalanceUpdate::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}
