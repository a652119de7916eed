//! Guild endpoints with nested settings, suggestions, support tickets and members.
//!
//! Nested routes take the guild id from the path; a child record that belongs to
//! another guild is reported as not found.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    model::guild::{
        CreateGuildDto, CreateGuildSuggestionDto, CreateGuildSupportTicketDto, CreateGuildUserDto,
        UpdateGuildDto, UpdateGuildSettingsDto, UpdateGuildSuggestionDto,
        UpdateGuildSupportTicketDto, UpdateGuildUserDto,
    },
    server::{
        error::AppError,
        model::guild::{
            CreateGuildMemberParam, CreateGuildParam, CreateSuggestionParam,
            CreateSupportTicketParam, UpdateGuildParam, UpdateGuildSettingsParam,
            UpdateSuggestionParam, UpdateSupportTicketParam,
        },
        service::{
            guild::GuildService,
            notification::{events, publish_event},
        },
        state::AppState,
    },
};

pub async fn get_guilds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let guilds = GuildService::new(&state.db).get_all().await?;

    let guilds_dto: Vec<_> = guilds.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(guilds_dto)))
}

pub async fn get_guild(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let guild = GuildService::new(&state.db).get(&id).await?;

    Ok((StatusCode::OK, Json(guild.into_dto())))
}

/// POST /api/guilds - Create a guild with default settings
pub async fn create_guild(
    State(state): State<AppState>,
    Json(payload): Json<CreateGuildDto>,
) -> Result<impl IntoResponse, AppError> {
    let guild = GuildService::new(&state.db)
        .create(CreateGuildParam::from_dto(payload))
        .await?;

    let dto = guild.into_dto();
    publish_event(state.notifier.as_ref(), events::GUILD_CREATED, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn update_guild(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGuildDto>,
) -> Result<impl IntoResponse, AppError> {
    let guild = GuildService::new(&state.db)
        .update(&id, UpdateGuildParam::from_dto(payload))
        .await?;

    let dto = guild.into_dto();
    publish_event(state.notifier.as_ref(), events::GUILD_UPDATED, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

/// DELETE /api/guilds/{id} - Delete the guild and everything nested under it
pub async fn delete_guild(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    GuildService::new(&state.db).delete(&id).await?;

    publish_event(state.notifier.as_ref(), events::GUILD_DELETED, &json!({ "id": id }));

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_settings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let settings = GuildService::new(&state.db).get_settings(&id).await?;

    Ok((StatusCode::OK, Json(settings.into_dto())))
}

pub async fn set_settings(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateGuildSettingsDto>,
) -> Result<impl IntoResponse, AppError> {
    let settings = GuildService::new(&state.db)
        .set_settings(&id, UpdateGuildSettingsParam::from_dto(payload))
        .await?;

    let dto = settings.into_dto();
    publish_event(state.notifier.as_ref(), events::GUILD_SETTINGS_UPDATED, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn get_suggestions(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let suggestions = GuildService::new(&state.db).get_suggestions(&id).await?;

    let suggestions_dto: Vec<_> = suggestions.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(suggestions_dto)))
}

pub async fn get_suggestion(
    State(state): State<AppState>,
    Path((id, suggestion_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let suggestion = GuildService::new(&state.db)
        .get_suggestion(&id, suggestion_id)
        .await?;

    Ok((StatusCode::OK, Json(suggestion.into_dto())))
}

pub async fn create_suggestion(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateGuildSuggestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let suggestion = GuildService::new(&state.db)
        .create_suggestion(CreateSuggestionParam::from_dto(id, payload))
        .await?;

    let dto = suggestion.into_dto();
    publish_event(state.notifier.as_ref(), events::GUILD_SUGGESTION_CREATED, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn update_suggestion(
    State(state): State<AppState>,
    Path((id, suggestion_id)): Path<(String, i32)>,
    Json(payload): Json<UpdateGuildSuggestionDto>,
) -> Result<impl IntoResponse, AppError> {
    let suggestion = GuildService::new(&state.db)
        .update_suggestion(&id, suggestion_id, UpdateSuggestionParam::from_dto(payload))
        .await?;

    let dto = suggestion.into_dto();
    publish_event(state.notifier.as_ref(), events::GUILD_SUGGESTION_UPDATED, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn delete_suggestion(
    State(state): State<AppState>,
    Path((id, suggestion_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    GuildService::new(&state.db)
        .delete_suggestion(&id, suggestion_id)
        .await?;

    publish_event(
        state.notifier.as_ref(),
        events::GUILD_SUGGESTION_DELETED,
        &json!({ "guildId": id, "id": suggestion_id }),
    );

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_support_tickets(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tickets = GuildService::new(&state.db).get_support_tickets(&id).await?;

    let tickets_dto: Vec<_> = tickets.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(tickets_dto)))
}

pub async fn get_support_ticket(
    State(state): State<AppState>,
    Path((id, ticket_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = GuildService::new(&state.db)
        .get_support_ticket(&id, ticket_id)
        .await?;

    Ok((StatusCode::OK, Json(ticket.into_dto())))
}

pub async fn create_support_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateGuildSupportTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = GuildService::new(&state.db)
        .create_support_ticket(CreateSupportTicketParam::from_dto(id, payload))
        .await?;

    let dto = ticket.into_dto();
    publish_event(
        state.notifier.as_ref(),
        events::GUILD_SUPPORT_TICKET_CREATED,
        &dto,
    );

    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn update_support_ticket(
    State(state): State<AppState>,
    Path((id, ticket_id)): Path<(String, i32)>,
    Json(payload): Json<UpdateGuildSupportTicketDto>,
) -> Result<impl IntoResponse, AppError> {
    let ticket = GuildService::new(&state.db)
        .update_support_ticket(&id, ticket_id, UpdateSupportTicketParam::from_dto(payload))
        .await?;

    let dto = ticket.into_dto();
    publish_event(
        state.notifier.as_ref(),
        events::GUILD_SUPPORT_TICKET_UPDATED,
        &dto,
    );

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn delete_support_ticket(
    State(state): State<AppState>,
    Path((id, ticket_id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    GuildService::new(&state.db)
        .delete_support_ticket(&id, ticket_id)
        .await?;

    publish_event(
        state.notifier.as_ref(),
        events::GUILD_SUPPORT_TICKET_DELETED,
        &json!({ "guildId": id, "id": ticket_id }),
    );

    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_members(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let members = GuildService::new(&state.db).get_members(&id).await?;

    let members_dto: Vec<_> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members_dto)))
}

pub async fn get_member(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let member = GuildService::new(&state.db)
        .get_member(&id, &user_id)
        .await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

/// POST /api/guilds/{id}/users - Add an existing user to the guild
///
/// # Returns
/// - `201 Created`: The membership
/// - `400 Bad Request`: The user is already a member
/// - `404 Not Found`: Guild or user does not exist
pub async fn add_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CreateGuildUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = GuildService::new(&state.db)
        .add_member(CreateGuildMemberParam::from_dto(id, payload))
        .await?;

    let dto = member.into_dto();
    publish_event(state.notifier.as_ref(), events::GUILD_USER_CREATED, &dto);

    Ok((StatusCode::CREATED, Json(dto)))
}

pub async fn update_member(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
    Json(payload): Json<UpdateGuildUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let member = GuildService::new(&state.db)
        .update_member(&id, &user_id, payload.nickname)
        .await?;

    let dto = member.into_dto();
    publish_event(state.notifier.as_ref(), events::GUILD_USER_UPDATED, &dto);

    Ok((StatusCode::OK, Json(dto)))
}

pub async fn remove_member(
    State(state): State<AppState>,
    Path((id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    GuildService::new(&state.db)
        .remove_member(&id, &user_id)
        .await?;

    publish_event(
        state.notifier.as_ref(),
        events::GUILD_USER_DELETED,
        &json!({ "guildId": id, "userId": user_id }),
    );

    Ok(StatusCode::NO_CONTENT)
}
