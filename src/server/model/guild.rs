//! Guild domain models and parameters.
//!
//! Suggestions, support tickets, settings and members always belong to exactly
//! one guild; lookups of nested resources are scoped by the guild id.

use chrono::{DateTime, Utc};

use crate::model::guild::{
    CreateGuildDto, CreateGuildSuggestionDto, CreateGuildSupportTicketDto, CreateGuildUserDto,
    GuildDto, GuildSettingsDto, GuildSuggestionDto, GuildSupportTicketDto, GuildUserDto,
    UpdateGuildDto, UpdateGuildSettingsDto, UpdateGuildSuggestionDto, UpdateGuildSupportTicketDto,
};

/// Prefix given to new guilds until they configure their own.
pub const DEFAULT_GUILD_PREFIX: &str = "!";

#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub date_created: DateTime<Utc>,
}

impl Guild {
    pub fn from_entity(entity: entity::guild::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            icon_url: entity.icon_url,
            date_created: entity.date_created,
        }
    }

    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            id: self.id,
            name: self.name,
            icon_url: self.icon_url,
            date_created: self.date_created,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuildSettings {
    pub guild_id: String,
    pub prefix: String,
    pub welcome_message: Option<String>,
    pub suggestions_channel_id: Option<String>,
    pub support_channel_id: Option<String>,
}

impl GuildSettings {
    pub fn from_entity(entity: entity::guild_settings::Model) -> Self {
        Self {
            guild_id: entity.guild_id,
            prefix: entity.prefix,
            welcome_message: entity.welcome_message,
            suggestions_channel_id: entity.suggestions_channel_id,
            support_channel_id: entity.support_channel_id,
        }
    }

    pub fn into_dto(self) -> GuildSettingsDto {
        GuildSettingsDto {
            guild_id: self.guild_id,
            prefix: self.prefix,
            welcome_message: self.welcome_message,
            suggestions_channel_id: self.suggestions_channel_id,
            support_channel_id: self.support_channel_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuildSuggestion {
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub content: String,
    pub approved: Option<bool>,
    pub date_created: DateTime<Utc>,
}

impl GuildSuggestion {
    pub fn from_entity(entity: entity::guild_suggestion::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            user_id: entity.user_id,
            content: entity.content,
            approved: entity.approved,
            date_created: entity.date_created,
        }
    }

    pub fn into_dto(self) -> GuildSuggestionDto {
        GuildSuggestionDto {
            id: self.id,
            guild_id: self.guild_id,
            user_id: self.user_id,
            content: self.content,
            approved: self.approved,
            date_created: self.date_created,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuildSupportTicket {
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub subject: String,
    pub message: String,
    pub open: bool,
    pub date_created: DateTime<Utc>,
}

impl GuildSupportTicket {
    pub fn from_entity(entity: entity::guild_support_ticket::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            user_id: entity.user_id,
            subject: entity.subject,
            message: entity.message,
            open: entity.open,
            date_created: entity.date_created,
        }
    }

    pub fn into_dto(self) -> GuildSupportTicketDto {
        GuildSupportTicketDto {
            id: self.id,
            guild_id: self.guild_id,
            user_id: self.user_id,
            subject: self.subject,
            message: self.message,
            open: self.open,
            date_created: self.date_created,
        }
    }
}

/// Membership of a user in a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub nickname: Option<String>,
    pub date_joined: DateTime<Utc>,
}

impl GuildMember {
    pub fn from_entity(entity: entity::guild_user::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: entity.guild_id,
            user_id: entity.user_id,
            nickname: entity.nickname,
            date_joined: entity.date_joined,
        }
    }

    pub fn into_dto(self) -> GuildUserDto {
        GuildUserDto {
            id: self.id,
            guild_id: self.guild_id,
            user_id: self.user_id,
            nickname: self.nickname,
            date_joined: self.date_joined,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGuildParam {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
}

impl CreateGuildParam {
    pub fn from_dto(dto: CreateGuildDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            icon_url: dto.icon_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGuildParam {
    pub name: String,
    pub icon_url: Option<String>,
}

impl UpdateGuildParam {
    pub fn from_dto(dto: UpdateGuildDto) -> Self {
        Self {
            name: dto.name,
            icon_url: dto.icon_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGuildSettingsParam {
    pub prefix: String,
    pub welcome_message: Option<String>,
    pub suggestions_channel_id: Option<String>,
    pub support_channel_id: Option<String>,
}

impl UpdateGuildSettingsParam {
    pub fn from_dto(dto: UpdateGuildSettingsDto) -> Self {
        Self {
            prefix: dto.prefix,
            welcome_message: dto.welcome_message,
            suggestions_channel_id: dto.suggestions_channel_id,
            support_channel_id: dto.support_channel_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSuggestionParam {
    pub guild_id: String,
    pub user_id: String,
    pub content: String,
}

impl CreateSuggestionParam {
    pub fn from_dto(guild_id: String, dto: CreateGuildSuggestionDto) -> Self {
        Self {
            guild_id,
            user_id: dto.user_id,
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSuggestionParam {
    pub content: String,
    pub approved: Option<bool>,
}

impl UpdateSuggestionParam {
    pub fn from_dto(dto: UpdateGuildSuggestionDto) -> Self {
        Self {
            content: dto.content,
            approved: dto.approved,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSupportTicketParam {
    pub guild_id: String,
    pub user_id: String,
    pub subject: String,
    pub message: String,
}

impl CreateSupportTicketParam {
    pub fn from_dto(guild_id: String, dto: CreateGuildSupportTicketDto) -> Self {
        Self {
            guild_id,
            user_id: dto.user_id,
            subject: dto.subject,
            message: dto.message,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSupportTicketParam {
    pub subject: String,
    pub message: String,
    pub open: bool,
}

impl UpdateSupportTicketParam {
    pub fn from_dto(dto: UpdateGuildSupportTicketDto) -> Self {
        Self {
            subject: dto.subject,
            message: dto.message,
            open: dto.open,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGuildMemberParam {
    pub guild_id: String,
    pub user_id: String,
    pub nickname: Option<String>,
}

impl CreateGuildMemberParam {
    pub fn from_dto(guild_id: String, dto: CreateGuildUserDto) -> Self {
        Self {
            guild_id,
            user_id: dto.user_id,
            nickname: dto.nickname,
        }
    }
}
