//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{
        CreateUserDto, UpdateUserDto, UpdateUserLevelDto, UserDetailsDto, UserDto, UserLevelDto,
        UserProfileDto, UserSettingsDto,
    },
    server::model::ledger::Account,
};

/// Background assigned to newly created profiles.
pub const DEFAULT_PROFILE_BACKGROUND: &str = "default";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Discord id of the user.
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub date_created: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            avatar_url: entity.avatar_url,
            date_created: entity.date_created,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            avatar_url: self.avatar_url,
            date_created: self.date_created,
        }
    }
}

/// A user with its account, level, settings and profile.
///
/// The owned rows are optional so a partially migrated database still reads.
#[derive(Debug, Clone, PartialEq)]
pub struct UserDetails {
    pub user: User,
    pub balance: Option<Account>,
    pub level: Option<UserLevel>,
    pub settings: Option<UserSettings>,
    pub profile: Option<UserProfile>,
}

impl UserDetails {
    pub fn into_dto(self) -> UserDetailsDto {
        UserDetailsDto {
            user: self.user.into_dto(),
            balance: self.balance.map(Account::into_dto),
            level: self.level.map(UserLevel::into_dto),
            settings: self.settings.map(UserSettings::into_dto),
            profile: self.profile.map(UserProfile::into_dto),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserLevel {
    pub user_id: String,
    pub xp: i64,
    pub level: i32,
    pub timestamp: DateTime<Utc>,
}

impl UserLevel {
    pub fn from_entity(entity: entity::user_level::Model) -> Self {
        Self {
            user_id: entity.user_id,
            xp: entity.xp,
            level: entity.level,
            timestamp: entity.timestamp,
        }
    }

    pub fn into_dto(self) -> UserLevelDto {
        UserLevelDto {
            user_id: self.user_id,
            xp: self.xp,
            level: self.level,
            timestamp: self.timestamp,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserSettings {
    pub user_id: String,
    pub level_notifications: bool,
    pub direct_messages: bool,
}

impl UserSettings {
    pub fn from_entity(entity: entity::user_settings::Model) -> Self {
        Self {
            user_id: entity.user_id,
            level_notifications: entity.level_notifications,
            direct_messages: entity.direct_messages,
        }
    }

    pub fn into_dto(self) -> UserSettingsDto {
        UserSettingsDto {
            user_id: self.user_id,
            level_notifications: self.level_notifications,
            direct_messages: self.direct_messages,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub user_id: String,
    pub bio: Option<String>,
    pub background: String,
}

impl UserProfile {
    pub fn from_entity(entity: entity::user_profile::Model) -> Self {
        Self {
            user_id: entity.user_id,
            bio: entity.bio,
            background: entity.background,
        }
    }

    pub fn into_dto(self) -> UserProfileDto {
        UserProfileDto {
            user_id: self.user_id,
            bio: self.bio,
            background: self.background,
        }
    }
}

/// Parameters for creating a user together with its owned rows.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            avatar_url: dto.avatar_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            name: dto.name,
            avatar_url: dto.avatar_url,
        }
    }
}

/// Experience and level to store, with an optional balance overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetLevelParam {
    pub user_id: String,
    pub xp: i64,
    pub level: i32,
    pub balance: Option<i64>,
    pub net_worth: Option<i64>,
}

impl SetLevelParam {
    pub fn from_dto(user_id: String, dto: UpdateUserLevelDto) -> Self {
        Self {
            user_id,
            xp: dto.xp,
            level: dto.level,
            balance: dto.balance,
            net_worth: dto.net_worth,
        }
    }
}
