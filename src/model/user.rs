use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::transfer::AccountDto;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub date_created: DateTime<Utc>,
}

/// User together with every row it owns.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserDetailsDto {
    #[serde(flatten)]
    pub user: UserDto,
    pub balance: Option<AccountDto>,
    pub level: Option<UserLevelDto>,
    pub settings: Option<UserSettingsDto>,
    pub profile: Option<UserProfileDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserLevelDto {
    pub user_id: String,
    pub xp: i64,
    pub level: i32,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSettingsDto {
    pub user_id: String,
    pub level_notifications: bool,
    pub direct_messages: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileDto {
    pub user_id: String,
    pub bio: Option<String>,
    pub background: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserLevelDto {
    pub xp: i64,
    pub level: i32,
    /// Level-up reward; overwrites the account's balance together with `net_worth`.
    #[serde(default)]
    pub balance: Option<i64>,
    #[serde(default)]
    pub net_worth: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSettingsDto {
    pub level_notifications: bool,
    pub direct_messages: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfileDto {
    #[serde(default)]
    pub bio: Option<String>,
    pub background: String,
}

/// Body of `PUT /api/users/{id}/balance`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBalanceDto {
    pub balance: i64,
    pub net_worth: i64,
    #[serde(default)]
    pub date_last_claimed_dailies: Option<DateTime<Utc>>,
    /// When present the write only applies if the account is still at this version.
    #[serde(default)]
    pub expected_version: Option<i64>,
}
