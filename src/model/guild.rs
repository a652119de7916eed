use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuildDto {
    pub id: String,
    pub name: String,
    pub icon_url: Option<String>,
    pub date_created: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuildDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuildDto {
    pub name: String,
    #[serde(default)]
    pub icon_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuildSettingsDto {
    pub guild_id: String,
    pub prefix: String,
    pub welcome_message: Option<String>,
    pub suggestions_channel_id: Option<String>,
    pub support_channel_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuildSettingsDto {
    pub prefix: String,
    #[serde(default)]
    pub welcome_message: Option<String>,
    #[serde(default)]
    pub suggestions_channel_id: Option<String>,
    #[serde(default)]
    pub support_channel_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuildSuggestionDto {
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub content: String,
    pub approved: Option<bool>,
    pub date_created: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuildSuggestionDto {
    pub user_id: String,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuildSuggestionDto {
    pub content: String,
    #[serde(default)]
    pub approved: Option<bool>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuildSupportTicketDto {
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub subject: String,
    pub message: String,
    pub open: bool,
    pub date_created: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuildSupportTicketDto {
    pub user_id: String,
    pub subject: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuildSupportTicketDto {
    pub subject: String,
    pub message: String,
    pub open: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GuildUserDto {
    pub id: i32,
    pub guild_id: String,
    pub user_id: String,
    pub nickname: Option<String>,
    pub date_joined: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateGuildUserDto {
    pub user_id: String,
    #[serde(default)]
    pub nickname: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGuildUserDto {
    #[serde(default)]
    pub nickname: Option<String>,
}
