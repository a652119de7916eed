use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{guild::GuildDto, user::UserDto};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralDto {
    pub id: i32,
    pub user_id: String,
    pub guild_id: String,
    pub date_created: DateTime<Utc>,
}

/// Referral with the referred user and the guild it points at.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReferralDetailsDto {
    #[serde(flatten)]
    pub referral: ReferralDto,
    pub user: Option<UserDto>,
    pub guild: Option<GuildDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateReferralDto {
    pub user_id: String,
    pub guild_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReferralDto {
    pub user_id: String,
    pub guild_id: String,
}
