use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayDto {
    pub id: i32,
    pub guild_id: String,
    pub title: String,
    pub description: Option<String>,
    pub date_created: DateTime<Utc>,
    pub date_end: DateTime<Utc>,
    pub items: Vec<GiveawayItemDto>,
}

impl GiveawayDto {
    /// Copy safe for broadcasting: every item key is removed.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for item in &mut copy.items {
            item.key = None;
        }
        copy
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayItemDto {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GiveawayItemInputDto {
    pub name: String,
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateGiveawayDto {
    pub guild_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date_end: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<GiveawayItemInputDto>,
}

/// Replaces the giveaway's fields and its whole item list.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGiveawayDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date_end: DateTime<Utc>,
    #[serde(default)]
    pub items: Vec<GiveawayItemInputDto>,
}
