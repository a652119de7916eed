use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/transfers`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequestDto {
    pub from_id: String,
    pub to_id: String,
    pub amount: i64,
    #[serde(default)]
    pub idempotency_key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub id: String,
    pub balance: i64,
    pub net_worth: i64,
    pub version: i64,
    pub date_last_claimed_dailies: Option<DateTime<Utc>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferResultDto {
    pub from: AccountDto,
    pub to: AccountDto,
    /// True when the idempotency key had already been applied and nothing changed.
    pub replayed: bool,
}

/// Payload of the `balanceUpdated` event.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdatedDto {
    pub user_id: String,
    pub balance: i64,
    pub net_worth: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TransferErrorDto {
    pub kind: String,
    pub message: String,
}
