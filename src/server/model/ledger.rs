//! Ledger account and transfer models.

use chrono::{DateTime, Utc};

use crate::model::{
    transfer::{AccountDto, BalanceUpdatedDto, TransferRequestDto, TransferResultDto},
    user::UpdateBalanceDto,
};

/// Credit account owned by a user.
///
/// `version` increases by exactly one for every committed mutation and is the
/// token used by conditional writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub balance: i64,
    pub net_worth: i64,
    pub version: i64,
    pub date_last_claimed_dailies: Option<DateTime<Utc>>,
}

impl Account {
    pub fn from_entity(entity: entity::user_balance::Model) -> Self {
        Self {
            id: entity.user_id,
            balance: entity.balance,
            net_worth: entity.net_worth,
            version: entity.version,
            date_last_claimed_dailies: entity.date_last_claimed_dailies,
        }
    }

    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            balance: self.balance,
            net_worth: self.net_worth,
            version: self.version,
            date_last_claimed_dailies: self.date_last_claimed_dailies,
        }
    }

    /// Payload published as `balanceUpdated` after a commit.
    pub fn balance_event(&self) -> BalanceUpdatedDto {
        BalanceUpdatedDto {
            user_id: self.id.clone(),
            balance: self.balance,
            net_worth: self.net_worth,
        }
    }
}

/// One record of a conditional commit.
///
/// `account` holds the full post-state, including `version == expected_version + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedWrite {
    pub expected_version: i64,
    pub account: Account,
}

impl VersionedWrite {
    /// Builds the write that replaces `current` with `next`, bumping the version.
    pub fn replace(current: &Account, mut next: Account) -> Self {
        next.version = current.version + 1;
        Self {
            expected_version: current.version,
            account: next,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub from_id: String,
    pub to_id: String,
    pub amount: i64,
    pub idempotency_key: Option<String>,
}

impl TransferRequest {
    pub fn from_dto(dto: TransferRequestDto) -> Self {
        Self {
            from_id: dto.from_id,
            to_id: dto.to_id,
            amount: dto.amount,
            idempotency_key: dto.idempotency_key,
        }
    }
}

/// Durable record of an applied keyed transfer.
///
/// Committed in the same unit as the account writes, so its presence proves the
/// transfer landed no matter what happened to the accounts afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    pub idempotency_key: String,
    pub from_id: String,
    pub to_id: String,
    pub amount: i64,
}

impl TransferReceipt {
    /// `None` for unkeyed requests.
    pub fn for_request(request: &TransferRequest) -> Option<Self> {
        request.idempotency_key.as_ref().map(|key| Self {
            idempotency_key: key.clone(),
            from_id: request.from_id.clone(),
            to_id: request.to_id.clone(),
            amount: request.amount,
        })
    }

    pub fn from_entity(entity: entity::ledger_transfer::Model) -> Self {
        Self {
            idempotency_key: entity.idempotency_key,
            from_id: entity.from_user_id,
            to_id: entity.to_user_id,
            amount: entity.amount,
        }
    }

    /// Whether `request` describes the same transfer this receipt records.
    pub fn matches(&self, request: &TransferRequest) -> bool {
        self.from_id == request.from_id
            && self.to_id == request.to_id
            && self.amount == request.amount
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferResult {
    pub from: Account,
    pub to: Account,
    /// The idempotency key already had a receipt; no state changed and no events were sent.
    pub replayed: bool,
}

impl TransferResult {
    pub fn into_dto(self) -> TransferResultDto {
        TransferResultDto {
            from: self.from.into_dto(),
            to: self.to.into_dto(),
            replayed: self.replayed,
        }
    }
}

/// Direct overwrite of an account's balance fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceUpdate {
    pub user_id: String,
    pub balance: i64,
    pub net_worth: i64,
    /// `None` keeps the stored value.
    pub date_last_claimed_dailies: Option<DateTime<Utc>>,
    /// Optimistic guard; `None` retries on conflict instead.
    pub expected_version: Option<i64>,
}

impl BalanceUpdate {
    pub fn from_dto(user_id: String, dto: UpdateBalanceDto) -> Self {
        Self {
            user_id,
            balance: dto.balance,
            net_worth: dto.net_worth,
            date_last_claimed_dailies: dto.date_last_claimed_dailies,
            expected_version: dto.expected_version,
        }
    }
}
