//! Durable storage of ledger accounts with conditional multi-record commits.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    TransactionTrait,
};

use crate::server::{
    error::ledger::LedgerError,
    model::ledger::{Account, TransferReceipt, VersionedWrite},
};

/// Storage backend of the transfer engine.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Reads the accounts with the given ids. Missing ids are simply absent from
    /// the result; order is unspecified.
    async fn read_many(&self, ids: &[String]) -> Result<Vec<Account>, LedgerError>;

    /// Looks up the receipt of a keyed transfer.
    async fn find_receipt(&self, key: &str) -> Result<Option<TransferReceipt>, LedgerError>;

    /// Applies every write, and the receipt when given, or none of them.
    ///
    /// Each write only applies if the stored version still equals its
    /// `expected_version`; otherwise the whole unit is discarded and
    /// `LedgerError::Conflict` is returned. A receipt whose key is already
    /// stored discards the unit with `LedgerError::DuplicateReceipt`.
    async fn commit_if(
        &self,
        writes: &[VersionedWrite],
        receipt: Option<&TransferReceipt>,
    ) -> Result<(), LedgerError>;
}

/// `LedgerStore` backed by the `user_balance` and `ledger_transfer` tables.
#[derive(Clone)]
pub struct SeaOrmLedgerStore {
    db: DatabaseConnection,
}

impl SeaOrmLedgerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LedgerStore for SeaOrmLedgerStore {
    async fn read_many(&self, ids: &[String]) -> Result<Vec<Account>, LedgerError> {
        let entities = entity::prelude::UserBalance::find()
            .filter(entity::user_balance::Column::UserId.is_in(ids.iter().cloned()))
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(Account::from_entity).collect())
    }

    async fn find_receipt(&self, key: &str) -> Result<Option<TransferReceipt>, LedgerError> {
        let entity = entity::prelude::LedgerTransfer::find_by_id(key)
            .one(&self.db)
            .await?;

        Ok(entity.map(TransferReceipt::from_entity))
    }

    async fn commit_if(
        &self,
        writes: &[VersionedWrite],
        receipt: Option<&TransferReceipt>,
    ) -> Result<(), LedgerError> {
        let txn = self.db.begin().await?;

        if let Some(receipt) = receipt {
            let existing =
                entity::prelude::LedgerTransfer::find_by_id(receipt.idempotency_key.as_str())
                    .one(&txn)
                    .await?;
            if existing.is_some() {
                txn.rollback().await?;
                return Err(LedgerError::DuplicateReceipt {
                    key: receipt.idempotency_key.clone(),
                });
            }
        }

        for write in writes {
            let account = &write.account;
            let result = entity::prelude::UserBalance::update_many()
                .set(entity::user_balance::ActiveModel {
                    balance: ActiveValue::Set(account.balance),
                    net_worth: ActiveValue::Set(account.net_worth),
                    version: ActiveValue::Set(account.version),
                    date_last_claimed_dailies: ActiveValue::Set(
                        account.date_last_claimed_dailies,
                    ),
                    ..Default::default()
                })
                .filter(entity::user_balance::Column::UserId.eq(account.id.as_str()))
                .filter(entity::user_balance::Column::Version.eq(write.expected_version))
                .exec(&txn)
                .await?;

            if result.rows_affected != 1 {
                txn.rollback().await?;
                return Err(LedgerError::Conflict {
                    account: account.id.clone(),
                });
            }
        }

        if let Some(receipt) = receipt {
            entity::ledger_transfer::ActiveModel {
                idempotency_key: ActiveValue::Set(receipt.idempotency_key.clone()),
                from_user_id: ActiveValue::Set(receipt.from_id.clone()),
                to_user_id: ActiveValue::Set(receipt.to_id.clone()),
                amount: ActiveValue::Set(receipt.amount),
                date_applied: ActiveValue::Set(Utc::now()),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(())
    }
}
