//! Ledger account factory.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for `user_balance` rows. The owning user must already exist.
///
/// Defaults: balance 0, net worth equal to balance, version 0.
pub struct UserBalanceFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: String,
    balance: i64,
    net_worth: Option<i64>,
    version: i64,
}

impl<'a> UserBalanceFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, user_id: impl Into<String>) -> Self {
        Self {
            db,
            user_id: user_id.into(),
            balance: 0,
            net_worth: None,
            version: 0,
        }
    }

    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    pub fn net_worth(mut self, net_worth: i64) -> Self {
        self.net_worth = Some(net_worth);
        self
    }

    pub fn version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    pub async fn build(self) -> Result<entity::user_balance::Model, DbErr> {
        entity::user_balance::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            balance: ActiveValue::Set(self.balance),
            net_worth: ActiveValue::Set(self.net_worth.unwrap_or(self.balance)),
            version: ActiveValue::Set(self.version),
            date_last_claimed_dailies: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await
    }
}

/// Inserts an account for `user_id` holding `balance`.
pub async fn create_balance(
    db: &DatabaseConnection,
    user_id: &str,
    balance: i64,
) -> Result<entity::user_balance::Model, DbErr> {
    UserBalanceFactory::new(db, user_id)
        .balance(balance)
        .build()
        .await
}
