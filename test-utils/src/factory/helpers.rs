//! Shared helpers used by the factories.

use std::sync::atomic::{AtomicU64, Ordering};

use sea_orm::{DatabaseConnection, DbErr};

static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Returns a process-wide unique value for building test identifiers.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Inserts a user together with a ledger account holding `balance`.
///
/// Requires the `User` and `UserBalance` tables.
///
/// # Returns
/// - `Ok((user, account))` - The created user and its account at version 0
/// - `Err(DbErr)` - Insert failed
pub async fn create_funded_user(
    db: &DatabaseConnection,
    balance: i64,
) -> Result<(entity::user::Model, entity::user_balance::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let account = crate::factory::user_balance::UserBalanceFactory::new(db, &user.id)
        .balance(balance)
        .build()
        .await?;

    Ok((user, account))
}
