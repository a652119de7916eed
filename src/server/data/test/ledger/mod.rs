use crate::server::{
    data::ledger::{LedgerStore, SeaOrmLedgerStore},
    error::ledger::LedgerError,
    model::ledger::{Account, TransferReceipt, VersionedWrite},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod commit_if;
mod find_receipt;
mod read_many;

/// Builds the write moving `delta` credits into `account`.
fn credit(account: &Account, delta: i64) -> VersionedWrite {
    VersionedWrite::replace(
        account,
        Account {
            balance: account.balance + delta,
            net_worth: account.net_worth + delta,
            ..account.clone()
        },
    )
}

fn receipt(key: &str, from: &str, to: &str, amount: i64) -> TransferReceipt {
    TransferReceipt {
        idempotency_key: key.to_string(),
        from_id: from.to_string(),
        to_id: to.to_string(),
        amount,
    }
}

/// Reads two accounts, returned in argument order.
async fn read_pair(store: &SeaOrmLedgerStore, from: &str, to: &str) -> (Account, Account) {
    let accounts = store
        .read_many(&[from.to_string(), to.to_string()])
        .await
        .unwrap();
    let pick = |id: &str| accounts.iter().find(|acc| acc.id == id).unwrap().clone();

    (pick(from), pick(to))
}
