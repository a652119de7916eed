use thiserror::Error;

/// Failure of a single ledger store call.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A conditional write found a version other than the expected one.
    /// Nothing from the commit unit was applied.
    #[error("Version conflict on account {account}")]
    Conflict { account: String },

    /// A receipt with this idempotency key already exists.
    /// Nothing from the commit unit was applied.
    #[error("Transfer {key} already has a receipt")]
    DuplicateReceipt { key: String },

    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}
