use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicU32, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use sea_orm::DbErr;
use serde_json::Value;

use crate::server::{
    data::ledger::LedgerStore,
    error::{ledger::LedgerError, notify::NotifyError, transfer::TransferError},
    model::ledger::{Account, BalanceUpdate, TransferReceipt, TransferRequest, VersionedWrite},
    service::{
        notification::NotificationSink,
        transfer::{RetryPolicy, TransferEngine},
    },
};


/// In-memory ledger applying conditional commits under the accounts lock.
#[derive(Default)]
pub struct MemoryLedger {
    accounts: Mutex<HashMap<String, Account>>,
    receipts: Mutex<HashMap<String, TransferReceipt>>,
    /// Yields to the scheduler after each read so concurrent callers interleave.
    yield_on_read: bool,
}

impl MemoryLedger {
    pub fn with_accounts(accounts: &[(&str, i64, i64)]) -> Self {
        let accounts = accounts
            .iter()
            .map(|(id, balance, net_worth)| (id.to_string(), account(id, *balance, *net_worth)))
            .collect();

        Self {
            accounts: Mutex::new(accounts),
            ..Self::default()
        }
    }

    pub fn interleaving(mut self) -> Self {
        self.yield_on_read = true;
        self
    }

    pub fn get(&self, id: &str) -> Account {
        self.accounts.lock().unwrap()[id].clone()
    }

    pub fn receipt(&self, key: &str) -> Option<TransferReceipt> {
        self.receipts.lock().unwrap().get(key).cloned()
    }

    pub fn total_balance(&self) -> i64 {
        self.accounts.lock().unwrap().values().map(|a| a.balance).sum()
    }
}

#[async_trait]
impl LedgerStore for MemoryLedger {
    async fn read_many(&self, ids: &[String]) -> Result<Vec<Account>, LedgerError> {
        let accounts = {
            let accounts = self.accounts.lock().unwrap();
            ids.iter()
                .filter_map(|id| accounts.get(id).cloned())
                .collect()
        };

        if self.yield_on_read {
            tokio::task::yield_now().await;
        }

        Ok(accounts)
    }

    async fn find_receipt(&self, key: &str) -> Result<Option<TransferReceipt>, LedgerError> {
        Ok(self.receipt(key))
    }

    async fn commit_if(
        &self,
        writes: &[VersionedWrite],
        receipt: Option<&TransferReceipt>,
    ) -> Result<(), LedgerError> {
        let mut accounts = self.accounts.lock().unwrap();
        let mut receipts = self.receipts.lock().unwrap();

        if let Some(receipt) = receipt {
            if receipts.contains_key(&receipt.idempotency_key) {
                return Err(LedgerError::DuplicateReceipt {
                    key: receipt.idempotency_key.clone(),
                });
            }
        }
        for write in writes {
            let current = accounts.get(&write.account.id);
            if current.map(|a| a.version) != Some(write.expected_version) {
                return Err(LedgerError::Conflict {
                    account: write.account.id.clone(),
                });
            }
        }
        for write in writes {
            accounts.insert(write.account.id.clone(), write.account.clone());
        }
        if let Some(receipt) = receipt {
            receipts.insert(receipt.idempotency_key.clone(), receipt.clone());
        }

        Ok(())
    }
}

/// Wraps a `MemoryLedger` and injects faults a fixed number of times.
#[derive(Default)]
pub struct FlakyLedger {
    pub inner: Arc<MemoryLedger>,
    /// Commits rejected with a version conflict.
    pub conflicts: AtomicU32,
    /// Commits that hang before applying.
    pub lost_commits: AtomicU32,
    /// Commits that apply, then hang before acknowledging.
    pub unacknowledged_commits: AtomicU32,
    /// Reads that hang.
    pub hung_reads: AtomicU32,
    /// Every call fails with a database error.
    pub broken: AtomicBool,
    /// Commits that reached the inner ledger.
    pub applied: AtomicU32,
}

impl FlakyLedger {
    pub fn new(inner: MemoryLedger) -> Self {
        Self {
            inner: Arc::new(inner),
            ..Self::default()
        }
    }
}

/// Decrements `counter` if it is positive, returning whether it was.
fn take(counter: &AtomicU32) -> bool {
    counter
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
        .is_ok()
}

fn broken_store() -> LedgerError {
    LedgerError::Db(DbErr::Custom("disk unavailable".to_string()))
}

#[async_trait]
impl LedgerStore for FlakyLedger {
    async fn read_many(&self, ids: &[String]) -> Result<Vec<Account>, LedgerError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(broken_store());
        }
        if take(&self.hung_reads) {
            std::future::pending::<()>().await;
        }

        self.inner.read_many(ids).await
    }

    async fn find_receipt(&self, key: &str) -> Result<Option<TransferReceipt>, LedgerError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(broken_store());
        }

        self.inner.find_receipt(key).await
    }

    async fn commit_if(
        &self,
        writes: &[VersionedWrite],
        receipt: Option<&TransferReceipt>,
    ) -> Result<(), LedgerError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(broken_store());
        }
        if take(&self.conflicts) {
            return Err(LedgerError::Conflict {
                account: writes[0].account.id.clone(),
            });
        }
        if take(&self.lost_commits) {
            std::future::pending::<()>().await;
        }

        self.inner.commit_if(writes, receipt).await?;
        self.applied.fetch_add(1, Ordering::SeqCst);

        if take(&self.unacknowledged_commits) {
            std::future::pending::<()>().await;
        }

        Ok(())
    }
}

/// Sink keeping every published event.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<(String, Value)>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<(String, Value)> {
        self.events.lock().unwrap().clone()
    }
}

impl NotificationSink for RecordingSink {
    fn publish(&self, event: &str, payload: Value) -> Result<(), NotifyError> {
        self.events
            .lock()
            .unwrap()
            .push((event.to_string(), payload));
        Ok(())
    }
}

/// Sink rejecting every event.
pub struct FailingSink;

impl NotificationSink for FailingSink {
    fn publish(&self, _event: &str, _payload: Value) -> Result<(), NotifyError> {
        let err = serde_json::from_str::<Value>("{").unwrap_err();
        Err(NotifyError::Serialize(err))
    }
}

pub fn account(id: &str, balance: i64, net_worth: i64) -> Account {
    Account {
        id: id.to_string(),
        balance,
        net_worth,
        version: 0,
        date_last_claimed_dailies: None,
    }
}

/// Short backoffs and store timeout so fault tests finish quickly.
pub fn fast_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 5,
        base_backoff: Duration::from_millis(1),
        max_backoff: Duration::from_millis(5),
        store_timeout: Duration::from_millis(50),
        jitter: 0.0,
    }
}

pub fn engine(store: Arc<dyn LedgerStore>) -> (TransferEngine, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let engine = TransferEngine::new(store, sink.clone(), fast_policy());
    (engine, sink)
}

pub fn request(from: &str, to: &str, amount: i64) -> TransferRequest {
    TransferRequest {
        from_id: from.to_string(),
        to_id: to.to_string(),
        amount,
        idempotency_key: None,
    }
}

pub fn keyed_request(from: &str, to: &str, amount: i64, key: &str) -> TransferRequest {
    TransferRequest {
        idempotency_key: Some(key.to_string()),
        ..request(from, to, amount)
    }
}

pub fn balance_update(user_id: &str, balance: i64, net_worth: i64) -> BalanceUpdate {
    BalanceUpdate {
        user_id: user_id.to_string(),
        balance,
        net_worth,
        date_last_claimed_dailies: None,
        expected_version: None,
    }
}

/// Asserts the error kind while keeping the full error in the failure message.
pub fn assert_kind(err: &TransferError, kind: &str) {
    assert_eq!(err.kind(), kind, "unexpected error: {:?}", err);
}
