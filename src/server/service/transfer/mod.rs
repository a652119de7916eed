//! Transfer engine: atomic two-party credit transfers and direct balance updates.
//!
//! Every mutation follows the same loop: read the current accounts, validate
//! against what was read, then commit conditionally on the versions that were
//! read. A commit that loses a version race is retried with backoff from a fresh
//! read, so funds are re-checked on every attempt. Balance events are published
//! only after a commit succeeded, and a publish failure never undoes a commit.
//!
//! Store calls are bounded by `RetryPolicy::store_timeout`. A commit that times
//! out has an unknown outcome and is settled on the next read:
//! - keyed transfers commit a receipt with the account writes, so the receipt
//!   alone tells whether the transfer landed;
//! - otherwise the accounts are compared with the timed out writes. Stored
//!   post-state means it landed, untouched versions mean it did not, and
//!   anything else cannot be decided and fails with `Unavailable` rather than
//!   risking a second application.

pub mod retry;

#[cfg(test)]
mod test;

use std::{future::Future, sync::Arc};

pub use retry::RetryPolicy;

use crate::server::{
    data::ledger::LedgerStore,
    error::{ledger::LedgerError, transfer::TransferError},
    model::ledger::{
        Account, BalanceUpdate, TransferReceipt, TransferRequest, TransferResult, VersionedWrite,
    },
    service::notification::{events, publish_event, NotificationSink},
};

/// Step of a ledger mutation, attached to its log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferPhase {
    Validating,
    Reading,
    Committing,
    Retrying,
    Committed,
    Failed,
}

/// Why the previous attempt did not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Interruption {
    Conflict,
    TimedOut,
}

enum CommitOutcome {
    Applied,
    Conflict,
    TimedOut,
}

/// What a fresh read says about writes whose commit timed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settlement {
    Landed,
    NotApplied,
    Unknown,
}

#[derive(Clone)]
pub struct TransferEngine {
    store: Arc<dyn LedgerStore>,
    sink: Arc<dyn NotificationSink>,
    policy: RetryPolicy,
}

impl TransferEngine {
    pub fn new(
        store: Arc<dyn LedgerStore>,
        sink: Arc<dyn NotificationSink>,
        policy: RetryPolicy,
    ) -> Self {
        Self {
            store,
            sink,
            policy,
        }
    }

    /// Moves `amount` credits from one account to another.
    ///
    /// Both balances and net worths change by exactly `amount` in one atomic
    /// commit, and both versions are bumped. On success a `balanceUpdated` event
    /// is published for each account.
    ///
    /// When `idempotency_key` is set a receipt is committed together with the
    /// account writes. A later request with a key that already has a receipt is
    /// answered with the current accounts and `replayed: true`; nothing is
    /// written or published.
    ///
    /// # Returns
    /// - `Ok(TransferResult)` - Post-transfer state of both accounts
    /// - `Err(TransferError::InvalidOperation)` - `from_id == to_id`
    /// - `Err(TransferError::InvalidArgument)` - Empty id, non-positive amount, overflow or
    ///   a key already used for a different transfer
    /// - `Err(TransferError::NotFound)` - Either account does not exist
    /// - `Err(TransferError::InsufficientFunds)` - Sender balance below `amount`
    /// - `Err(TransferError::Contention)` - Every attempt lost a version race
    /// - `Err(TransferError::Unavailable)` - Store failed, kept timing out, or a timed out
    ///   commit could not be settled
    pub async fn transfer(&self, request: TransferRequest) -> Result<TransferResult, TransferError> {
        tracing::debug!(
            phase = ?TransferPhase::Validating,
            from = %request.from_id,
            to = %request.to_id,
            amount = request.amount,
            "Transfer requested"
        );
        validate_transfer(&request).inspect_err(|err| self.log_failure(err))?;

        let ids = [request.from_id.clone(), request.to_id.clone()];
        let receipt = TransferReceipt::for_request(&request);
        // Writes of a timed out commit, kept until a read settles them.
        let mut pending: Option<[VersionedWrite; 2]> = None;
        let mut last = Interruption::Conflict;

        for attempt in 1..=self.policy.max_attempts {
            self.wait_before(attempt).await;

            tracing::debug!(phase = ?TransferPhase::Reading, attempt, "Reading accounts");
            let Some(accounts) = self.fetch("read", self.store.read_many(&ids)).await? else {
                last = Interruption::TimedOut;
                continue;
            };
            let (from, to) = pick_pair(accounts, &request).inspect_err(|err| self.log_failure(err))?;

            if let Some(receipt) = &receipt {
                let key = receipt.idempotency_key.as_str();
                let Some(stored) = self
                    .fetch("receipt lookup", self.store.find_receipt(key))
                    .await?
                else {
                    last = Interruption::TimedOut;
                    continue;
                };

                if let Some(stored) = stored {
                    if !stored.matches(&request) {
                        let err = TransferError::InvalidArgument(format!(
                            "Idempotency key {} was already used for a different transfer",
                            key
                        ));
                        self.log_failure(&err);
                        return Err(err);
                    }
                    if pending.is_some() {
                        tracing::debug!(attempt, "Timed out commit of {} was applied", key);
                        return Ok(self.transfer_committed(from, to));
                    }

                    tracing::info!(
                        "Transfer {} from {} to {} already applied, replaying",
                        key,
                        from.id,
                        to.id
                    );
                    return Ok(TransferResult {
                        from,
                        to,
                        replayed: true,
                    });
                }
            } else if let Some(writes) = &pending {
                match settle(writes, &[&from, &to]) {
                    Settlement::Landed => {
                        tracing::debug!(attempt, "Timed out commit was applied");
                        return Ok(self.transfer_committed(from, to));
                    }
                    Settlement::Unknown => {
                        let err = TransferError::Unavailable(format!(
                            "Outcome of timed out transfer from {} to {} is unknown; \
                             accounts changed before it could be confirmed",
                            from.id, to.id
                        ));
                        self.log_failure(&err);
                        return Err(err);
                    }
                    Settlement::NotApplied => {
                        tracing::debug!(attempt, "Timed out commit was not applied");
                    }
                }
            }

            let (next_from, next_to) =
                apply_transfer(&from, &to, &request).inspect_err(|err| self.log_failure(err))?;
            let writes = [
                VersionedWrite::replace(&from, next_from),
                VersionedWrite::replace(&to, next_to),
            ];

            tracing::debug!(
                phase = ?TransferPhase::Committing,
                attempt,
                from_version = from.version,
                to_version = to.version,
                "Committing transfer"
            );
            match self.commit(&writes, receipt.as_ref()).await? {
                CommitOutcome::Applied => {
                    let [from_write, to_write] = writes;
                    return Ok(self.transfer_committed(from_write.account, to_write.account));
                }
                CommitOutcome::Conflict => {
                    tracing::debug!(attempt, "Transfer lost a version race");
                    last = Interruption::Conflict;
                }
                CommitOutcome::TimedOut => {
                    tracing::warn!(
                        attempt,
                        "Transfer commit from {} to {} timed out, outcome unknown",
                        from.id,
                        to.id
                    );
                    pending = Some(writes);
                    last = Interruption::TimedOut;
                }
            }
        }

        let err = self.exhausted(last);
        self.log_failure(&err);
        Err(err)
    }

    /// Overwrites one account's balance, net worth and optionally its dailies date.
    ///
    /// With `expected_version` set the update only applies while the stored
    /// version still matches; a mismatch is reported rather than retried. Without
    /// it, lost version races are retried against the fresh state. Publishes a
    /// `balanceUpdated` event on success.
    pub async fn update_balance(&self, update: BalanceUpdate) -> Result<Account, TransferError> {
        tracing::debug!(
            phase = ?TransferPhase::Validating,
            user = %update.user_id,
            balance = update.balance,
            "Balance update requested"
        );
        validate_update(&update).inspect_err(|err| self.log_failure(err))?;

        let ids = [update.user_id.clone()];
        let mut pending: Option<VersionedWrite> = None;
        let mut last = Interruption::Conflict;

        for attempt in 1..=self.policy.max_attempts {
            self.wait_before(attempt).await;

            tracing::debug!(phase = ?TransferPhase::Reading, attempt, "Reading account");
            let Some(accounts) = self.fetch("read", self.store.read_many(&ids)).await? else {
                last = Interruption::TimedOut;
                continue;
            };
            let current = accounts
                .into_iter()
                .find(|account| account.id == update.user_id)
                .ok_or_else(|| TransferError::NotFound(update.user_id.clone()))
                .inspect_err(|err| self.log_failure(err))?;

            if let Some(write) = &pending {
                match settle(std::slice::from_ref(write), &[&current]) {
                    Settlement::Landed => return Ok(self.balance_committed(current)),
                    Settlement::Unknown => {
                        let err = TransferError::Unavailable(format!(
                            "Outcome of timed out balance update of {} is unknown",
                            current.id
                        ));
                        self.log_failure(&err);
                        return Err(err);
                    }
                    Settlement::NotApplied => {}
                }
            }

            if let Some(expected) = update.expected_version {
                if current.version != expected {
                    let err = TransferError::VersionMismatch {
                        account: current.id,
                        expected,
                        actual: current.version,
                    };
                    self.log_failure(&err);
                    return Err(err);
                }
            }

            let next = Account {
                balance: update.balance,
                net_worth: update.net_worth,
                date_last_claimed_dailies: update
                    .date_last_claimed_dailies
                    .or(current.date_last_claimed_dailies),
                ..current.clone()
            };
            let write = VersionedWrite::replace(&current, next);

            tracing::debug!(
                phase = ?TransferPhase::Committing,
                attempt,
                version = current.version,
                "Committing balance update"
            );
            match self.commit(std::slice::from_ref(&write), None).await? {
                CommitOutcome::Applied => return Ok(self.balance_committed(write.account)),
                CommitOutcome::Conflict => {
                    tracing::debug!(attempt, "Balance update lost a version race");
                    last = Interruption::Conflict;
                }
                CommitOutcome::TimedOut => {
                    tracing::warn!(
                        attempt,
                        "Balance update of {} timed out, outcome unknown",
                        current.id
                    );
                    pending = Some(write);
                    last = Interruption::TimedOut;
                }
            }
        }

        let err = self.exhausted(last);
        self.log_failure(&err);
        Err(err)
    }

    async fn wait_before(&self, attempt: u32) {
        if attempt <= 1 {
            return;
        }

        let delay = self.policy.backoff(attempt - 1);
        tracing::debug!(
            phase = ?TransferPhase::Retrying,
            attempt,
            backoff_ms = delay.as_millis() as u64,
            "Backing off before retry"
        );
        tokio::time::sleep(delay).await;
    }

    /// Runs a store lookup under the timeout. `Ok(None)` when it timed out.
    async fn fetch<T>(
        &self,
        what: &str,
        call: impl Future<Output = Result<T, LedgerError>>,
    ) -> Result<Option<T>, TransferError> {
        match self.bounded(call).await {
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(err)) => Err(self.store_failure(err)),
            None => {
                tracing::warn!("Ledger {} timed out", what);
                Ok(None)
            }
        }
    }

    async fn commit(
        &self,
        writes: &[VersionedWrite],
        receipt: Option<&TransferReceipt>,
    ) -> Result<CommitOutcome, TransferError> {
        match self.bounded(self.store.commit_if(writes, receipt)).await {
            Some(Ok(())) => Ok(CommitOutcome::Applied),
            Some(Err(LedgerError::Conflict { .. } | LedgerError::DuplicateReceipt { .. })) => {
                Ok(CommitOutcome::Conflict)
            }
            Some(Err(err)) => Err(self.store_failure(err)),
            None => Ok(CommitOutcome::TimedOut),
        }
    }

    async fn bounded<T>(&self, call: impl Future<Output = T>) -> Option<T> {
        tokio::time::timeout(self.policy.store_timeout, call).await.ok()
    }

    fn store_failure(&self, err: LedgerError) -> TransferError {
        let err = TransferError::Unavailable(err.to_string());
        self.log_failure(&err);
        err
    }

    fn exhausted(&self, last: Interruption) -> TransferError {
        match last {
            Interruption::Conflict => TransferError::Contention {
                attempts: self.policy.max_attempts,
            },
            Interruption::TimedOut => TransferError::Unavailable(format!(
                "ledger store timed out after {} attempts",
                self.policy.max_attempts
            )),
        }
    }

    fn transfer_committed(&self, from: Account, to: Account) -> TransferResult {
        tracing::info!(
            phase = ?TransferPhase::Committed,
            "Transferred credits from {} ({}) to {} ({})",
            from.id,
            from.balance,
            to.id,
            to.balance
        );
        publish_event(self.sink.as_ref(), events::BALANCE_UPDATED, &from.balance_event());
        publish_event(self.sink.as_ref(), events::BALANCE_UPDATED, &to.balance_event());

        TransferResult {
            from,
            to,
            replayed: false,
        }
    }

    fn balance_committed(&self, account: Account) -> Account {
        tracing::info!(
            phase = ?TransferPhase::Committed,
            "Updated balance of {} to {}",
            account.id,
            account.balance
        );
        publish_event(self.sink.as_ref(), events::BALANCE_UPDATED, &account.balance_event());
        account
    }

    fn log_failure(&self, err: &TransferError) {
        tracing::debug!(phase = ?TransferPhase::Failed, kind = err.kind(), "{}", err);
    }
}

/// Input checks that need no stored state. Self-transfer is reported first.
fn validate_transfer(request: &TransferRequest) -> Result<(), TransferError> {
    if request.from_id == request.to_id {
        return Err(TransferError::InvalidOperation);
    }
    if request.from_id.is_empty() || request.to_id.is_empty() {
        return Err(TransferError::InvalidArgument(
            "Account ids must not be empty".to_string(),
        ));
    }
    if request.amount <= 0 {
        return Err(TransferError::InvalidArgument(format!(
            "Transfer amount must be positive, got {}",
            request.amount
        )));
    }
    if request.idempotency_key.as_deref() == Some("") {
        return Err(TransferError::InvalidArgument(
            "Idempotency key must not be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_update(update: &BalanceUpdate) -> Result<(), TransferError> {
    if update.user_id.is_empty() {
        return Err(TransferError::InvalidArgument(
            "Account id must not be empty".to_string(),
        ));
    }
    if update.balance < 0 {
        return Err(TransferError::InvalidArgument(format!(
            "Balance must not be negative, got {}",
            update.balance
        )));
    }

    Ok(())
}

/// Splits a read result into `(from, to)`, reporting the sender first when both are missing.
fn pick_pair(
    accounts: Vec<Account>,
    request: &TransferRequest,
) -> Result<(Account, Account), TransferError> {
    let mut from = None;
    let mut to = None;
    for account in accounts {
        if account.id == request.from_id {
            from = Some(account);
        } else if account.id == request.to_id {
            to = Some(account);
        }
    }

    let from = from.ok_or_else(|| TransferError::NotFound(request.from_id.clone()))?;
    let to = to.ok_or_else(|| TransferError::NotFound(request.to_id.clone()))?;

    Ok((from, to))
}

/// Compares freshly read accounts with the writes of a timed out commit.
///
/// `current` is in the same order as `writes`. Post-state on every account means
/// the commit landed; the versions it expected on every account mean it did not.
fn settle(writes: &[VersionedWrite], current: &[&Account]) -> Settlement {
    let pairs = || writes.iter().zip(current.iter());

    if pairs().all(|(write, account)| write.account == **account) {
        Settlement::Landed
    } else if pairs().all(|(write, account)| account.version == write.expected_version) {
        Settlement::NotApplied
    } else {
        Settlement::Unknown
    }
}

/// Computes both post-transfer accounts. Versions are bumped by `VersionedWrite::replace`.
fn apply_transfer(
    from: &Account,
    to: &Account,
    request: &TransferRequest,
) -> Result<(Account, Account), TransferError> {
    let amount = request.amount;
    if from.balance < amount {
        return Err(TransferError::InsufficientFunds {
            account: from.id.clone(),
            balance: from.balance,
            requested: amount,
        });
    }

    let overflow = |account: &str| {
        TransferError::InvalidArgument(format!(
            "Transfer of {} overflows account {}",
            amount, account
        ))
    };
    let to_balance = to.balance.checked_add(amount).ok_or_else(|| overflow(&to.id))?;
    let to_net_worth = to.net_worth.checked_add(amount).ok_or_else(|| overflow(&to.id))?;
    let from_net_worth = from
        .net_worth
        .checked_sub(amount)
        .ok_or_else(|| overflow(&from.id))?;

    let next_from = Account {
        balance: from.balance - amount,
        net_worth: from_net_worth,
        ..from.clone()
    };
    let next_to = Account {
        balance: to_balance,
        net_worth: to_net_worth,
        ..to.clone()
    };

    Ok((next_from, next_to))
}
