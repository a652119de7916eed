//! Backoff schedule for ledger commits that lose a version race.

use std::time::Duration;

use rand::Rng;

use crate::server::config::Config;

/// Attempt budget, backoff bounds and per-call store timeout of the transfer engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Never below 1.
    pub max_attempts: u32,
    pub base_backoff: Duration,
    pub max_backoff: Duration,
    /// Upper bound on a single store call: a read, a receipt lookup or a commit.
    pub store_timeout: Duration,
    /// Fraction of the backoff that is randomized, in `0.0..=1.0`.
    pub jitter: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            base_backoff: Duration::from_millis(10),
            max_backoff: Duration::from_millis(250),
            store_timeout: Duration::from_millis(2000),
            jitter: 0.5,
        }
    }
}

impl RetryPolicy {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_attempts: config.transfer_max_attempts.max(1),
            base_backoff: Duration::from_millis(config.transfer_base_backoff_ms),
            max_backoff: Duration::from_millis(config.transfer_max_backoff_ms),
            store_timeout: Duration::from_millis(config.ledger_timeout_ms),
            ..Self::default()
        }
    }

    /// Delay before retry number `retry` (1 for the first retry).
    ///
    /// Doubles from `base_backoff` up to `max_backoff`, then jitter is applied.
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        let delay = self.base_backoff.saturating_mul(factor).min(self.max_backoff);

        apply_jitter(delay, self.jitter)
    }
}

/// Randomizes `delay` within `±jitter` of its value so concurrent retries spread out.
fn apply_jitter(delay: Duration, jitter: f64) -> Duration {
    let jitter = jitter.clamp(0.0, 1.0);
    if jitter == 0.0 || delay.is_zero() {
        return delay;
    }

    let base = delay.as_secs_f64();
    let spread = base * jitter;
    let jittered = rand::rng().random_range((base - spread)..=(base + spread));

    Duration::from_secs_f64(jittered.max(0.0))
}
