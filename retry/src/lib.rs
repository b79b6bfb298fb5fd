//! Bounded exponential-backoff retry for async operations.
//!
//! This crate provides the retry primitive used by the feedback analysis
//! pipeline, with no knowledge of what the retried operation does:
//!
//! - [`RetryPolicy`] - Attempt count and backoff configuration
//! - [`RetryError`] - Terminal failure carrying the last underlying cause
//! - [`retry_with_backoff`] - Sequential retry loop over a generic async
//!   operation
//!
//! The operation is a plain `Result`-returning future; the scheduler never
//! inspects the error beyond carrying the final one back to the caller.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Default ceiling for the inter-attempt delay.
const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(30);

/// Default growth factor applied to the delay after each failed attempt.
const DEFAULT_BACKOFF_MULTIPLIER: f64 = 2.0;

/// Configuration for retry behavior.
///
/// `max_retries` counts retries after the first try, so a policy with
/// `max_retries = 2` allows three attempts in total. The delay before retry
/// *n + 1* is `min(initial_delay * backoff_multiplier^n, max_delay)`.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Retry attempts allowed after the first try.
    pub max_retries: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound for the delay between attempts (default: 30 s).
    pub max_delay: Duration,
    /// Factor applied to the delay after each failed attempt (default: 2.0).
    pub backoff_multiplier: f64,
}

impl RetryPolicy {
    /// Creates a policy with the default delay ceiling and multiplier.
    #[must_use]
    pub const fn new(max_retries: u32, initial_delay: Duration) -> Self {
        Self {
            max_retries,
            initial_delay,
            max_delay: DEFAULT_MAX_DELAY,
            backoff_multiplier: DEFAULT_BACKOFF_MULTIPLIER,
        }
    }

    /// Sets the delay ceiling.
    #[must_use]
    pub const fn with_max_delay(mut self, max_delay: Duration) -> Self {
        self.max_delay = max_delay;
        self
    }

    /// Sets the backoff multiplier. Values below 1.0 make no sense for
    /// backoff; callers are expected to pass a factor >= 1.
    #[must_use]
    pub const fn with_backoff_multiplier(mut self, multiplier: f64) -> Self {
        self.backoff_multiplier = multiplier;
        self
    }
}

/// Terminal failure reported after the last permitted attempt fails.
///
/// Carries the error from the final attempt unchanged; earlier failures are
/// not aggregated.
#[derive(Debug, Error)]
#[error("operation failed after {attempts} attempts")]
pub struct RetryError<E> {
    /// Total attempts made, including the first try.
    pub attempts: u32,
    /// The error returned by the final attempt.
    #[source]
    pub source: E,
}

/// Runs `operation` up to `policy.max_retries + 1` times, sleeping between
/// attempts with exponential backoff.
///
/// Attempts are strictly sequential. The first success is returned
/// immediately; with `max_retries = 0` the operation runs exactly once and
/// no delay is ever incurred. The scheduler holds no shared state, so
/// concurrent calls for independent operations are safe.
///
/// # Errors
///
/// Returns [`RetryError`] wrapping the final attempt's error once all
/// attempts are exhausted.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use feedback_retry::{retry_with_backoff, RetryPolicy};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let policy = RetryPolicy::new(2, Duration::from_millis(10));
/// let value: Result<u32, feedback_retry::RetryError<std::io::Error>> =
///     retry_with_backoff(&policy, || async move { Ok(7) }).await;
/// assert_eq!(value.unwrap(), 7);
/// # }
/// ```
pub async fn retry_with_backoff<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, RetryError<E>>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut delay = policy.initial_delay;
    let mut attempt: u32 = 1;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(source) if attempt > policy.max_retries => {
                return Err(RetryError { attempts: attempt, source });
            }
            Err(_) => {
                tokio::time::sleep(delay).await;
                // TODO: might want to add jitter to prevent thundering herd problem
                delay = delay.mul_f64(policy.backoff_multiplier).min(policy.max_delay);
                attempt += 1;
            }
        }
    }
}
