//! Generic retry executor with exponential backoff.
//!
//! This module wraps any fallible async operation in a bounded retry loop.
//! It has no knowledge of what it retries: the operation type, error type,
//! and the observer invoked before each retry are all supplied by the
//! caller. Sleeping between attempts suspends only the calling task.

use std::future::Future;
use std::time::Duration;

/// Tuning for a retry loop.
///
/// # Example
///
/// ```
/// use compensation_engine::retry::RetryOptions;
/// use std::time::Duration;
///
/// let options = RetryOptions::default();
/// assert_eq!(options.max_attempts, 3);
/// assert_eq!(options.initial_delay, Duration::from_millis(1000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryOptions {
    /// Total number of attempts, including the first.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Factor applied to the delay after each failed attempt.
    pub backoff_multiplier: u32,
    /// Upper bound on the delay between attempts.
    pub max_delay: Duration,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            backoff_multiplier: 2,
            max_delay: Duration::from_secs(10),
        }
    }
}

impl RetryOptions {
    /// Returns the tuning used for record-store calls: a shorter first
    /// delay than the general default.
    pub fn for_data_store() -> Self {
        Self {
            initial_delay: Duration::from_millis(500),
            ..Self::default()
        }
    }

    /// Returns options with no sleeping between attempts.
    ///
    /// Intended for tests that only care about attempt counting.
    pub fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            initial_delay: Duration::ZERO,
            backoff_multiplier: 1,
            max_delay: Duration::ZERO,
        }
    }
}

/// A successful result together with the number of attempts it took.
///
/// Success after one or more retries is distinguishable from first-attempt
/// success for observability purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryOutcome<T> {
    /// The value returned by the successful attempt.
    pub value: T,
    /// The attempt number that succeeded, starting at 1.
    pub attempts: u32,
}

impl<T> RetryOutcome<T> {
    /// Returns true if success required at least one retry.
    pub fn retried(&self) -> bool {
        self.attempts > 1
    }
}

/// Runs a fallible async operation with bounded exponential backoff.
///
/// The operation is attempted up to `options.max_attempts` times. After a
/// failed attempt with attempts remaining, `on_retry` is invoked with the
/// attempt number and the error (for telemetry), the current delay is
/// slept, and the delay is multiplied by the backoff factor capped at
/// `options.max_delay`. The final attempt's error is returned unchanged so
/// the root cause is never hidden.
///
/// # Example
///
/// ```
/// use compensation_engine::retry::{execute, RetryOptions};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let outcome = execute(
///     || async { Ok::<_, std::io::Error>(42) },
///     &RetryOptions::default(),
///     |_, _| {},
/// )
/// .await
/// .unwrap();
/// assert_eq!(outcome.value, 42);
/// assert!(!outcome.retried());
/// # });
/// ```
pub async fn execute<T, E, F, Fut, O>(
    mut operation: F,
    options: &RetryOptions,
    mut on_retry: O,
) -> Result<RetryOutcome<T>, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    O: FnMut(u32, &E),
{
    let mut delay = options.initial_delay.min(options.max_delay);
    let mut attempt: u32 = 1;

    loop {
        match operation().await {
            Ok(value) => {
                return Ok(RetryOutcome {
                    value,
                    attempts: attempt,
                });
            }
            Err(error) => {
                if attempt >= options.max_attempts {
                    return Err(error);
                }
                on_retry(attempt, &error);
                tokio::time::sleep(delay).await;
                delay = (delay * options.backoff_multiplier).min(options.max_delay);
                attempt += 1;
            }
        }
    }
}
