//! Booking Query Retry
//! Copyright (c) 2026 Mamy Ratsimbazafy
//! Licensed and distributed under either of
//!   * MIT license (license terms at the root of the package or at http://opensource.org/licenses/MIT).
//!   * Apache v2 license (license terms at the root of the package or at http://www.apache.org/licenses/LICENSE-2.0).
//! at your option. This file may not be copied, modified, or distributed except according to those terms.

//! booking-internals/query-retry
//! Bounded retry with incremental backoff for external service calls

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time;

/// Attempt policy for a fallible async operation.
///
/// The default policy stops after 3 attempts and waits 2s, then 4s between
/// them (incremental, not exponential). Once attempts are exhausted the
/// error of the last attempt is handed back unchanged.
///
/// # Examples
///
/// Single attempt, no waiting:
/// ```ignore
/// let policy = RetryPolicy::single_attempt();
/// ```
///
/// Three attempts, 2s start, 2s increment:
/// ```ignore
/// let policy = RetryPolicy::default();
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_delay: Duration,
    increment: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_secs(2),
            increment: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// A policy that runs the operation exactly once
    pub fn single_attempt() -> Self {
        Self {
            max_attempts: 1,
            ..Default::default()
        }
    }

    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..self
        }
    }

    pub fn with_incrementing_delay(self, initial_delay: Duration, increment: Duration) -> Self {
        Self {
            initial_delay,
            increment,
            ..self
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait before retry number `retry` (1-based)
    pub fn delay_before_retry(&self, retry: u32) -> Duration {
        self.initial_delay + self.increment * retry.saturating_sub(1)
    }

    /// Run `f` until it succeeds or the attempt budget is spent.
    pub async fn run<T, E, F, Fut>(&self, mut f: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let mut attempt = 1;
        loop {
            match f().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= self.max_attempts => return Err(e),
                Err(e) => {
                    let delay = self.delay_before_retry(attempt);
                    tracing::warn!(
                        "Attempt {}/{} failed: {}. Retrying in {:?}",
                        attempt,
                        self.max_attempts,
                        e,
                        delay
                    );
                    time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
