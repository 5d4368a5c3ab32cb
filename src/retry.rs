// ABOUTME: Caller-driven retry for FatSecret operations with exponential backoff
// ABOUTME: Re-runs the whole operation so every attempt is signed with a fresh timestamp and nonce
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::errors::AppResult;

/// How often and how patiently to retry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first; 0 is treated as 1
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub initial_backoff: Duration,
    /// Upper bound for any single delay
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(8),
        }
    }
}

impl RetryPolicy {
    /// Run once, never retry
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
        }
    }

    /// Policy with the given total attempts and default delays
    #[must_use]
    pub fn with_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Self::default()
        }
    }

    /// Delay after the given failed attempt (1-based): doubles each time, capped
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 2_u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

/// Run `operation` until it succeeds, fails with a non-retriable error, or
/// the attempts are used up.
///
/// The closure is called anew for each attempt. Passing a search call such as
/// `|| client.search_foods(query)` therefore re-signs every attempt.
///
/// # Errors
///
/// Returns the last error from `operation`
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> AppResult<T>
where
    F: FnMut() -> Fut + Send,
    Fut: Future<Output = AppResult<T>> + Send,
    T: Send,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retriable() && attempt < max_attempts => {
                let delay = policy.backoff(attempt);
                warn!(
                    "FatSecret request failed ({e}) - retry {attempt}/{} after {}ms backoff",
                    max_attempts - 1,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
