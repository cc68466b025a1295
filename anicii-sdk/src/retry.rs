// ABOUTME: Retry logic with exponential backoff for the image search call
// ABOUTME: Delays start at one second, double per attempt, and cap at ten seconds

use crate::constants::retry;
use crate::error::ApiError;
use std::time::Duration;
use tokio::time::sleep;

#[derive(Clone)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: retry::MAX_ATTEMPTS,
            initial_delay: retry::INITIAL_DELAY,
            max_delay: retry::MAX_DELAY,
        }
    }
}

/// Delay inserted after failed attempt number `attempt` (1-based).
///
/// With the default configuration this yields 1000, 2000, 4000, 8000 ms and
/// then stays capped at 10000 ms.
pub fn backoff_delay(config: &RetryConfig, attempt: u32) -> Duration {
    let doublings = attempt.saturating_sub(1).min(16);
    config
        .initial_delay
        .saturating_mul(1u32 << doublings)
        .min(config.max_delay)
}

/// Run `operation` up to `max_attempts` times, sleeping between attempts.
///
/// Every failure is considered transient at this layer. No delay is inserted
/// after the final attempt; its error is returned as-is.
pub async fn retry_with_backoff<F, Fut, T>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, ApiError>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, ApiError>>,
{
    let mut last_error = ApiError::Network("no attempts were made".to_string());

    for attempt in 1..=config.max_attempts {
        match operation().await {
            Ok(result) => return Ok(result),
            Err(error) => {
                log::debug!(
                    "attempt {}/{} failed: {}",
                    attempt,
                    config.max_attempts,
                    error
                );
                last_error = error;
            }
        }

        if attempt < config.max_attempts {
            sleep(backoff_delay(config, attempt)).await;
        }
    }

    Err(last_error)
}
