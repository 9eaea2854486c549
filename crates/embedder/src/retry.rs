//! Retry with exponential backoff for transient provider failures.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for retry behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of retry attempts after the initial try.
    pub max_retries: u32,
    /// Base delay between retries (exponentially increased).
    pub base_delay_ms: u64,
    /// Ceiling on the delay between retries.
    pub max_delay_ms: u64,
    /// Whether to add random jitter to delays.
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay_ms: 100,
            max_delay_ms: 10_000,
            jitter: true,
        }
    }
}

impl RetryConfig {
    pub fn with_max_retries(mut self, max: u32) -> Self {
        self.max_retries = max;
        self
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn with_jitter(mut self, jitter: bool) -> Self {
        self.jitter = jitter;
        self
    }
}

/// Execute an async operation, retrying on `Err` until `max_retries` is
/// exhausted. The operation receives the attempt number (0 = first try).
pub(crate) async fn execute_with_retry<T, F, Fut>(
    config: &RetryConfig,
    mut operation: F,
) -> Result<T, String>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    let mut last_error = None;

    for attempt in 0..=config.max_retries {
        match operation(attempt).await {
            Ok(value) => return Ok(value),
            Err(error) => {
                last_error = Some(error);
                if attempt < config.max_retries {
                    tokio::time::sleep(calculate_delay(config, attempt)).await;
                }
            }
        }
    }

    Err(last_error.unwrap_or_else(|| "all retries failed".to_string()))
}

fn calculate_delay(config: &RetryConfig, attempt: u32) -> Duration {
    let exponential = config.base_delay_ms.saturating_mul(2_u64.pow(attempt));
    let delay = exponential.min(config.max_delay_ms);

    if config.jitter {
        // 0-50% random jitter keeps concurrent retries from synchronizing.
        let jitter = fastrand::u64(0..=delay / 2);
        Duration::from_millis(delay + jitter)
    } else {
        Duration::from_millis(delay)
    }
}

/// Check whether an error message describes a transient condition worth
/// retrying. Non-retryable errors fail immediately without burning attempts.
pub fn is_retryable_error(error: &str) -> bool {
    let error_lower = error.to_lowercase();

    if error_lower.contains("timeout")
        || error_lower.contains("connection")
        || error_lower.contains("reset")
        || error_lower.contains("temporarily")
        || error_lower.contains("unavailable")
        || error_lower.contains("503")
        || error_lower.contains("502")
        || error_lower.contains("504")
        || error_lower.contains("429")
        || error_lower.contains("408")
    {
        return true;
    }

    if error_lower.contains("401")
        || error_lower.contains("403")
        || error_lower.contains("404")
        || error_lower.contains("400")
        || error_lower.contains("invalid")
        || error_lower.contains("not found")
    {
        return false;
    }

    // Unknown errors default to retryable.
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn retry_succeeds_eventually() {
        let config = RetryConfig::default()
            .with_max_retries(3)
            .with_base_delay(Duration::from_millis(1))
            .with_jitter(false);
        let counter = AtomicU32::new(0);

        let result = execute_with_retry(&config, |_attempt| {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err("not yet".to_string())
                } else {
                    Ok("success")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "success");
        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn retry_fails_after_max_attempts() {
        let config = RetryConfig::default()
            .with_max_retries(2)
            .with_base_delay(Duration::from_millis(1))
            .with_jitter(false);
        let counter = AtomicU32::new(0);

        let result: Result<(), String> = execute_with_retry(&config, |_attempt| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Err("always fails".to_string()) }
        })
        .await;

        assert!(result.is_err());
        assert_eq!(counter.load(Ordering::SeqCst), 3); // initial + 2 retries
    }

    #[test]
    fn delay_is_capped() {
        let config = RetryConfig {
            max_retries: 10,
            base_delay_ms: 100,
            max_delay_ms: 400,
            jitter: false,
        };
        assert_eq!(calculate_delay(&config, 0), Duration::from_millis(100));
        assert_eq!(calculate_delay(&config, 1), Duration::from_millis(200));
        assert_eq!(calculate_delay(&config, 5), Duration::from_millis(400));
    }

    #[test]
    fn is_retryable_error_detection() {
        assert!(is_retryable_error("timeout"));
        assert!(is_retryable_error("connection reset"));
        assert!(is_retryable_error("HTTP 503"));
        assert!(is_retryable_error("HTTP 429"));
        assert!(is_retryable_error("service temporarily unavailable"));

        assert!(!is_retryable_error("HTTP 400"));
        assert!(!is_retryable_error("HTTP 401"));
        assert!(!is_retryable_error("HTTP 404"));
        assert!(!is_retryable_error("invalid api key"));
    }
}
