//! Retry policies for HTTP requests.

use crate::error::HttpError;
use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone, Default)]
pub enum RetryPolicy {
    /// No retries.
    #[default]
    None,
    /// Retry transport failures, timeouts and 5xx. Never 429 or other 4xx.
    /// Default for every CoinGecko GET endpoint.
    Idempotent,
    /// User-provided retry logic.
    Custom(RetryConfig),
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts (not counting the initial request).
    pub max_retries: u32,
    /// Initial delay before the first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each retry.
    pub backoff_factor: f64,
    /// Whether to add jitter to the delay.
    pub jitter: bool,
    /// HTTP status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::idempotent()
    }
}

impl RetryConfig {
    /// The default config for idempotent (GET) requests: 3 retries,
    /// 1 s doubling backoff capped at 30 s.
    pub fn idempotent() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_secs(30),
            backoff_factor: 2.0,
            jitter: true,
            retryable_statuses: vec![500, 502, 503, 504],
        }
    }

    /// Whether `err` is worth another attempt under this config.
    ///
    /// Rate limits and client errors are surfaced immediately: retrying a 429
    /// only digs the hole deeper.
    pub fn should_retry(&self, err: &HttpError) -> bool {
        match err {
            HttpError::ServerError { status, .. } => self.retryable_statuses.contains(status),
            HttpError::Timeout => true,
            HttpError::RateLimited { .. }
            | HttpError::NotFound(_)
            | HttpError::BadRequest { .. }
            | HttpError::MaxRetriesExceeded { .. } => false,
            #[cfg(feature = "http")]
            HttpError::Reqwest(re) => {
                if re.is_decode() || re.status().is_some_and(|s| s.is_client_error()) {
                    return false;
                }
                #[cfg(not(target_arch = "wasm32"))]
                let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                #[cfg(target_arch = "wasm32")]
                let retryable = re.is_timeout() || re.is_request();
                retryable
            }
        }
    }

    /// Calculate delay for a given attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base = self.initial_delay.as_millis() as f64
            * self.backoff_factor.powi(attempt as i32);
        let capped = base.min(self.max_delay.as_millis() as f64);

        let final_ms = if self.jitter {
            let jitter_range = capped * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (capped + jitter).max(0.0)
        } else {
            capped
        };

        Duration::from_millis(final_ms as u64)
    }
}
