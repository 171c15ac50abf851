/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{DEFAULT_EXC_ITERATIONS, DEFAULT_RETRY_DELAY_SECS, RATE_LIMIT_STATUS_CODE};
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Decides whether a transport error is worth another attempt
pub type RetryPredicate = Arc<dyn Fn(&reqwest::Error) -> bool + Send + Sync>;

/// Retries transport errors caused by a request timeout
pub fn retry_on_timeout() -> RetryPredicate {
    Arc::new(|err: &reqwest::Error| err.is_timeout())
}

/// Retries transport errors raised while connecting
pub fn retry_on_connect() -> RetryPredicate {
    Arc::new(|err: &reqwest::Error| err.is_connect())
}

/// Configuration for HTTP request retry behavior
///
/// One counter bounds both retry reasons: HTTP 429 (when `rate_limit` is on)
/// and transport errors accepted by the retry predicate.
#[derive(Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts per call (values below 1 behave as 1)
    pub iterations: u32,
    /// Delay in seconds after a 429 without a `retry-after` header
    pub delay_secs: u64,
    /// Whether HTTP 429 is retried at all
    pub rate_limit: bool,
    retry_on: Option<RetryPredicate>,
}

impl RetryConfig {
    /// Creates a retry configuration with 3 attempts, a 3 second delay and 429 handling on
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of attempts
    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the fallback delay used for 429 responses
    #[must_use]
    pub fn with_delay(mut self, delay_secs: u64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Enables or disables the 429 retry branch
    #[must_use]
    pub fn with_rate_limit(mut self, rate_limit: bool) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Sets the predicate selecting retryable transport errors
    #[must_use]
    pub fn with_retry_on(mut self, predicate: RetryPredicate) -> Self {
        self.retry_on = Some(predicate);
        self
    }

    /// Gets the effective number of attempts (at least 1)
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.iterations.max(1)
    }

    /// Whether another attempt should follow a transport error on `attempt` (0-based)
    pub fn should_retry_error(&self, err: &reqwest::Error, attempt: u32) -> bool {
        attempt + 1 < self.attempts()
            && self.retry_on.as_ref().is_some_and(|predicate| predicate(err))
    }

    /// Whether another attempt should follow a response with `status` on `attempt` (0-based)
    #[must_use]
    pub fn should_retry_status(&self, status: StatusCode, attempt: u32) -> bool {
        self.rate_limit
            && status.as_u16() == RATE_LIMIT_STATUS_CODE
            && attempt + 1 < self.attempts()
    }

    /// Time to wait before retrying a 429 response
    ///
    /// Uses the `retry-after` header when it holds a number of seconds,
    /// the configured delay otherwise.
    #[must_use]
    pub fn backoff(&self, headers: &HeaderMap) -> Duration {
        let secs = headers
            .get(RETRY_AFTER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(self.delay_secs);
        Duration::from_secs(secs)
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_EXC_ITERATIONS,
            delay_secs: DEFAULT_RETRY_DELAY_SECS,
            rate_limit: true,
            retry_on: None,
        }
    }
}

impl fmt::Debug for RetryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryConfig")
            .field("iterations", &self.iterations)
            .field("delay_secs", &self.delay_secs)
            .field("rate_limit", &self.rate_limit)
            .field("retry_on", &self.retry_on.as_ref().map(|_| "Fn(&reqwest::Error)"))
            .finish()
    }
}
