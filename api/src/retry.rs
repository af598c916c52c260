use std::{
    fmt::Display,
    sync::atomic::{AtomicBool, Ordering::SeqCst},
    thread::sleep,
    time::Duration,
};

use http::StatusCode;
use reqwest::{blocking::Response, Result};

/// Strategy to use when retrying requests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RetryStrategy {
    /// The first request by the client will not be retried, but subsequent
    /// requests will. This allows fast failure if the client cannot reach
    /// the API endpoint at all, while still mitigating transient failures
    /// in commands spanning multiple requests.
    Automatic,
    /// Always attempt to retry requests.
    Always,
}

/// Retry settings for the client. These apply to idempotent requests only;
/// operation submissions are never retried as they cannot be naively
/// repeated.
#[derive(Clone, Debug, PartialEq)]
pub struct RetryConfig {
    /// Strategy for when to retry after a failure.
    pub strategy: RetryStrategy,
    /// Maximum number of retries to attempt.
    pub max_retry_count: u8,
    /// Amount of time to wait before the first retry.
    pub base_wait: Duration,
    /// Scale factor for subsequent waits. The wait before retry N is
    /// `base_wait * backoff_factor ^ N`.
    pub backoff_factor: f64,
}

#[derive(Debug)]
pub(crate) struct Retrier {
    config: RetryConfig,
    is_first_request: AtomicBool,
}

impl Retrier {
    pub fn new(config: RetryConfig) -> Self {
        Self {
            config,
            is_first_request: AtomicBool::new(true),
        }
    }

    fn should_retry(status: StatusCode) -> bool {
        status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
    }

    fn wait_before_retry(&self, retry_index: u8, cause: impl Display) {
        let wait_factor = self.config.backoff_factor.powi(retry_index.into());
        let duration = self.config.base_wait.mul_f64(wait_factor);
        log::warn!("{cause} - retrying after {duration:?}.");
        sleep(duration);
    }

    pub fn with_retries(&self, send_request: impl Fn() -> Result<Response>) -> Result<Response> {
        if self.is_first_request.swap(false, SeqCst)
            && self.config.strategy == RetryStrategy::Automatic
        {
            return send_request();
        }

        for retry_index in 0..self.config.max_retry_count {
            match send_request() {
                Ok(response) if Self::should_retry(response.status()) => {
                    self.wait_before_retry(
                        retry_index,
                        format_args!("{} for {}", response.status(), response.url()),
                    );
                }
                Err(error) if error.is_timeout() || error.is_connect() || error.is_request() => {
                    self.wait_before_retry(retry_index, &error);
                }
                // If anything else, just return it immediately
                result => return result,
            }
        }

        // On the last retry don't handle the error, just propagate it.
        send_request()
    }
}
