use std::future::Future;
use std::time::Duration;

use crate::application::ports::LlmClientError;

const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Bounded retry with doubling backoff around a model call. Zero retries
/// surfaces the first failure unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            initial_backoff: Duration::ZERO,
        }
    }

    pub fn new(max_retries: u32, initial_backoff: Duration) -> Self {
        Self {
            max_retries,
            initial_backoff,
        }
    }

    /// Delay before the given retry (0-based). Doubling stops at one minute,
    /// or at the initial backoff when that is already longer.
    pub fn backoff_for(&self, retry: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2u32.saturating_pow(retry))
            .min(MAX_BACKOFF.max(self.initial_backoff))
    }

    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T, LlmClientError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, LlmClientError>>,
    {
        let mut retry = 0;

        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(e) if retry < self.max_retries && e.is_retryable() => {
                    let delay = self.backoff_for(retry);
                    retry += 1;
                    tracing::warn!(
                        operation,
                        error = %e,
                        retries_left = self.max_retries - retry,
                        delay_ms = delay.as_millis() as u64,
                        "Model call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::none()
    }
}
