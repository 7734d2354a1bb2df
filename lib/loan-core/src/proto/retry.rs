use std::future::Future;
use std::time::Duration;

use crate::config::core_config::QueryConfig;
use crate::provider::loan_api_client::error::LoanApiClientError;

/// Bounded retry for read-only remote queries.
///
/// Only transient failures are repeated. Submissions never go through this, the server
/// gives no idempotency guarantee for them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub delay: Duration,
}

impl From<&QueryConfig> for RetryPolicy {
    fn from(value: &QueryConfig) -> Self {
        Self {
            retries: value.retries,
            delay: value.retry_delay,
        }
    }
}

impl RetryPolicy {
    pub const NONE: RetryPolicy = RetryPolicy {
        retries: 0,
        delay: Duration::ZERO,
    };

    pub async fn run<T, F, Fut>(
        &self,
        operation: &'static str,
        mut query: F,
    ) -> Result<T, LoanApiClientError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, LoanApiClientError>>,
    {
        let mut retry_counter = 0;
        loop {
            match query().await {
                Err(error) if error.is_transient() && retry_counter < self.retries => {
                    retry_counter += 1;
                    tracing::warn!(
                        %error,
                        operation,
                        "Retrying query, retry({retry_counter}/{})",
                        self.retries
                    );
                    if !self.delay.is_zero() {
                        tokio::time::sleep(self.delay).await;
                    }
                }
                result => return result,
            }
        }
    }
}
