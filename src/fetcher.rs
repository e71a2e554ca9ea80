//! Document fetcher: a single GET of the standings page with a fixed retry budget.
//!
//! Only network-class failures are retried. Timeouts and unexpected failures
//! end the fetch on first occurrence. Every suspension point (the request and
//! the inter-attempt delay) races against the caller's cancellation token.

use crate::app::ports::{PageTransport, TransportError};
use crate::constants::{MAX_ATTEMPTS, RETRY_DELAY_MS, STANDINGS_URL};
use crate::error::FetchError;
use scraper::Html;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Duration,
}

impl RetryPolicy {
    /// `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(MAX_ATTEMPTS, Duration::from_millis(RETRY_DELAY_MS))
    }
}

pub struct DocumentFetcher<T> {
    transport: T,
    url: String,
    policy: RetryPolicy,
}

impl<T: PageTransport> DocumentFetcher<T> {
    pub fn new(transport: T) -> Self {
        Self::with_policy(transport, STANDINGS_URL, RetryPolicy::default())
    }

    pub fn with_policy(transport: T, url: impl Into<String>, policy: RetryPolicy) -> Self {
        Self {
            transport,
            url: url.into(),
            policy,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    #[instrument(skip(self, cancel), fields(url = %self.url))]
    pub async fn fetch(&self, cancel: &CancellationToken) -> Result<Html, FetchError> {
        let url = self.url.as_str();
        let max_attempts = self.policy.max_attempts;
        let mut attempt = 1;

        loop {
            debug!(attempt, max_attempts, "Requesting standings page");

            let outcome = tokio::select! {
                biased;
                // An abandoned request is reported as a timeout
                _ = cancel.cancelled() => Err(TransportError::Timeout("request cancelled".to_string())),
                outcome = self.transport.get_text(url) => outcome,
            };

            match outcome {
                Ok(body) => {
                    if attempt > 1 {
                        info!(url, attempt, "Fetched standings page after retry");
                    }
                    return Ok(Html::parse_document(&body));
                }
                Err(TransportError::Network(reason)) => {
                    error!(
                        url,
                        attempt,
                        max_attempts,
                        reason = %reason,
                        "Failed to fetch standings page. Attempt {} of {}.",
                        attempt,
                        max_attempts
                    );
                    if attempt >= max_attempts {
                        return Err(FetchError::Network {
                            url: url.to_string(),
                            attempts: attempt,
                            reason,
                        });
                    }

                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => {
                            warn!(url, attempt, "Fetch cancelled while waiting to retry");
                            return Err(FetchError::Cancelled);
                        }
                        _ = tokio::time::sleep(self.policy.delay) => {}
                    }
                    attempt += 1;
                }
                Err(TransportError::Timeout(reason)) => {
                    error!(url, attempt, reason = %reason, "Request to {} timed out", url);
                    return Err(FetchError::Timeout {
                        url: url.to_string(),
                        reason,
                    });
                }
                Err(TransportError::Unexpected(reason)) => {
                    error!(
                        url,
                        attempt,
                        reason = %reason,
                        "An unexpected error occurred while fetching {}",
                        url
                    );
                    return Err(FetchError::Unexpected {
                        url: url.to_string(),
                        reason,
                    });
                }
            }
        }
    }
}
