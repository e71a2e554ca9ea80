use async_trait::async_trait;
use thiserror::Error;

/// Transport-level failure, classified for the retry loop.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, DNS, non-success status or body read failure.
    #[error("network failure: {0}")]
    Network(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

// Fetch-side port
#[async_trait]
pub trait PageTransport: Send + Sync {
    async fn get_text(&self, url: &str) -> Result<String, TransportError>;
}
