use thiserror::Error;

/// Terminal outcome of fetching the standings page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error fetching {url} after {attempts} attempt(s): {reason}")]
    Network {
        url: String,
        attempts: u32,
        reason: String,
    },

    #[error("request to {url} timed out: {reason}")]
    Timeout { url: String, reason: String },

    #[error("unexpected error fetching {url}: {reason}")]
    Unexpected { url: String, reason: String },

    #[error("fetch cancelled")]
    Cancelled,
}

impl FetchError {
    /// Only plain network failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Network { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "network",
            FetchError::Timeout { .. } => "timeout",
            FetchError::Unexpected { .. } => "unexpected",
            FetchError::Cancelled => "cancelled",
        }
    }
}

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ScraperError>;
