//! Error types for the YouTube client

/// Result type alias for YouTube operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using the YouTube client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// API key rejected (401/403)
    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    /// Resource not found (playlist, channel, video)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Daily quota exhausted (429)
    #[error("API quota exceeded, please try again later")]
    QuotaExceeded,

    /// API returned an unexpected error status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Configuration error (missing API key, etc.)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }

    /// Create a configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Map an HTTP status code and response body to a typed error
    pub fn from_status_code(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(message.into()),
            404 => Self::NotFound(message.into()),
            429 => Self::QuotaExceeded,
            _ => Self::Api {
                status,
                message: message.into(),
            },
        }
    }

    /// Check if the error is an authentication error (bad or missing API key)
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }

    /// Check if the error is a quota/rate-limit error
    pub fn is_quota_exceeded(&self) -> bool {
        matches!(self, Error::QuotaExceeded)
    }
}
