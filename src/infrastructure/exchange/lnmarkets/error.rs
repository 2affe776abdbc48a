use thiserror::Error;

/// Errors raised by the LN Markets REST transport
#[derive(Error, Debug)]
pub enum LnmError {
    /// HTTP request failed before a response came back
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Venue answered with a non-success status
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// Request body could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Base URL or endpoint could not be joined
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl LnmError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, LnmError::Api { status, .. } if (400..500).contains(status))
    }
}

pub type Result<T> = std::result::Result<T, LnmError>;
