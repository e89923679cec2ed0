//! Error types for ticker validation and report fetching

use thiserror::Error;

/// Fallback message when a failed response carries no usable `detail`.
pub const REQUEST_FAILED: &str = "Request failed";

/// Local input errors. These block submission and never reach the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The raw edit contained something other than A-Z / a-z
    #[error("Only English letters A-Z are allowed. No numbers or special characters.")]
    InvalidCharacters,

    /// Submit was attempted with an empty value
    #[error("Please enter a ticker symbol.")]
    Required,
}

/// Remote errors raised while talking to the analysis backend
#[derive(Debug, Error)]
pub enum FetchError {
    /// Backend answered with a non-success status
    #[error("{message}")]
    Status {
        status: u16,
        message: String,
    },

    /// Request never produced a response (connect, DNS, TLS, timeout)
    #[error("Could not reach analysis service: {0}")]
    Transport(#[from] reqwest::Error),

    /// Status line arrived but the body could not be read to the end
    #[error("Could not read response from analysis service: {source}")]
    Body {
        status: u16,
        #[source]
        source: reqwest::Error,
    },

    /// Success status but the body was not the expected JSON shape
    #[error("Invalid response from analysis service: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// HTTP status attached to the error, if a response was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } | Self::Body { status, .. } | Self::Decode { status, .. } => {
                Some(*status)
            }
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }

    /// User-facing message shown in the page-level banner
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Crate-level error
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
