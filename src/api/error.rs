//! Submission failure taxonomy

use thiserror::Error;

/// Shown when a non-2xx response carries no usable message
pub const GENERIC_HTTP_ERROR: &str = "Failed to submit form";

/// Shown when the request never produced a response
pub const GENERIC_NETWORK_ERROR: &str = "Failed to submit form. Please try again.";

/// Why a request to the backend failed
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// Connection refused, DNS failure and other transport errors
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http { status: u16, message: Option<String> },

    /// The response body could not be decoded
    #[error("malformed response body: {0}")]
    Parse(String),
}

impl SubmissionError {
    /// Single message to show the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::Http {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Http { message: None, .. } | Self::Parse(_) => GENERIC_HTTP_ERROR.to_string(),
            Self::Network(_) => GENERIC_NETWORK_ERROR.to_string(),
        }
    }
}

impl From<reqwest::Error> for SubmissionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}
