// ABOUTME: Custom error types for the anicii SDK with user-friendly messages
// ABOUTME: Distinguishes timeouts, HTTP status failures, and malformed search responses

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Timeout: request took too long to complete")]
    Timeout,

    #[error("Image source returned HTTP {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Network error: {0}")]
    Network(String),
}

impl ApiError {
    pub fn help_text(&self) -> Option<&'static str> {
        match self {
            ApiError::Timeout => Some("Try again or check your network connection"),
            ApiError::Network(_) => Some("Check your internet connection and try again"),
            ApiError::Status(_) => Some("The image source may be down. Try again later"),
            ApiError::MalformedResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::MalformedResponse(err.to_string())
    }
}
