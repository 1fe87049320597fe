//! Mappls error types

use thiserror::Error;

/// Errors that can occur when calling Mappls
#[derive(Debug, Error)]
pub enum MapplsError {
    /// Coordinates were blank or not numeric
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// A required search input was blank
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Client could not be set up (e.g. missing access token)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection to Mappls failed
    #[error("Failed to call Mappls API: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Mappls request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Service answered with a non-success status
    #[error("Mappls API returned status {status}: {body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// Failed to parse response body
    #[error("Failed to parse Mappls response: {0}")]
    ParseError(String),

    /// HTTP 200 carrying an API-level failure code
    #[error("Mappls API returned response code {code}")]
    ApiError {
        /// The embedded `responseCode`
        code: i64,
    },
}

impl MapplsError {
    /// Returns true if the request never produced an HTTP response
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }
}
