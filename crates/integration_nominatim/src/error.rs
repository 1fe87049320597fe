//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Place name was blank
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Connection to the geocoding service failed
    #[error("Geocoding connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timeout
    #[error("Geocoding request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Service answered with a non-success status
    #[error("Nominatim API returned status {status}: {body}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// Failed to parse geocoding response
    #[error("Failed to parse Nominatim response: {0}")]
    ParseError(String),

    /// Place name could not be resolved to coordinates
    #[error("Location '{0}' not found")]
    NotFound(String),
}

impl GeocodingError {
    /// Returns true if the request never produced an HTTP response
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout { .. })
    }
}
