//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Every failure aborts the running command; nothing is retried.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Malformed coordinates, missing argument/flag, empty keyword or location
    #[error("{0}")]
    InvalidInput(String),

    /// Geocoding yielded no candidates
    #[error("{0}")]
    NotFound(String),

    /// Network failure or timeout
    #[error("{0}")]
    Transport(String),

    /// Non-200 HTTP status or undecodable body
    #[error("{0}")]
    BadResponse(String),

    /// API-level error code inside an otherwise successful response
    #[error("{0}")]
    RemoteRejected(String),

    /// Missing or invalid configuration (e.g. access token)
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Short name of the error kind, used in logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::NotFound(_) => "not_found",
            Self::Transport(_) => "transport",
            Self::BadResponse(_) => "bad_response",
            Self::RemoteRejected(_) => "remote_rejected",
            Self::Configuration(_) => "configuration",
        }
    }

    /// Prefix the message with what was being attempted, keeping the kind
    #[must_use]
    pub fn with_context(self, context: &str) -> Self {
        let wrap = |message: String| format!("{context}: {message}");
        match self {
            Self::InvalidInput(m) => Self::InvalidInput(wrap(m)),
            Self::NotFound(m) => Self::NotFound(wrap(m)),
            Self::Transport(m) => Self::Transport(wrap(m)),
            Self::BadResponse(m) => Self::BadResponse(wrap(m)),
            Self::RemoteRejected(m) => Self::RemoteRejected(wrap(m)),
            Self::Configuration(m) => Self::Configuration(wrap(m)),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
