//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinate text could not be split into latitude and longitude
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    /// Distance unit is not one of the supported units
    #[error("Invalid distance unit: {0}")]
    InvalidUnit(String),
}
