//! Geocoding service port
//!
//! Resolves free-text place names to coordinates.

use async_trait::async_trait;
use domain::Coordinate;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for place-name geocoding
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Coordinates of the best-ranked match for `place_name`
    ///
    /// Fails with `NotFound` when the service has no candidate.
    async fn resolve(&self, place_name: &str) -> Result<Coordinate, ApplicationError>;
}
