//! Mapping service port
//!
//! Defines the interface for provider-computed distances and nearby search.
//! Adapters in the infrastructure layer implement this port over the
//! mapping provider's HTTP API.

use async_trait::async_trait;
use domain::{Coordinate, Distance, DistanceUnit, NearbyPlace};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for distance and nearby-place queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait MappingPort: Send + Sync {
    /// Aerial distance between two points as reported by the provider
    async fn aerial_distance(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        unit: DistanceUnit,
    ) -> Result<Distance, ApplicationError>;

    /// Places matching `keywords` around `ref_location`, in provider order
    ///
    /// `keywords` may contain the provider's `;` (OR) and `$` (AND) operators.
    async fn nearby_search(
        &self,
        keywords: &str,
        ref_location: &str,
    ) -> Result<Vec<NearbyPlace>, ApplicationError>;
}
