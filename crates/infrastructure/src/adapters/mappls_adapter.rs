//! Mapping adapter - Implements MappingPort using integration_mappls

use application::error::ApplicationError;
use application::ports::MappingPort;
use async_trait::async_trait;
use domain::{Coordinate, Distance, DistanceUnit, NearbyPlace};
use integration_mappls::{MappingClient, MapplsClient, MapplsConfig, MapplsError};
use tracing::{debug, instrument};

/// Adapter for aerial distance and nearby search using the Mappls API
pub struct MapplsAdapter {
    client: MapplsClient,
}

impl std::fmt::Debug for MapplsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapplsAdapter")
            .field("client", &self.client)
            .finish()
    }
}

impl MapplsAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns `Configuration` for a blank token, or an error if the HTTP
    /// client fails to initialize.
    pub fn new(config: &MapplsConfig, access_token: &str) -> Result<Self, ApplicationError> {
        let client = MapplsClient::new(config, access_token).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    fn map_error(err: MapplsError) -> ApplicationError {
        let message = err.to_string();
        match err {
            MapplsError::InvalidCoordinates(_) | MapplsError::InvalidInput(_) => {
                ApplicationError::InvalidInput(message)
            },
            MapplsError::ConfigurationError(_) => ApplicationError::Configuration(message),
            MapplsError::ConnectionFailed(_) | MapplsError::Timeout { .. } => {
                ApplicationError::Transport(message)
            },
            MapplsError::RequestFailed { .. } | MapplsError::ParseError(_) => {
                ApplicationError::BadResponse(message)
            },
            MapplsError::ApiError { .. } => ApplicationError::RemoteRejected(message),
        }
    }
}

#[async_trait]
impl MappingPort for MapplsAdapter {
    #[instrument(skip(self))]
    async fn aerial_distance(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        unit: DistanceUnit,
    ) -> Result<Distance, ApplicationError> {
        let value = self
            .client
            .distance(
                from.latitude(),
                from.longitude(),
                to.latitude(),
                to.longitude(),
                unit.api_code(),
            )
            .await
            .map_err(Self::map_error)?;

        Ok(Distance::new(value, unit))
    }

    #[instrument(skip(self))]
    async fn nearby_search(
        &self,
        keywords: &str,
        ref_location: &str,
    ) -> Result<Vec<NearbyPlace>, ApplicationError> {
        let result = self
            .client
            .nearby_search(keywords, ref_location)
            .await
            .map_err(Self::map_error)?;

        if let Some(page) = result.page_info {
            debug!(
                total_hits = page.total_hits,
                total_pages = page.total_pages,
                "Nearby paging info"
            );
        }

        Ok(result.places)
    }
}
