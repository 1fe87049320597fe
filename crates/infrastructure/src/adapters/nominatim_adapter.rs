//! Geocoding adapter - Implements GeocodingPort using integration_nominatim

use application::error::ApplicationError;
use application::ports::GeocodingPort;
use async_trait::async_trait;
use domain::Coordinate;
use integration_nominatim::{GeocodingClient, GeocodingError, NominatimClient, NominatimConfig};
use tracing::{debug, instrument};

/// Adapter resolving place names through Nominatim
pub struct NominatimGeocodingAdapter {
    client: NominatimClient,
}

impl std::fmt::Debug for NominatimGeocodingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NominatimGeocodingAdapter")
            .field("client", &"NominatimClient")
            .finish()
    }
}

impl NominatimGeocodingAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: &NominatimConfig) -> Result<Self, ApplicationError> {
        let client = NominatimClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    fn map_error(err: GeocodingError) -> ApplicationError {
        let message = err.to_string();
        match err {
            GeocodingError::InvalidQuery(_) => ApplicationError::InvalidInput(message),
            GeocodingError::NotFound(_) => ApplicationError::NotFound(message),
            GeocodingError::ConnectionFailed(_) | GeocodingError::Timeout { .. } => {
                ApplicationError::Transport(message)
            },
            GeocodingError::RequestFailed { .. } | GeocodingError::ParseError(_) => {
                ApplicationError::BadResponse(message)
            },
        }
    }
}

#[async_trait]
impl GeocodingPort for NominatimGeocodingAdapter {
    #[instrument(skip(self))]
    async fn resolve(&self, place_name: &str) -> Result<Coordinate, ApplicationError> {
        let place = self
            .client
            .geocode(place_name)
            .await
            .map_err(Self::map_error)?;

        debug!(display_name = %place.display_name, "Resolved place name");

        // Passed through as-is; the distance request checks the numbers
        Ok(place.coordinate())
    }
}
