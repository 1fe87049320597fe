//! Mappls HTTP client
//!
//! Provides aerial distance and nearby keyword search. Both endpoints take
//! the access token as a query parameter; it is kept out of every log line.

use std::time::Duration;

use async_trait::async_trait;
use domain::round_to_two_decimals;
use reqwest::{Client, Response};
use tracing::{debug, instrument, warn};

use crate::config::MapplsConfig;
use crate::error::MapplsError;
use crate::models::{NearbySearchResult, RawDistanceResponse, RawNearbyResponse};

/// `responseCode` reported by a successful distance call
const RESPONSE_CODE_OK: i64 = 200;

/// Unit code sent when the caller leaves the unit blank
const DEFAULT_UNIT: &str = "K";

/// Trait for distance / nearby search clients
#[async_trait]
pub trait MappingClient: Send + Sync {
    /// Aerial distance between two points, rounded to two decimals
    ///
    /// Coordinates are decimal strings; a blank `unit` means kilometers.
    async fn distance(
        &self,
        from_lat: &str,
        from_lon: &str,
        to_lat: &str,
        to_lon: &str,
        unit: &str,
    ) -> Result<f64, MapplsError>;

    /// Places matching `keywords` around `ref_location` (`lat,lon`)
    ///
    /// `;` (OR) and `$` (AND) inside `keywords` are passed through untouched.
    async fn nearby_search(
        &self,
        keywords: &str,
        ref_location: &str,
    ) -> Result<NearbySearchResult, MapplsError>;
}

/// Mappls REST client
pub struct MapplsClient {
    client: Client,
    config: MapplsConfig,
    access_token: String,
}

impl std::fmt::Debug for MapplsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapplsClient")
            .field("config", &self.config)
            .field("access_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl MapplsClient {
    /// Create a new Mappls client
    ///
    /// # Errors
    ///
    /// Returns an error if the token is blank or the HTTP client cannot be
    /// initialized.
    pub fn new(config: &MapplsConfig, access_token: impl Into<String>) -> Result<Self, MapplsError> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(MapplsError::ConfigurationError(
                "Mappls access token must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| MapplsError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            access_token,
        })
    }

    /// Issue a GET and check the HTTP status
    async fn get(&self, url: &str, params: &[(&str, &str)]) -> Result<Response, MapplsError> {
        let response = self
            .client
            .get(url)
            .query(params)
            .query(&[("access_token", self.access_token.as_str())])
            .send()
            .await
            .map_err(|e| self.send_error(e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Mappls rejected request");
            return Err(MapplsError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Map a failure to get a response at all
    fn send_error(&self, e: reqwest::Error) -> MapplsError {
        if e.is_timeout() {
            MapplsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            // reqwest errors carry the full URL, token included
            MapplsError::ConnectionFailed(e.without_url().to_string())
        }
    }

    /// Map a failure while reading the body; the client timeout covers this too
    fn body_error(&self, e: reqwest::Error) -> MapplsError {
        if e.is_timeout() {
            MapplsError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            MapplsError::ParseError(e.without_url().to_string())
        }
    }

    /// Parse a raw distance response body
    fn parse_distance_response(body: &str) -> Result<f64, MapplsError> {
        let raw: RawDistanceResponse =
            serde_json::from_str(body).map_err(|e| MapplsError::ParseError(e.to_string()))?;

        let code = raw.response_code.unwrap_or_default();
        if code != RESPONSE_CODE_OK {
            return Err(MapplsError::ApiError { code });
        }

        let distance = raw
            .distance
            .ok_or_else(|| MapplsError::ParseError("missing field `distance`".to_string()))?;

        debug!(distance, unit = ?raw.unit, "Distance received");
        Ok(round_to_two_decimals(distance))
    }

    /// Parse a raw nearby search response body
    fn parse_nearby_response(body: &str) -> Result<NearbySearchResult, MapplsError> {
        let raw: RawNearbyResponse =
            serde_json::from_str(body).map_err(|e| MapplsError::ParseError(e.to_string()))?;

        Ok(NearbySearchResult::from(raw))
    }
}

/// Check that a latitude/longitude pair is present and numeric
fn validate_coordinates(side: &str, lat: &str, lon: &str) -> Result<(), MapplsError> {
    if lat.trim().is_empty() || lon.trim().is_empty() {
        return Err(MapplsError::InvalidCoordinates(format!(
            "{side} latitude and longitude cannot be empty"
        )));
    }

    if lat.trim().parse::<f64>().is_err() {
        return Err(MapplsError::InvalidCoordinates(format!(
            "{side} latitude '{lat}' is not a number"
        )));
    }

    if lon.trim().parse::<f64>().is_err() {
        return Err(MapplsError::InvalidCoordinates(format!(
            "{side} longitude '{lon}' is not a number"
        )));
    }

    Ok(())
}

#[async_trait]
impl MappingClient for MapplsClient {
    #[instrument(skip(self))]
    async fn distance(
        &self,
        from_lat: &str,
        from_lon: &str,
        to_lat: &str,
        to_lon: &str,
        unit: &str,
    ) -> Result<f64, MapplsError> {
        validate_coordinates("source", from_lat, from_lon)?;
        validate_coordinates("destination", to_lat, to_lon)?;

        let unit = match unit.trim() {
            "" => DEFAULT_UNIT,
            other => other,
        };

        let from = format!("{},{}", from_lat.trim(), from_lon.trim());
        let to = format!("{},{}", to_lat.trim(), to_lon.trim());
        let params = [("from", from.as_str()), ("to", to.as_str()), ("unit", unit)];

        debug!(url = %self.config.distance_url, "Requesting aerial distance");

        let body = self
            .get(&self.config.distance_url, &params)
            .await?
            .text()
            .await
            .map_err(|e| self.body_error(e))?;

        Self::parse_distance_response(&body)
    }

    #[instrument(skip(self))]
    async fn nearby_search(
        &self,
        keywords: &str,
        ref_location: &str,
    ) -> Result<NearbySearchResult, MapplsError> {
        let keywords = keywords.trim();
        if keywords.is_empty() {
            return Err(MapplsError::InvalidInput(
                "keywords cannot be empty".to_string(),
            ));
        }

        let ref_location = ref_location.trim();
        if ref_location.is_empty() {
            return Err(MapplsError::InvalidInput(
                "reference location cannot be empty".to_string(),
            ));
        }

        let params = [("keywords", keywords), ("refLocation", ref_location)];

        debug!(url = %self.config.search_url, "Searching nearby places");

        let body = self
            .get(&self.config.search_url, &params)
            .await?
            .text()
            .await
            .map_err(|e| self.body_error(e))?;

        let result = Self::parse_nearby_response(&body)?;
        debug!(count = result.places.len(), "Nearby places found");
        Ok(result)
    }
}
