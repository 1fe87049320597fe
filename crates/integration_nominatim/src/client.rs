//! Nominatim geocoding client
//!
//! Converts free-form place names to geographic coordinates using the
//! `/search` endpoint. One request per lookup, bounded by the configured
//! timeout.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::NominatimConfig;
use crate::error::GeocodingError;
use crate::models::{GeocodedPlace, RawSearchResult};

/// Trait for geocoding clients
#[async_trait]
pub trait GeocodingClient: Send + Sync {
    /// Resolve a place name to its best-ranked candidate
    async fn geocode(&self, place_name: &str) -> Result<GeocodedPlace, GeocodingError>;
}

/// Nominatim-based geocoding client
#[derive(Debug)]
pub struct NominatimClient {
    client: Client,
    config: NominatimConfig,
}

impl NominatimClient {
    /// Create a new Nominatim geocoding client
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &NominatimConfig) -> Result<Self, GeocodingError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| GeocodingError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    /// Map a failure to get a response at all
    fn send_error(&self, e: &reqwest::Error) -> GeocodingError {
        if e.is_timeout() {
            GeocodingError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            GeocodingError::ConnectionFailed(e.to_string())
        }
    }

    /// Map a failure while reading the body; the client timeout covers this too
    fn body_error(&self, e: &reqwest::Error) -> GeocodingError {
        if e.is_timeout() {
            GeocodingError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else {
            GeocodingError::ParseError(e.to_string())
        }
    }

    /// Parse a raw search response body and pick the first candidate
    fn parse_search_response(
        body: &str,
        place_name: &str,
    ) -> Result<GeocodedPlace, GeocodingError> {
        let results: Vec<RawSearchResult> =
            serde_json::from_str(body).map_err(|e| GeocodingError::ParseError(e.to_string()))?;

        results
            .into_iter()
            .next()
            .map(GeocodedPlace::from)
            .ok_or_else(|| GeocodingError::NotFound(place_name.to_string()))
    }
}

#[async_trait]
impl GeocodingClient for NominatimClient {
    #[instrument(skip(self))]
    async fn geocode(&self, place_name: &str) -> Result<GeocodedPlace, GeocodingError> {
        let place_name = place_name.trim();
        if place_name.is_empty() {
            return Err(GeocodingError::InvalidQuery(
                "location name cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));
        let params = [("q", place_name), ("format", "json")];

        debug!(%url, "Geocoding place name");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| self.send_error(&e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Nominatim rejected geocoding request");
            return Err(GeocodingError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.body_error(&e))?;

        let place = Self::parse_search_response(&body, place_name)?;
        debug!(
            lat = %place.latitude,
            lon = %place.longitude,
            display_name = %place.display_name,
            "Geocoded place name"
        );

        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_body_read_timeout_is_transport() {
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(wiremock::matchers::method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = NominatimConfig {
            timeout_secs: 1,
            ..NominatimConfig::for_testing(server.uri())
        };
        let client = NominatimClient::new(&config).unwrap();
        let timeout = client.client.get(server.uri()).send().await.unwrap_err();
        assert!(timeout.is_timeout());

        let err = client.body_error(&timeout);
        assert!(matches!(err, GeocodingError::Timeout { timeout_secs: 1 }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_body_read_other_failure_is_parse_error() {
        let client = NominatimClient::new(&NominatimConfig::for_testing("http://127.0.0.1:1")).unwrap();
        let refused = client.client.get("http://127.0.0.1:1").send().await.unwrap_err();
        assert!(!refused.is_timeout());

        assert!(matches!(client.body_error(&refused), GeocodingError::ParseError(_)));
    }

    #[test]
    fn test_client_creation() {
        let client = NominatimClient::new(&NominatimConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_parse_picks_first_candidate() {
        let body = r#"[
            {"lat": "13.1007", "lon": "77.5963", "display_name": "Yelahanka"},
            {"lat": "13.0000", "lon": "77.0000", "display_name": "Elsewhere"}
        ]"#;
        let place = NominatimClient::parse_search_response(body, "Yelahanka").unwrap();
        assert_eq!(place.latitude, "13.1007");
        assert_eq!(place.display_name, "Yelahanka");
    }

    #[test]
    fn test_parse_empty_is_not_found() {
        let err = NominatimClient::parse_search_response("[]", "Atlantis").unwrap_err();
        assert!(matches!(err, GeocodingError::NotFound(name) if name == "Atlantis"));
    }

    #[test]
    fn test_parse_garbage_is_parse_error() {
        let err = NominatimClient::parse_search_response("<html>", "x").unwrap_err();
        assert!(matches!(err, GeocodingError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_blank_name_rejected_without_request() {
        let config = NominatimConfig::for_testing("http://127.0.0.1:1");
        let client = NominatimClient::new(&config).unwrap();
        let err = client.geocode("   ").await.unwrap_err();
        assert!(matches!(err, GeocodingError::InvalidQuery(_)));
    }
}
