//! Mappls service configuration

use serde::{Deserialize, Serialize};

/// Configuration for the Mappls distance and search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapplsConfig {
    /// Aerial distance endpoint
    #[serde(default = "default_distance_url")]
    pub distance_url: String,

    /// Nearby search endpoint
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_distance_url() -> String {
    "https://tile.mappls.com/map/raster_tile/distanceA".to_string()
}

fn default_search_url() -> String {
    "https://search.mappls.com/search/places/nearby/json".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for MapplsConfig {
    fn default() -> Self {
        Self {
            distance_url: default_distance_url(),
            search_url: default_search_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MapplsConfig {
    /// Create a configuration with both endpoints on a local mock server
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            distance_url: format!("{base_url}/distance"),
            search_url: format!("{base_url}/nearby"),
            timeout_secs: 5,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.distance_url.trim().is_empty() {
            return Err("mappls.distance_url must not be empty".to_string());
        }

        if self.search_url.trim().is_empty() {
            return Err("mappls.search_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("mappls.timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
