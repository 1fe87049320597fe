//! Integration configurations: Nominatim geocoding, Mappls.

use application::ApplicationError;
use integration_mappls::MapplsConfig;
use integration_nominatim::NominatimConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

// ==============================
// Nominatim Configuration
// ==============================

/// Place-name geocoding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NominatimAppConfig {
    /// Base URL of the Nominatim API (default: nominatim.openstreetmap.org)
    #[serde(default = "default_nominatim_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every lookup
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_nominatim_base_url() -> String {
    NominatimConfig::default().base_url
}

fn default_user_agent() -> String {
    NominatimConfig::default().user_agent
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for NominatimAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_nominatim_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl NominatimAppConfig {
    /// Convert to `integration_nominatim::NominatimConfig`
    #[must_use]
    pub fn to_nominatim_config(&self) -> NominatimConfig {
        NominatimConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            user_agent: self.user_agent.clone(),
        }
    }
}

// ==============================
// Mappls Configuration
// ==============================

/// Mappls distance and nearby search configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct MapplsAppConfig {
    /// Aerial distance endpoint
    #[serde(default = "default_distance_url")]
    pub distance_url: String,

    /// Nearby search endpoint
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// API access token (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub access_token: Option<SecretString>,
}

impl std::fmt::Debug for MapplsAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapplsAppConfig")
            .field("distance_url", &self.distance_url)
            .field("search_url", &self.search_url)
            .field("timeout_secs", &self.timeout_secs)
            .field(
                "access_token",
                &if self.access_token.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .finish()
    }
}

fn default_distance_url() -> String {
    MapplsConfig::default().distance_url
}

fn default_search_url() -> String {
    MapplsConfig::default().search_url
}

impl Default for MapplsAppConfig {
    fn default() -> Self {
        Self {
            distance_url: default_distance_url(),
            search_url: default_search_url(),
            timeout_secs: default_timeout_secs(),
            access_token: None,
        }
    }
}

impl MapplsAppConfig {
    /// Convert to `integration_mappls::MapplsConfig`
    #[must_use]
    pub fn to_mappls_config(&self) -> MapplsConfig {
        MapplsConfig {
            distance_url: self.distance_url.clone(),
            search_url: self.search_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// The access token, if one was configured and is not blank
    ///
    /// # Errors
    ///
    /// Returns `Configuration` when the token is missing or blank.
    pub fn require_access_token(&self) -> Result<&str, ApplicationError> {
        self.access_token
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| {
                ApplicationError::Configuration(format!(
                    "{} environment variable is not set",
                    super::ACCESS_TOKEN_ENV
                ))
            })
    }
}
