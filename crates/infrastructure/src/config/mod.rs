//! Application configuration
//!
//! Sources, lowest precedence first:
//! - built-in defaults
//! - `map-cli.toml` in the working directory (optional)
//! - `MAPCLI_*` environment variables, `__` between section and key
//!   (e.g. `MAPCLI_MAPPLS__TIMEOUT_SECS=5`)
//! - `MAPPLS_ACCESS_TOKEN` for the Mappls token

mod integrations;

use application::ApplicationError;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use integrations::{MapplsAppConfig, NominatimAppConfig};

/// Configuration file looked up in the working directory (extension optional)
pub const CONFIG_FILE: &str = "map-cli";

/// Prefix of environment variables overriding config keys
pub const ENV_PREFIX: &str = "MAPCLI";

/// Environment variable carrying the Mappls access token
pub const ACCESS_TOKEN_ENV: &str = "MAPPLS_ACCESS_TOKEN";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Geocoding configuration
    #[serde(default)]
    pub nominatim: NominatimAppConfig,

    /// Mappls configuration
    #[serde(default)]
    pub mappls: MapplsAppConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            // Override with environment variables (e.g., MAPCLI_NOMINATIM__TIMEOUT_SECS)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder, std::env::var(ACCESS_TOKEN_ENV).ok())
    }

    /// Build from prepared sources, letting `access_token` win over them
    ///
    /// A blank token counts as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the sources cannot be merged or deserialized.
    pub fn from_builder(
        builder: ConfigBuilder<DefaultState>,
        access_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        let access_token = access_token.filter(|t| !t.trim().is_empty());
        debug!(token_from_env = access_token.is_some(), "Building configuration");

        builder
            .set_override_option("mappls.access_token", access_token)?
            .build()?
            .try_deserialize()
    }

    /// Check that endpoints are set and timeouts are positive
    ///
    /// # Errors
    ///
    /// Returns `Configuration` naming the first offending key.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.nominatim
            .to_nominatim_config()
            .validate()
            .and_then(|()| self.mappls.to_mappls_config().validate())
            .map_err(ApplicationError::Configuration)
    }
}
