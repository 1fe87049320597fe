//! Command execution
//!
//! Each command loads configuration, builds its adapters and returns the
//! text to print on stdout.

use std::sync::Arc;

use anyhow::Context;
use application::{
    AerialDistanceRequest, DistanceService, NearbyService, format_distance, format_nearby_places,
};
use infrastructure::{AppConfig, MapplsAdapter, NominatimGeocodingAdapter};
use tracing::{debug, info};

use crate::Commands;

/// Run a parsed command and return its output
pub async fn run(command: Commands) -> anyhow::Result<String> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate()?;

    let token = config.mappls.require_access_token()?;
    let mapping = Arc::new(MapplsAdapter::new(&config.mappls.to_mappls_config(), token)?);

    match command {
        Commands::AerialDistance {
            source,
            destination,
            from,
            to,
            unit,
        } => {
            let geocoder = Arc::new(NominatimGeocodingAdapter::new(
                &config.nominatim.to_nominatim_config(),
            )?);
            let service = DistanceService::new(geocoder, mapping);

            let request = AerialDistanceRequest {
                from,
                to,
                source,
                destination,
                unit,
            };
            let distance = service
                .aerial_distance(&request)
                .await
                .inspect_err(|e| debug!(kind = e.kind(), "Aerial distance failed"))
                .context("failed to get distance")?;

            info!(%distance, "Aerial distance computed");
            Ok(format_distance(&distance))
        },

        Commands::Nearby {
            keywords,
            ref_location,
            limit,
        } => {
            let service = NearbyService::new(mapping);
            let places = service
                .search(&keywords, &ref_location)
                .await
                .inspect_err(|e| debug!(kind = e.kind(), "Nearby search failed"))
                .context("failed to search nearby places")?;

            Ok(format_nearby_places(&places, limit))
        },
    }
}
