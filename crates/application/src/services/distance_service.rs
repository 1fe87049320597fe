//! Aerial distance use case
//!
//! Each endpoint is resolved on its own: an explicit coordinate flag wins,
//! then a positional argument that reads as `lat;lon`, and only then a
//! geocoding lookup of the positional text.

use std::fmt;
use std::sync::Arc;

use domain::{Coordinate, Distance, DistanceUnit};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::{GeocodingPort, MappingPort};

/// Which end of the route is being resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Destination,
}

impl Side {
    /// Human-readable name used in messages
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Source => "source",
            Self::Destination => "destination",
        }
    }

    /// Command-line flag that supplies coordinates for this side
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Source => "--from",
            Self::Destination => "--to",
        }
    }
}

/// Raw inputs of an aerial distance command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AerialDistanceRequest {
    /// `--from` value, if given
    pub from: Option<String>,
    /// `--to` value, if given
    pub to: Option<String>,
    /// First positional argument
    pub source: Option<String>,
    /// Second positional argument
    pub destination: Option<String>,
    /// Unit to request
    pub unit: DistanceUnit,
}

/// Resolves both endpoints and asks the mapping provider for the distance
pub struct DistanceService {
    geocoder: Arc<dyn GeocodingPort>,
    mapping: Arc<dyn MappingPort>,
}

impl fmt::Debug for DistanceService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceService").finish_non_exhaustive()
    }
}

impl DistanceService {
    /// Create a new distance service
    pub fn new(geocoder: Arc<dyn GeocodingPort>, mapping: Arc<dyn MappingPort>) -> Self {
        Self { geocoder, mapping }
    }

    /// Resolve one endpoint of the route
    ///
    /// # Errors
    ///
    /// `InvalidInput` when neither input is given, when the flag value is
    /// malformed, or when the positional value is blank. Geocoding failures
    /// are passed on with the side named in the message.
    #[instrument(skip(self))]
    pub async fn resolve_endpoint(
        &self,
        side: Side,
        flag: Option<&str>,
        positional: Option<&str>,
    ) -> Result<Coordinate, ApplicationError> {
        // A blank flag counts as not given
        if let Some(value) = flag.filter(|v| !v.trim().is_empty()) {
            debug!(side = side.label(), "Using coordinates from flag");
            return Coordinate::parse(value).map_err(|e| {
                ApplicationError::from(e).with_context(&format!("invalid {} coordinates", side.label()))
            });
        }

        let Some(text) = positional else {
            return Err(ApplicationError::InvalidInput(format!(
                "missing {side} location: pass a place name or use {flag} lat;lon",
                side = side.label(),
                flag = side.flag(),
            )));
        };

        if text.trim().is_empty() {
            return Err(ApplicationError::InvalidInput(format!(
                "{} location cannot be empty",
                side.label()
            )));
        }

        match Coordinate::parse(text) {
            Ok(coordinate) if coordinate.is_numeric() => {
                debug!(side = side.label(), "Positional argument is a coordinate pair");
                return Ok(coordinate);
            },
            _ => {},
        }

        debug!(side = side.label(), place = text, "Geocoding positional argument");
        self.geocoder
            .resolve(text.trim())
            .await
            .map_err(|e| e.with_context(&format!("failed to geocode {} location", side.label())))
    }

    /// Resolve both endpoints and fetch the aerial distance between them
    ///
    /// The source is resolved before the destination; a failure on either
    /// side stops the command before any distance request is made.
    ///
    /// # Errors
    ///
    /// Any resolution or provider failure.
    #[instrument(skip(self, request))]
    pub async fn aerial_distance(
        &self,
        request: &AerialDistanceRequest,
    ) -> Result<Distance, ApplicationError> {
        let from = self
            .resolve_endpoint(Side::Source, request.from.as_deref(), request.source.as_deref())
            .await?;
        let to = self
            .resolve_endpoint(
                Side::Destination,
                request.to.as_deref(),
                request.destination.as_deref(),
            )
            .await?;

        info!(%from, %to, unit = request.unit.label(), "Requesting aerial distance");

        self.mapping.aerial_distance(&from, &to, request.unit).await
    }
}

/// Render a distance the way the command prints it
#[must_use]
pub fn format_distance(distance: &Distance) -> String {
    format!("Distance: {distance}")
}
