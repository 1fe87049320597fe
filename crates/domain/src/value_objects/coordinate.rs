//! Coordinate value object
//!
//! Coordinates are kept as the decimal strings the user (or the geocoder)
//! supplied. They are only checked for parseability, never for range: the
//! mapping provider is the authority on whether a point makes sense.
//!
//! # Examples
//!
//! ```
//! use domain::Coordinate;
//!
//! let coord = Coordinate::parse("12.97; 77.63").unwrap();
//! assert_eq!(coord.latitude(), "12.97");
//! assert_eq!(coord.longitude(), "77.63");
//! assert_eq!(coord.to_string(), "12.97,77.63");
//!
//! assert!(Coordinate::parse("12.97").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Separator between latitude and longitude in command-line input
pub const COORDINATE_SEPARATOR: char = ';';

/// A latitude/longitude pair held as decimal strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    latitude: String,
    longitude: String,
}

impl Coordinate {
    /// Parse a `latitude;longitude` string
    ///
    /// Whitespace around the whole input and around each part is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` unless splitting on `;`
    /// yields exactly two non-empty parts.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let parts: Vec<&str> = input.trim().split(COORDINATE_SEPARATOR).collect();
        if parts.len() != 2 {
            return Err(DomainError::InvalidCoordinates(format!(
                "expected format 'latitude;longitude', got '{input}'"
            )));
        }

        let latitude = parts[0].trim();
        let longitude = parts[1].trim();

        if latitude.is_empty() || longitude.is_empty() {
            return Err(DomainError::InvalidCoordinates(
                "latitude and longitude cannot be empty".to_string(),
            ));
        }

        Ok(Self::new(latitude, longitude))
    }

    /// Create a coordinate from already separated parts (for trusted sources)
    #[must_use]
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Get the latitude text
    #[must_use]
    pub fn latitude(&self) -> &str {
        &self.latitude
    }

    /// Get the longitude text
    #[must_use]
    pub fn longitude(&self) -> &str {
        &self.longitude
    }

    /// Whether both parts parse as floating-point numbers
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.latitude.trim().parse::<f64>().is_ok() && self.longitude.trim().parse::<f64>().is_ok()
    }

    /// Check that both parts are non-empty and numeric
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` naming the offending part.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.latitude.trim().is_empty() || self.longitude.trim().is_empty() {
            return Err(DomainError::InvalidCoordinates(
                "latitude and longitude cannot be empty".to_string(),
            ));
        }

        if self.latitude.trim().parse::<f64>().is_err() {
            return Err(DomainError::InvalidCoordinates(format!(
                "invalid latitude '{}'",
                self.latitude
            )));
        }

        if self.longitude.trim().parse::<f64>().is_err() {
            return Err(DomainError::InvalidCoordinates(format!(
                "invalid longitude '{}'",
                self.longitude
            )));
        }

        Ok(())
    }
}

impl FromStr for Coordinate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders as `latitude,longitude`, the form expected in mapping API queries
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
