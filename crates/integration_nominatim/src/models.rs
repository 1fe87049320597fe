//! Nominatim response models

use domain::Coordinate;
use serde::Deserialize;

/// A geocoding candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeocodedPlace {
    /// Latitude as returned by the API
    pub latitude: String,
    /// Longitude as returned by the API
    pub longitude: String,
    /// Short name, if the API provided one
    pub name: String,
    /// Full display name
    pub display_name: String,
}

impl GeocodedPlace {
    /// Coordinates of the candidate, unvalidated
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude.clone(), self.longitude.clone())
    }
}

/// Raw Nominatim search result
#[derive(Debug, Deserialize)]
pub(crate) struct RawSearchResult {
    pub(crate) lat: String,
    pub(crate) lon: String,
    pub(crate) name: Option<String>,
    pub(crate) display_name: Option<String>,
}

impl From<RawSearchResult> for GeocodedPlace {
    fn from(raw: RawSearchResult) -> Self {
        Self {
            latitude: raw.lat,
            longitude: raw.lon,
            name: raw.name.unwrap_or_default(),
            display_name: raw.display_name.unwrap_or_default(),
        }
    }
}
