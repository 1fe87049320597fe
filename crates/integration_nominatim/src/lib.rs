//! Nominatim geocoding integration for map-cli
//!
//! Resolves free-text place names to coordinates using the
//! [Nominatim/OpenStreetMap](https://nominatim.openstreetmap.org) search API.
//!
//! # Architecture
//!
//! [`GeocodingClient`] defines the lookup interface and is implemented by
//! [`NominatimClient`]. Only the first ranked candidate is returned; there is
//! no caching or retrying, each call is exactly one HTTP request.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_nominatim::{GeocodingClient, NominatimClient, NominatimConfig};
//!
//! let client = NominatimClient::new(&NominatimConfig::default())?;
//! let place = client.geocode("Koramangala").await?;
//! println!("{} -> {}", place.display_name, place.coordinate());
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{GeocodingClient, NominatimClient};
pub use config::NominatimConfig;
pub use error::GeocodingError;
pub use models::GeocodedPlace;
