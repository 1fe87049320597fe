//! Mappls integration for map-cli
//!
//! Wraps two endpoints of the [Mappls](https://about.mappls.com/api/) platform:
//! point-to-point aerial distance and nearby keyword search. Both require an
//! access token, sent as the `access_token` query parameter.
//!
//! # Architecture
//!
//! [`MappingClient`] defines the interface and is implemented by
//! [`MapplsClient`]. Nearby results are decoded straight into
//! [`domain::NearbyPlace`] records and returned in the order the API ranked
//! them.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_mappls::{MappingClient, MapplsClient, MapplsConfig};
//!
//! let client = MapplsClient::new(&MapplsConfig::default(), token)?;
//! let km = client.distance("13.115", "77.607", "12.935", "77.624", "K").await?;
//! let result = client.nearby_search("coffee;tea", "28.631460,77.217423").await?;
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{MappingClient, MapplsClient};
pub use config::MapplsConfig;
pub use error::MapplsError;
pub use models::{NearbySearchResult, PageInfo};
