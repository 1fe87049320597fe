//! Domain entities - records returned by the mapping provider

mod nearby_place;

pub use nearby_place::{AddressTokens, NearbyPlace};
