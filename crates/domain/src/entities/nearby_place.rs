//! Nearby place entity
//!
//! A single suggestion from a nearby search. The record is built once per
//! response and never mutated; its only identity is the provider's `eLoc`.

use serde::{Deserialize, Serialize};

/// Structured breakdown of a place address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressTokens {
    pub house_number: String,
    pub house_name: String,
    pub poi: String,
    pub street: String,
    pub sub_sub_locality: String,
    pub sub_locality: String,
    pub locality: String,
    pub village: String,
    pub sub_district: String,
    pub district: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl AddressTokens {
    /// Join the non-empty tokens from most to least specific
    #[must_use]
    pub fn summary(&self) -> String {
        [
            &self.house_number,
            &self.house_name,
            &self.poi,
            &self.street,
            &self.sub_sub_locality,
            &self.sub_locality,
            &self.locality,
            &self.village,
            &self.sub_district,
            &self.district,
            &self.city,
            &self.state,
            &self.pincode,
        ]
        .into_iter()
        .map(|token| token.trim())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
    }

    /// Check whether every token is blank
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.summary().is_empty()
    }
}

/// A place returned by a nearby search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearbyPlace {
    /// Place name
    pub name: String,
    /// Single-line address
    pub address: String,
    /// Distance from the reference location in meters
    pub distance_meters: u64,
    /// Mobile phone number, if listed
    pub phone: Option<String>,
    /// Contact email, if listed
    pub email: Option<String>,
    /// Landline number, if listed
    pub landline: Option<String>,
    /// Provider-assigned place identifier
    pub e_loc: String,
    /// Provider place type (e.g. "POI")
    pub place_type: String,
    /// Category keywords
    pub keywords: Vec<String>,
    /// Rank assigned by the provider
    pub order_index: u32,
    /// Structured address
    pub address_tokens: AddressTokens,
}

impl NearbyPlace {
    /// Address for display, falling back to the address tokens
    #[must_use]
    pub fn display_address(&self) -> String {
        if self.address.trim().is_empty() {
            self.address_tokens.summary()
        } else {
            self.address.clone()
        }
    }
}
