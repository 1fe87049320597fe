//! Mappls response models

use domain::{AddressTokens, NearbyPlace};
use serde::Deserialize;

/// Paging metadata reported with nearby results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub page_count: u32,
    pub total_hits: u32,
    pub total_pages: u32,
    pub page_size: u32,
}

/// Decoded nearby search response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NearbySearchResult {
    /// Places in the order the API ranked them
    pub places: Vec<NearbyPlace>,
    /// Paging metadata, when present
    pub page_info: Option<PageInfo>,
}

// --- Raw API response types for deserialization ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawDistanceResponse {
    pub(crate) response_code: Option<i64>,
    pub(crate) distance: Option<f64>,
    pub(crate) unit: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNearbyResponse {
    pub(crate) suggested_locations: Option<Vec<RawNearbyLocation>>,
    pub(crate) page_info: Option<RawPageInfo>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawNearbyLocation {
    distance: Option<u64>,
    e_loc: Option<String>,
    email: Option<String>,
    keywords: Option<Vec<String>>,
    landline_no: Option<String>,
    mobile_no: Option<String>,
    order_index: Option<u32>,
    place_address: Option<String>,
    place_name: Option<String>,
    #[serde(rename = "type")]
    place_type: Option<String>,
    address_tokens: Option<RawAddressTokens>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawAddressTokens {
    house_number: Option<String>,
    house_name: Option<String>,
    poi: Option<String>,
    street: Option<String>,
    sub_sub_locality: Option<String>,
    sub_locality: Option<String>,
    locality: Option<String>,
    village: Option<String>,
    sub_district: Option<String>,
    district: Option<String>,
    city: Option<String>,
    state: Option<String>,
    pincode: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawPageInfo {
    page_count: Option<u32>,
    total_hits: Option<u32>,
    total_pages: Option<u32>,
    page_size: Option<u32>,
}

/// Drop blank optional contact fields
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<RawAddressTokens> for AddressTokens {
    fn from(raw: RawAddressTokens) -> Self {
        Self {
            house_number: raw.house_number.unwrap_or_default(),
            house_name: raw.house_name.unwrap_or_default(),
            poi: raw.poi.unwrap_or_default(),
            street: raw.street.unwrap_or_default(),
            sub_sub_locality: raw.sub_sub_locality.unwrap_or_default(),
            sub_locality: raw.sub_locality.unwrap_or_default(),
            locality: raw.locality.unwrap_or_default(),
            village: raw.village.unwrap_or_default(),
            sub_district: raw.sub_district.unwrap_or_default(),
            district: raw.district.unwrap_or_default(),
            city: raw.city.unwrap_or_default(),
            state: raw.state.unwrap_or_default(),
            pincode: raw.pincode.unwrap_or_default(),
        }
    }
}

impl From<RawNearbyLocation> for NearbyPlace {
    fn from(raw: RawNearbyLocation) -> Self {
        Self {
            name: raw.place_name.unwrap_or_default(),
            address: raw.place_address.unwrap_or_default(),
            distance_meters: raw.distance.unwrap_or_default(),
            phone: non_blank(raw.mobile_no),
            email: non_blank(raw.email),
            landline: non_blank(raw.landline_no),
            e_loc: raw.e_loc.unwrap_or_default(),
            place_type: raw.place_type.unwrap_or_default(),
            keywords: raw.keywords.unwrap_or_default(),
            order_index: raw.order_index.unwrap_or_default(),
            address_tokens: raw.address_tokens.map(AddressTokens::from).unwrap_or_default(),
        }
    }
}

impl From<RawPageInfo> for PageInfo {
    fn from(raw: RawPageInfo) -> Self {
        Self {
            page_count: raw.page_count.unwrap_or_default(),
            total_hits: raw.total_hits.unwrap_or_default(),
            total_pages: raw.total_pages.unwrap_or_default(),
            page_size: raw.page_size.unwrap_or_default(),
        }
    }
}

impl From<RawNearbyResponse> for NearbySearchResult {
    fn from(raw: RawNearbyResponse) -> Self {
        Self {
            places: raw
                .suggested_locations
                .unwrap_or_default()
                .into_iter()
                .map(NearbyPlace::from)
                .collect(),
            page_info: raw.page_info.map(PageInfo::from),
        }
    }
}
