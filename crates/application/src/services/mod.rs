//! Application services - Use case implementations

mod distance_service;
mod nearby_service;

pub use distance_service::{AerialDistanceRequest, DistanceService, Side, format_distance};
pub use nearby_service::{
    DEFAULT_DISPLAY_LIMIT, KEYWORD_OR, NearbyService, format_nearby_places, join_keywords,
};
