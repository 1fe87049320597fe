//! Adapters implementing application ports over the integration clients

mod mappls_adapter;
mod nominatim_adapter;

pub use mappls_adapter::MapplsAdapter;
pub use nominatim_adapter::NominatimGeocodingAdapter;
