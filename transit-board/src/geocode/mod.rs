//! Address geocoding.
//!
//! Turns the configured free-text address into a coordinate. Addresses that
//! don't name the service area get a fixed suffix so the provider doesn't
//! pick a same-named street elsewhere.

mod client;
mod query;

pub use client::{Geocoder, GeocoderConfig};
pub use query::{
    LOCATION_HINTS, LOCATION_SUFFIX, address_cache_key, encode_query, needs_location_hint,
    with_location_hint,
};
