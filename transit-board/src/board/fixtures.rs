//! Canned upstream responses shared by the board tests.

use std::sync::Arc;

use crate::cache::MemoryCache;
use crate::geocode::GeocoderConfig;
use crate::http::MockHttpClient;
use crate::mtd::MtdConfig;

pub const GEO_BASE: &str = "https://geo.test/search";
pub const MTD_BASE: &str = "https://mtd.test/json";

pub const GEOCODE_JOHN_ST: &str = r#"[{"lat":"40.1086","lon":"-88.2272"}]"#;

pub const STOPS_NEAR_JOHN_ST: &str = r#"{
    "status": {"code": 200, "msg": "ok"},
    "stops": [
        {"stop_id": "JOHNSIXTH", "stop_name": "John and Sixth", "distance": 0.05},
        {"stop_id": "KRANNERT", "stop_name": "Krannert Center Drive", "distance": 0.2},
        {"stop_id": "IT", "stop_name": "Illinois Terminal", "distance": 0.9}
    ]
}"#;

/// Closest stop: 22N in 6, 1 in 9 (no direction).
pub const DEPARTURES_JOHN_SIXTH: &str = r#"{
    "status": {"code": 200},
    "departures": [
        {"expected_mins": 6, "headsign": "22N Illini",
         "route": {"route_short_name": "22", "route_color": "5A1D5A", "route_text_color": "FFFFFF"}},
        {"expected_mins": 9, "headsign": "1 Yellow",
         "route": {"route_short_name": "1", "route_color": "FCEE1F", "route_text_color": "000000"}}
    ]
}"#;

/// Second stop: 22N sooner (must lose to the closer stop), 22S, 5E, 12W.
pub const DEPARTURES_KRANNERT: &str = r#"{
    "status": {"code": 200},
    "departures": [
        {"expected_mins": 2, "headsign": "22N Illini",
         "route": {"route_short_name": "22", "route_color": "5A1D5A", "route_text_color": "FFFFFF"}},
        {"expected_mins": 4, "headsign": "22S Illini",
         "route": {"route_short_name": "22", "route_color": "5A1D5A", "route_text_color": "FFFFFF"}},
        {"expected_mins": 11, "headsign": "5E GreenHOPPER",
         "route": {"route_short_name": "5", "route_color": "008063"}},
        {"expected_mins": 0, "headsign": "12W Teal",
         "route": {"route_short_name": "12", "route_color": "006991"}}
    ]
}"#;

/// Third stop: 1 again (duplicate), 13S, 2U.
pub const DEPARTURES_TERMINAL: &str = r#"{
    "status": {"code": 200},
    "departures": [
        {"expected_mins": 1, "headsign": "1 Yellow",
         "route": {"route_short_name": "1", "route_color": "FCEE1F", "route_text_color": "000000"}},
        {"expected_mins": 15, "headsign": "13S Silver",
         "route": {"route_short_name": "13", "route_color": "CCCCCC"}},
        {"expected_mins": 3, "headsign": "2U Red",
         "route": {"route_short_name": "2", "route_color": "ED1C24"}}
    ]
}"#;

/// Mock serving the full John St scenario.
pub fn john_st_mock() -> MockHttpClient {
    MockHttpClient::new()
        .with_response("geo.test", 200, GEOCODE_JOHN_ST)
        .with_response("getstopsbylatlon", 200, STOPS_NEAR_JOHN_ST)
        .with_response("stop_id=JOHNSIXTH", 200, DEPARTURES_JOHN_SIXTH)
        .with_response("stop_id=KRANNERT", 200, DEPARTURES_KRANNERT)
        .with_response("stop_id=IT&", 200, DEPARTURES_TERMINAL)
}

pub fn geocoder_config() -> GeocoderConfig {
    GeocoderConfig::new().with_base_url(GEO_BASE)
}

pub fn mtd_config() -> MtdConfig {
    MtdConfig::new().with_base_url(MTD_BASE)
}

pub fn memory_cache() -> Arc<MemoryCache> {
    Arc::new(MemoryCache::default())
}
