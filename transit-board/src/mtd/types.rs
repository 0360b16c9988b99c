//! Transit API response DTOs.
//!
//! These map directly to the JSON API responses. Fields the board can
//! live without are `Option` because the feed omits rather than nulls
//! them.

use serde::Deserialize;

/// API-level status block carried by every response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiStatus {
    pub code: Option<u16>,
    pub msg: Option<String>,
}

/// Just the status block of any response.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusOnly {
    pub status: Option<ApiStatus>,
}

/// Response from `getstopsbylatlon` and `getstops`.
#[derive(Debug, Clone, Deserialize)]
pub struct StopsResponse {
    pub status: Option<ApiStatus>,
    pub stops: Option<Vec<StopDto>>,
}

/// A stop as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDto {
    pub stop_id: String,

    /// Empty when the feed omits it.
    #[serde(default)]
    pub stop_name: String,

    /// Distance from the query point in miles (`getstopsbylatlon` only).
    pub distance: Option<f64>,
}

/// Response from `getdeparturesbystop`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeparturesResponse {
    pub status: Option<ApiStatus>,
    pub departures: Option<Vec<DepartureDto>>,
}

/// A predicted departure as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct DepartureDto {
    /// Minutes until the vehicle is expected.
    pub expected_mins: Option<i64>,

    /// Rider-facing destination text, e.g. `"22N Illini"`.
    pub headsign: Option<String>,

    pub route: Option<RouteDto>,
}

/// Route details embedded in a departure.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDto {
    pub route_short_name: Option<String>,

    /// Hex colour without `#`, e.g. `"5A1D5A"`.
    pub route_color: Option<String>,

    pub route_text_color: Option<String>,
}
