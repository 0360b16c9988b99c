//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::Departure;

/// Query parameters accepted by the board endpoints.
///
/// The address is fixed by the server; only the route filter can be
/// narrowed per request.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    /// Comma-separated route codes (defaults to the server's filter)
    pub routes: Option<String>,
}

/// A departure row in API responses.
#[derive(Debug, Serialize)]
pub struct DepartureResult {
    /// Route code with direction, e.g. "22N"
    pub route: String,

    /// Route code alone
    pub route_code: String,

    /// Direction letter, or empty
    pub direction: String,

    pub minutes: u32,

    /// "Due" or "N min"
    pub minutes_label: String,

    pub badge_color: String,
    pub badge_text_color: String,
    pub stop_name: String,
}

impl From<&Departure> for DepartureResult {
    fn from(d: &Departure) -> Self {
        Self {
            route: d.route_label(),
            route_code: d.route_code.clone(),
            direction: d.direction.map(|dir| dir.to_string()).unwrap_or_default(),
            minutes: d.minutes_until_arrival,
            minutes_label: d.minutes_label(),
            badge_color: d.badge_color.clone(),
            badge_text_color: d.badge_text_color.clone(),
            stop_name: d.stop_name.clone(),
        }
    }
}

/// Response for `GET /api/departures`.
#[derive(Debug, Serialize)]
pub struct BoardResponse {
    pub address: String,
    pub departures: Vec<DepartureResult>,

    /// RFC 3339 timestamp of when the board was built
    pub generated_at: String,
}

/// Error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
