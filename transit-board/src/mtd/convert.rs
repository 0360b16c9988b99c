//! Conversion from API DTOs to domain types.

use crate::domain::{
    DEFAULT_BADGE_COLOR, DEFAULT_BADGE_TEXT_COLOR, Departure, Stop, extract_direction,
    normalize_color,
};

use super::types::{DepartureDto, StopDto};

/// Route code shown when the feed omits `route_short_name`.
const UNKNOWN_ROUTE: &str = "?";

/// Convert an API departure, attributing it to `stop_name`.
///
/// Missing minutes become 0; negative predictions (vehicle already past)
/// are clamped to 0 as well.
pub fn convert_departure(dto: &DepartureDto, stop_name: &str) -> Departure {
    let route = dto.route.as_ref();
    let minutes = dto.expected_mins.unwrap_or(0).clamp(0, i64::from(u32::MAX));

    Departure {
        minutes_until_arrival: minutes as u32,
        route_code: route
            .and_then(|r| r.route_short_name.clone())
            .unwrap_or_else(|| UNKNOWN_ROUTE.to_string()),
        direction: dto.headsign.as_deref().and_then(extract_direction),
        badge_color: normalize_color(
            route.and_then(|r| r.route_color.as_deref()),
            DEFAULT_BADGE_COLOR,
        ),
        badge_text_color: normalize_color(
            route.and_then(|r| r.route_text_color.as_deref()),
            DEFAULT_BADGE_TEXT_COLOR,
        ),
        stop_name: stop_name.to_string(),
    }
}

/// Convert an API stop, shortening its name for display.
pub fn convert_stop(dto: &StopDto) -> Stop {
    Stop::new(dto.stop_id.clone(), &dto.stop_name)
}
