//! Departure records shown on the board.

use serde::{Deserialize, Serialize};

use super::Direction;

/// Badge colour used when the feed omits `route_color`.
pub const DEFAULT_BADGE_COLOR: &str = "1E88E5";

/// Badge text colour used when the feed omits `route_text_color`.
pub const DEFAULT_BADGE_TEXT_COLOR: &str = "FFFFFF";

/// A single predicted departure from a stop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    /// Minutes until the vehicle arrives. Zero means due now.
    pub minutes_until_arrival: u32,

    /// Route short name, e.g. `"22"` or `"Teal"`.
    pub route_code: String,

    /// Direction marker parsed from the headsign, if any.
    pub direction: Option<Direction>,

    /// Route badge background, `#`-prefixed hex.
    pub badge_color: String,

    /// Route badge foreground, `#`-prefixed hex.
    pub badge_text_color: String,

    /// Display name of the stop this departure leaves from.
    pub stop_name: String,
}

impl Departure {
    /// Key used to collapse the same route+direction across stops.
    ///
    /// The route code and direction letter are joined without a separator,
    /// so route `1` northbound and a route literally named `1N` share a key.
    pub fn dedup_key(&self) -> String {
        let mut key = self.route_code.clone();
        if let Some(direction) = self.direction {
            key.push(direction.as_char());
        }
        key
    }

    /// Route code with its direction letter, as printed on the badge.
    pub fn route_label(&self) -> String {
        self.dedup_key()
    }

    /// Arrival time as shown to riders.
    pub fn minutes_label(&self) -> String {
        match self.minutes_until_arrival {
            0 => "Due".to_string(),
            n => format!("{n} min"),
        }
    }

    #[cfg(test)]
    pub(crate) fn test(route_code: &str, minutes: u32) -> Self {
        Self {
            minutes_until_arrival: minutes,
            route_code: route_code.to_string(),
            direction: None,
            badge_color: format!("#{DEFAULT_BADGE_COLOR}"),
            badge_text_color: format!("#{DEFAULT_BADGE_TEXT_COLOR}"),
            stop_name: "Test Stop".to_string(),
        }
    }
}

/// Normalize a hex colour from the feed to `#RRGGBB` form.
///
/// Missing or blank values fall back to `default`. A leading `#` is added
/// only if absent.
pub fn normalize_color(raw: Option<&str>, default: &str) -> String {
    let color = raw.map(str::trim).filter(|c| !c.is_empty()).unwrap_or(default);
    if color.starts_with('#') {
        color.to_string()
    } else {
        format!("#{color}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_key_joins_route_and_direction() {
        let mut d = Departure::test("22", 3);
        assert_eq!(d.dedup_key(), "22");

        d.direction = Some(Direction::try_from('N').unwrap());
        assert_eq!(d.dedup_key(), "22N");
    }

    #[test]
    fn dedup_key_collides_without_separator() {
        let mut a = Departure::test("1", 3);
        a.direction = Some(Direction::try_from('N').unwrap());
        let b = Departure::test("1N", 7);
        assert_eq!(a.dedup_key(), b.dedup_key());
    }

    #[test]
    fn minutes_label() {
        assert_eq!(Departure::test("5", 0).minutes_label(), "Due");
        assert_eq!(Departure::test("5", 1).minutes_label(), "1 min");
        assert_eq!(Departure::test("5", 12).minutes_label(), "12 min");
    }

    #[test]
    fn normalize_color_adds_hash() {
        assert_eq!(normalize_color(Some("FF0000"), DEFAULT_BADGE_COLOR), "#FF0000");
        assert_eq!(normalize_color(Some("#00FF00"), DEFAULT_BADGE_COLOR), "#00FF00");
    }

    #[test]
    fn normalize_color_defaults() {
        assert_eq!(normalize_color(None, DEFAULT_BADGE_COLOR), "#1E88E5");
        assert_eq!(normalize_color(Some(""), DEFAULT_BADGE_TEXT_COLOR), "#FFFFFF");
    }

    #[test]
    fn serde_roundtrip_keeps_direction() {
        let mut d = Departure::test("22", 4);
        d.direction = Some(Direction::try_from('S').unwrap());
        let json = serde_json::to_string(&d).unwrap();
        assert!(json.contains("\"direction\":\"S\""));
        let back: Departure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
    }
}
