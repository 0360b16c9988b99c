//! Geographic coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair as returned by the geocoder.
///
/// Values are kept as the provider's decimal strings so they reach the
/// transit API without float reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: String,
    pub longitude: String,
}

impl Coordinate {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// Build from floating point degrees.
    pub fn from_degrees(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude.to_string(), longitude.to_string())
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_degrees_display() {
        let c = Coordinate::from_degrees(40.5, -88.25);
        assert_eq!(c.to_string(), "(40.5, -88.25)");
    }
}
