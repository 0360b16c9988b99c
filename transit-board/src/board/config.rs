//! Board pipeline configuration.

use std::time::Duration;

/// Tunables for one departure board.
#[derive(Debug, Clone)]
pub struct BoardConfig {
    /// How many nearby stops to consider.
    pub stop_count: usize,

    /// Maximum number of departures shown.
    pub display_capacity: usize,

    /// How far ahead to ask for predictions (minutes).
    pub preview_mins: u32,

    /// How long an address's stop list stays cached (seconds).
    pub stops_ttl_secs: u64,

    /// How long a stop's departure list stays cached (seconds).
    pub departures_ttl_secs: u64,

    /// Characters of the normalized address kept in its cache key.
    pub address_key_chars: usize,
}

impl BoardConfig {
    /// Returns the stop list TTL as a Duration.
    pub fn stops_ttl(&self) -> Duration {
        Duration::from_secs(self.stops_ttl_secs)
    }

    /// Returns the departure list TTL as a Duration.
    pub fn departures_ttl(&self) -> Duration {
        Duration::from_secs(self.departures_ttl_secs)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            stop_count: 5,
            display_capacity: 5,
            preview_mins: 30,
            stops_ttl_secs: 60 * 60, // 1 hour
            departures_ttl_secs: 60,
            address_key_chars: 50,
        }
    }
}
