//! Cross-stop deduplication and ranking.
//!
//! Stops arrive ordered by distance. For each route+direction only the
//! first departure seen survives, so a rider is always pointed at the
//! closest stop serving that line even if a farther stop has an earlier
//! vehicle. Survivors are then ranked by arrival time.

use std::collections::HashSet;

use crate::cache::Cache;
use crate::domain::{Departure, RouteFilter, Stop};
use crate::http::HttpClient;

use super::fetcher::DepartureFetcher;

/// Accumulates departures across stops, one per dedup key.
#[derive(Debug, Default)]
pub struct DepartureAggregate {
    seen: HashSet<String>,
    departures: Vec<Departure>,
}

impl DepartureAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one stop's departures. Call in stop distance order.
    pub fn add_stop(&mut self, departures: Vec<Departure>) {
        for departure in departures {
            if self.seen.insert(departure.dedup_key()) {
                self.departures.push(departure);
            }
        }
    }

    /// Sort by minutes until arrival and keep the first `capacity`.
    ///
    /// The sort is stable: ties keep the order they were added in.
    pub fn finish(mut self, capacity: usize) -> Vec<Departure> {
        self.departures.sort_by_key(|d| d.minutes_until_arrival);
        self.departures.truncate(capacity);
        self.departures
    }
}

/// Fetch every stop in order and combine the results.
///
/// Stops are fetched one at a time; the next request starts only after the
/// previous one has finished.
pub async fn aggregate<H: HttpClient, C: Cache>(
    fetcher: &DepartureFetcher<H, C>,
    api_key: &str,
    stops: &[Stop],
    routes: &RouteFilter,
    capacity: usize,
) -> Vec<Departure> {
    let mut aggregate = DepartureAggregate::new();

    for stop in stops {
        let departures = fetcher
            .fetch_for(api_key, &stop.stop_id, &stop.name, routes)
            .await;
        aggregate.add_stop(departures);
    }

    aggregate.finish(capacity)
}
