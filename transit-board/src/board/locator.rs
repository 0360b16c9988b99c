//! Address → nearby stops.
//!
//! Geocoding and the stop lookup are fused behind one cache entry per
//! address: the coordinate itself is never cached here, only the final
//! stop list. The geocoder's raw response is cached separately, for longer,
//! by the transport.

use std::sync::Arc;

use crate::cache::Cache;
use crate::domain::{Coordinate, Stop};
use crate::geocode::{Geocoder, address_cache_key};
use crate::http::HttpClient;
use crate::mtd::{MtdClient, convert_stop};

use super::config::BoardConfig;

/// Finds the stops closest to an address.
pub struct StopLocator<H, C> {
    geocoder: Geocoder<H>,
    mtd: MtdClient<H>,
    cache: Arc<C>,
    config: BoardConfig,
}

impl<H: HttpClient, C: Cache> StopLocator<H, C> {
    pub fn new(geocoder: Geocoder<H>, mtd: MtdClient<H>, cache: Arc<C>, config: BoardConfig) -> Self {
        Self {
            geocoder,
            mtd,
            cache,
            config,
        }
    }

    /// Stops nearest to `address`, closest first.
    ///
    /// A cached list is returned without any upstream call. Empty results
    /// are not cached, so a failed lookup is retried on the next cycle.
    pub async fn stops_for_address(&self, api_key: &str, address: &str) -> Vec<Stop> {
        let key = address_cache_key(address, self.config.address_key_chars);

        if let Some(cached) = self.cache.get(&key).await {
            match serde_json::from_str::<Vec<Stop>>(&cached) {
                Ok(stops) => {
                    tracing::debug!(%key, count = stops.len(), "stop list cache hit");
                    return stops;
                }
                Err(e) => tracing::warn!(%key, error = %e, "discarding unreadable stop list"),
            }
        }

        let Some(coordinate) = self.geocoder.resolve(address).await else {
            return Vec::new();
        };

        let stops = self.nearby_stops(api_key, &coordinate).await;
        if !stops.is_empty() {
            match serde_json::to_string(&stops) {
                Ok(json) => self.cache.set(&key, json, self.config.stops_ttl()).await,
                Err(e) => tracing::warn!(%key, error = %e, "failed to encode stop list"),
            }
        }

        stops
    }

    /// Stops nearest to `coordinate`, in the order the API reports them.
    pub async fn nearby_stops(&self, api_key: &str, coordinate: &Coordinate) -> Vec<Stop> {
        match self
            .mtd
            .stops_by_lat_lon(api_key, coordinate, self.config.stop_count)
            .await
        {
            Ok(dtos) => dtos
                .iter()
                .take(self.config.stop_count)
                .map(convert_stop)
                .collect(),
            Err(e) => {
                tracing::warn!(%coordinate, error = %e, "nearby stop lookup failed");
                Vec::new()
            }
        }
    }
}
