//! Per-stop departure fetching with caching.

use std::sync::Arc;

use crate::cache::Cache;
use crate::domain::{Departure, RouteFilter};
use crate::http::HttpClient;
use crate::mtd::{MtdClient, convert_departure};

use super::config::BoardConfig;

/// Cache key for a stop's departure list.
///
/// Keyed by stop only, so any address whose stop set includes this stop
/// reuses the entry.
pub fn departures_cache_key(stop_id: &str) -> String {
    format!("cumtd_{stop_id}")
}

/// Fetches upcoming departures for one stop.
pub struct DepartureFetcher<H, C> {
    mtd: MtdClient<H>,
    cache: Arc<C>,
    config: BoardConfig,
}

impl<H: HttpClient, C: Cache> DepartureFetcher<H, C> {
    pub fn new(mtd: MtdClient<H>, cache: Arc<C>, config: BoardConfig) -> Self {
        Self { mtd, cache, config }
    }

    /// Departures at `stop_id`, attributed to `stop_name` and filtered.
    ///
    /// The cache holds the unfiltered list; the stop name and the filter
    /// are applied on every read since both belong to the current request.
    pub async fn fetch_for(
        &self,
        api_key: &str,
        stop_id: &str,
        stop_name: &str,
        routes: &RouteFilter,
    ) -> Vec<Departure> {
        let key = departures_cache_key(stop_id);

        if let Some(cached) = self.cache.get(&key).await {
            match serde_json::from_str::<Vec<Departure>>(&cached) {
                Ok(mut departures) => {
                    tracing::debug!(stop_id, count = departures.len(), "departures cache hit");
                    for departure in &mut departures {
                        departure.stop_name = stop_name.to_string();
                    }
                    return routes.apply(departures);
                }
                Err(e) => tracing::warn!(stop_id, error = %e, "discarding unreadable departures"),
            }
        }

        let dtos = match self
            .mtd
            .departures_by_stop(api_key, stop_id, self.config.preview_mins)
            .await
        {
            Ok(dtos) => dtos,
            Err(e) => {
                tracing::warn!(stop_id, error = %e, "departure lookup failed");
                return Vec::new();
            }
        };

        let departures: Vec<Departure> = dtos
            .iter()
            .map(|dto| convert_departure(dto, stop_name))
            .collect();

        match serde_json::to_string(&departures) {
            Ok(json) => {
                self.cache
                    .set(&key, json, self.config.departures_ttl())
                    .await
            }
            Err(e) => tracing::warn!(stop_id, error = %e, "failed to encode departures"),
        }

        routes.apply(departures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fixtures::*;
    use crate::cache::MemoryCache;
    use crate::http::MockHttpClient;

    fn fetcher(mock: &MockHttpClient, cache: Arc<MemoryCache>) -> DepartureFetcher<MockHttpClient, MemoryCache> {
        DepartureFetcher::new(MtdClient::new(mock.clone(), mtd_config()), cache, BoardConfig::default())
    }

    fn routes(departures: &[Departure]) -> Vec<String> {
        departures.iter().map(Departure::route_label).collect()
    }

    #[tokio::test]
    async fn converts_departures() {
        let mock = john_st_mock();
        let departures = fetcher(&mock, memory_cache())
            .fetch_for("key", "KRANNERT", "Krannert Dr", &RouteFilter::all())
            .await;

        assert_eq!(routes(&departures), vec!["22N", "22S", "5E", "12W"]);
        assert!(departures.iter().all(|d| d.stop_name == "Krannert Dr"));
        assert_eq!(departures[2].badge_color, "#008063");
        assert_eq!(departures[2].badge_text_color, "#FFFFFF");
    }

    #[tokio::test]
    async fn request_uses_preview_window() {
        let mock = john_st_mock();
        fetcher(&mock, memory_cache())
            .fetch_for("key", "IT", "IL Terminal", &RouteFilter::all())
            .await;

        let requests = mock.requests().await;
        assert_eq!(
            requests[0].url,
            "https://mtd.test/json/getdeparturesbystop?key=key&stop_id=IT&pt=30"
        );
    }

    #[tokio::test]
    async fn filter_applies_but_cache_keeps_everything() {
        let mock = john_st_mock();
        let cache = memory_cache();
        let filter = RouteFilter::from_codes(["22", "1"]);

        let departures = fetcher(&mock, cache.clone())
            .fetch_for("key", "KRANNERT", "Krannert Dr", &filter)
            .await;
        assert_eq!(routes(&departures), vec!["22N", "22S"]);

        let cached: Vec<Departure> =
            serde_json::from_str(&cache.get("cumtd_KRANNERT").await.unwrap()).unwrap();
        assert_eq!(routes(&cached), vec!["22N", "22S", "5E", "12W"]);
    }

    #[tokio::test]
    async fn cache_hit_skips_http_and_reapplies_context() {
        let mock = john_st_mock();
        let cache = memory_cache();
        let fetcher = fetcher(&mock, cache);

        fetcher
            .fetch_for("key", "KRANNERT", "Krannert Dr", &RouteFilter::all())
            .await;
        assert_eq!(mock.request_count().await, 1);

        let departures = fetcher
            .fetch_for("key", "KRANNERT", "Krannert Center", &RouteFilter::parse("5"))
            .await;

        assert_eq!(mock.request_count().await, 1);
        assert_eq!(routes(&departures), vec!["5E"]);
        assert_eq!(departures[0].stop_name, "Krannert Center");
    }

    #[tokio::test]
    async fn filter_is_case_insensitive() {
        let mock = MockHttpClient::new().with_response(
            "getdeparturesbystop",
            200,
            r#"{"departures":[
                {"expected_mins":3,"headsign":"Teal","route":{"route_short_name":"Teal"}},
                {"expected_mins":5,"headsign":"Gold","route":{"route_short_name":"Gold"}}
            ]}"#,
        );

        let departures = fetcher(&mock, memory_cache())
            .fetch_for("key", "X", "X", &RouteFilter::parse("teal"))
            .await;

        assert_eq!(routes(&departures), vec!["Teal"]);
    }

    #[tokio::test]
    async fn upstream_failure_is_empty_and_uncached() {
        let mock = MockHttpClient::new().with_response("getdeparturesbystop", 500, "");
        let cache = memory_cache();

        let departures = fetcher(&mock, cache.clone())
            .fetch_for("key", "IT", "IL Terminal", &RouteFilter::all())
            .await;

        assert!(departures.is_empty());
        assert!(cache.get("cumtd_IT").await.is_none());
    }

    #[test]
    fn cache_key() {
        assert_eq!(departures_cache_key("IT:1"), "cumtd_IT:1");
    }
}
