//! One request cycle, end to end.

use std::sync::Arc;

use crate::cache::Cache;
use crate::domain::Departure;
use crate::geocode::{Geocoder, GeocoderConfig};
use crate::http::HttpClient;
use crate::mtd::{MtdClient, MtdConfig};

use super::aggregate::aggregate;
use super::config::BoardConfig;
use super::error::BoardError;
use super::fetcher::DepartureFetcher;
use super::locator::StopLocator;
use super::request::BoardRequest;

/// The departure board pipeline.
///
/// Geocode → nearby stops → per-stop departures → dedup and rank. Every
/// upstream failure degrades to fewer results; the only errors are the
/// user-visible ones in [`BoardError`].
pub struct DepartureBoard<H, C> {
    locator: StopLocator<H, C>,
    fetcher: DepartureFetcher<H, C>,
    config: BoardConfig,
}

impl<H: HttpClient + Clone, C: Cache> DepartureBoard<H, C> {
    pub fn new(
        http: H,
        cache: Arc<C>,
        geocoder: GeocoderConfig,
        mtd: MtdConfig,
        config: BoardConfig,
    ) -> Self {
        let mtd = MtdClient::new(http.clone(), mtd);
        let geocoder = Geocoder::new(http, geocoder);

        Self {
            locator: StopLocator::new(geocoder, mtd.clone(), Arc::clone(&cache), config.clone()),
            fetcher: DepartureFetcher::new(mtd, cache, config.clone()),
            config,
        }
    }
}

impl<H: HttpClient, C: Cache> DepartureBoard<H, C> {
    /// Validate raw settings and run one cycle.
    ///
    /// Missing settings are reported before any upstream request is made.
    pub async fn run(
        &self,
        api_key: Option<&str>,
        address: Option<&str>,
        routes: Option<&str>,
    ) -> Result<Vec<Departure>, BoardError> {
        let request = BoardRequest::new(api_key, address, routes)?;
        self.departures(&request).await
    }

    /// Departures to display for a validated request, soonest first.
    pub async fn departures(&self, request: &BoardRequest) -> Result<Vec<Departure>, BoardError> {
        let stops = self
            .locator
            .stops_for_address(&request.api_key, &request.address)
            .await;

        if stops.is_empty() {
            tracing::info!(address = %request.address, "no stops found");
            return Err(BoardError::NoStops);
        }

        let departures = aggregate(
            &self.fetcher,
            &request.api_key,
            &stops,
            &request.routes,
            self.config.display_capacity,
        )
        .await;

        tracing::debug!(
            stops = stops.len(),
            departures = departures.len(),
            "board cycle complete"
        );

        Ok(departures)
    }

    /// Access the departure fetcher for single-stop lookups.
    pub fn fetcher(&self) -> &DepartureFetcher<H, C> {
        &self.fetcher
    }
}
