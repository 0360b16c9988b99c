//! Transit API HTTP client.
//!
//! Wraps the three endpoints the board needs. The API key is passed per
//! call so one client can serve requests made with different keys.

use std::time::Duration;

use crate::domain::Coordinate;
use crate::http::{HttpClient, HttpRequest, HttpResponse};

use super::error::MtdError;
use super::types::{ApiStatus, DepartureDto, DeparturesResponse, StatusOnly, StopDto, StopsResponse};

/// Default base URL for the transit API.
const DEFAULT_BASE_URL: &str = "https://developer.mtd.org/api/v2.2/json";

/// Configuration for the transit API client.
#[derive(Debug, Clone)]
pub struct MtdConfig {
    /// Base URL for the API
    pub base_url: String,
    /// Transport cache hint for nearby-stop lookups
    pub stops_cache_ttl: Duration,
    /// Transport cache hint for departure lookups
    pub departures_cache_ttl: Duration,
}

impl MtdConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            stops_cache_ttl: Duration::from_secs(5 * 60),
            departures_cache_ttl: Duration::from_secs(60),
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for MtdConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Client for the transit API.
#[derive(Debug, Clone)]
pub struct MtdClient<H> {
    http: H,
    config: MtdConfig,
}

impl<H: HttpClient> MtdClient<H> {
    pub fn new(http: H, config: MtdConfig) -> Self {
        Self { http, config }
    }

    /// Stops nearest to `coordinate`, closest first.
    pub async fn stops_by_lat_lon(
        &self,
        api_key: &str,
        coordinate: &Coordinate,
        count: usize,
    ) -> Result<Vec<StopDto>, MtdError> {
        let url = format!(
            "{}/getstopsbylatlon?key={}&lat={}&lon={}&count={}",
            self.config.base_url, api_key, coordinate.latitude, coordinate.longitude, count
        );
        let request = HttpRequest::get(url)
            .cache_ttl(self.config.stops_cache_ttl)
            .cache_if(status_is_ok);

        let response = self.send(&request).await?;
        let body: StopsResponse = response.json()?;
        check_status(body.status.as_ref())?;

        body.stops.ok_or(MtdError::MissingField("stops"))
    }

    /// Upcoming departures at `stop_id` within `preview_mins`.
    pub async fn departures_by_stop(
        &self,
        api_key: &str,
        stop_id: &str,
        preview_mins: u32,
    ) -> Result<Vec<DepartureDto>, MtdError> {
        let url = format!(
            "{}/getdeparturesbystop?key={}&stop_id={}&pt={}",
            self.config.base_url, api_key, stop_id, preview_mins
        );
        let request = HttpRequest::get(url)
            .cache_ttl(self.config.departures_cache_ttl)
            .cache_if(status_is_ok);

        let response = self.send(&request).await?;
        let body: DeparturesResponse = response.json()?;
        check_status(body.status.as_ref())?;

        body.departures.ok_or(MtdError::MissingField("departures"))
    }

    /// Every stop in the system.
    pub async fn all_stops(&self, api_key: &str) -> Result<Vec<StopDto>, MtdError> {
        let url = format!("{}/getstops?key={}", self.config.base_url, api_key);
        let request = HttpRequest::get(url);

        let response = self.send(&request).await?;
        let body: StopsResponse = response.json()?;
        check_status(body.status.as_ref())?;

        body.stops.ok_or(MtdError::MissingField("stops"))
    }

    /// Stops whose name contains `query`, case-insensitively.
    pub async fn search_stops(&self, api_key: &str, query: &str) -> Result<Vec<StopDto>, MtdError> {
        let needle = query.to_lowercase();
        let stops = self.all_stops(api_key).await?;

        Ok(stops
            .into_iter()
            .filter(|s| s.stop_name.to_lowercase().contains(&needle))
            .collect())
    }

    async fn send(&self, request: &HttpRequest) -> Result<HttpResponse, MtdError> {
        let response = self.http.get(request).await?;

        if !response.is_ok() {
            return Err(MtdError::Api {
                status: response.status,
                message: response.body.chars().take(200).collect(),
            });
        }

        Ok(response)
    }
}

/// Reject responses whose status block reports a failure.
///
/// A missing block or missing code is accepted.
fn check_status(status: Option<&ApiStatus>) -> Result<(), MtdError> {
    match status {
        Some(ApiStatus {
            code: Some(code),
            msg,
        }) if *code != 200 => Err(MtdError::Status {
            code: *code,
            message: msg.clone().unwrap_or_else(|| "Unknown error".to_string()),
        }),
        _ => Ok(()),
    }
}

/// Whether a 200 body is a successful API response worth caching.
fn status_is_ok(body: &str) -> bool {
    serde_json::from_str::<StatusOnly>(body)
        .is_ok_and(|parsed| check_status(parsed.status.as_ref()).is_ok())
}
