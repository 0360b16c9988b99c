//! Geocoding HTTP client.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::Coordinate;
use crate::http::{HttpClient, HttpError, HttpRequest};

use super::query::{encode_query, with_location_hint};

/// Default geocoding endpoint.
const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Identifying User-Agent required by the geocoding provider.
const DEFAULT_USER_AGENT: &str = "TidbytCUMTDApp/1.0";

/// Geocoder results rarely change; cache them for a day.
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// One geocoding match.
#[derive(Debug, Clone, Deserialize)]
struct GeocodeResult {
    lat: Degrees,
    lon: Degrees,
}

/// Degrees as the provider sends them: normally a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Degrees {
    Text(String),
    Number(f64),
}

impl Degrees {
    fn into_string(self) -> String {
        match self {
            Degrees::Text(s) => s,
            Degrees::Number(n) => n.to_string(),
        }
    }
}

/// Configuration for the geocoder.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Search endpoint URL
    pub base_url: String,
    /// Value of the User-Agent header
    pub user_agent: String,
    /// Transport cache hint for geocoding responses
    pub cache_ttl: Duration,
}

impl GeocoderConfig {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves free-text addresses to coordinates.
#[derive(Debug, Clone)]
pub struct Geocoder<H> {
    http: H,
    config: GeocoderConfig,
}

impl<H: HttpClient> Geocoder<H> {
    pub fn new(http: H, config: GeocoderConfig) -> Self {
        Self { http, config }
    }

    /// Resolve `address` to the provider's best match.
    ///
    /// Returns `None` on any failure or when nothing matched. Makes at most
    /// one request and never retries.
    pub async fn resolve(&self, address: &str) -> Option<Coordinate> {
        match self.lookup(address).await {
            Ok(coordinate) => coordinate,
            Err(e) => {
                tracing::warn!(address, error = %e, "geocoding failed");
                None
            }
        }
    }

    async fn lookup(&self, address: &str) -> Result<Option<Coordinate>, HttpError> {
        let query = with_location_hint(address);
        let url = format!(
            "{}?q={}&format=json&limit=1",
            self.config.base_url,
            encode_query(&query)
        );
        let request = HttpRequest::get(url)
            .header("User-Agent", self.config.user_agent.as_str())
            .cache_ttl(self.config.cache_ttl);

        let response = self.http.get(&request).await?;
        if !response.is_ok() {
            tracing::warn!(address, status = response.status, "geocoder returned non-200");
            return Ok(None);
        }

        let results: Vec<GeocodeResult> = response.json()?;
        let Some(first) = results.into_iter().next() else {
            tracing::debug!(address, "geocoder found no match");
            return Ok(None);
        };

        Ok(Some(Coordinate::new(
            first.lat.into_string(),
            first.lon.into_string(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::MockHttpClient;

    const BASE: &str = "https://geo.test/search";

    fn geocoder(mock: &MockHttpClient) -> Geocoder<MockHttpClient> {
        Geocoder::new(mock.clone(), GeocoderConfig::new().with_base_url(BASE))
    }

    #[test]
    fn config_defaults() {
        let config = GeocoderConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_agent, "TidbytCUMTDApp/1.0");
        assert_eq!(config.cache_ttl, Duration::from_secs(86400));
    }

    #[tokio::test]
    async fn resolves_first_result() {
        let mock = MockHttpClient::new().with_response(
            "/search",
            200,
            r#"[{"lat":"40.1106","lon":"-88.2284"},{"lat":"1","lon":"2"}]"#,
        );

        let coordinate = geocoder(&mock).resolve("601 E John St").await.unwrap();
        assert_eq!(coordinate, Coordinate::new("40.1106", "-88.2284"));
    }

    #[tokio::test]
    async fn request_appends_hint_and_encodes() {
        let mock = MockHttpClient::new().with_response("/search", 200, "[]");
        geocoder(&mock).resolve("601 E John St").await;

        let requests = mock.requests().await;
        assert_eq!(
            requests[0].url,
            "https://geo.test/search?q=601%20E%20John%20St%2C%20Champaign%2C%20IL&format=json&limit=1"
        );
        assert_eq!(
            requests[0].headers,
            vec![("User-Agent".to_string(), "TidbytCUMTDApp/1.0".to_string())]
        );
        assert_eq!(requests[0].cache_ttl, Some(Duration::from_secs(86400)));
    }

    #[tokio::test]
    async fn local_address_is_not_suffixed() {
        let mock = MockHttpClient::new().with_response("/search", 200, "[]");
        geocoder(&mock).resolve("601 E John St, Urbana, IL").await;

        let requests = mock.requests().await;
        assert_eq!(
            requests[0].url,
            "https://geo.test/search?q=601%20E%20John%20St%2C%20Urbana%2C%20IL&format=json&limit=1"
        );
    }

    #[tokio::test]
    async fn empty_result_is_none() {
        let mock = MockHttpClient::new().with_response("/search", 200, "[]");
        assert!(geocoder(&mock).resolve("nowhere").await.is_none());
    }

    #[tokio::test]
    async fn non_200_is_none_without_retry() {
        let mock = MockHttpClient::new().with_response("/search", 429, "slow down");
        assert!(geocoder(&mock).resolve("601 E John St").await.is_none());
        assert_eq!(mock.request_count().await, 1);
    }

    #[tokio::test]
    async fn malformed_body_is_none() {
        let mock = MockHttpClient::new().with_response("/search", 200, "{not json");
        assert!(geocoder(&mock).resolve("601 E John St").await.is_none());
    }

    #[tokio::test]
    async fn numeric_degrees_are_accepted() {
        let mock = MockHttpClient::new().with_response("/search", 200, r#"[{"lat":40.5,"lon":-88.25}]"#);
        let coordinate = geocoder(&mock).resolve("x").await.unwrap();
        assert_eq!(coordinate, Coordinate::new("40.5", "-88.25"));
    }
}
