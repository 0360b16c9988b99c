//! HTTP transport for upstream APIs.
//!
//! The board only issues plain GET requests. Each request may carry a TTL
//! hint; [`CachedHttpClient`] honours it by keeping successful response
//! bodies in a [`Cache`](crate::cache::Cache), the plain clients ignore it.

mod cached;
mod client;
mod error;
mod mock;

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;

pub use cached::CachedHttpClient;
pub use client::{HttpConfig, ReqwestHttpClient};
pub use error::HttpError;
pub use mock::MockHttpClient;

/// Decides whether a 200 response body may be reused.
pub type CachePredicate = fn(&str) -> bool;

/// A GET request to an upstream API.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// Full URL including the already-encoded query string.
    pub url: String,

    /// Extra request headers.
    pub headers: Vec<(String, String)>,

    /// How long a successful response may be reused by a caching transport.
    pub cache_ttl: Option<Duration>,

    /// Extra check a response body must pass before it is cached.
    pub cache_if: Option<CachePredicate>,
}

impl HttpRequest {
    /// A GET request for `url`, no headers, no TTL hint.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            cache_ttl: None,
            cache_if: None,
        }
    }

    /// Add a request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the transport cache TTL hint.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Only cache 200 responses whose body satisfies `predicate`.
    pub fn cache_if(mut self, predicate: CachePredicate) -> Self {
        self.cache_if = Some(predicate);
        self
    }

    /// Whether a caching transport may store `response` for this request.
    pub fn is_cacheable(&self, response: &HttpResponse) -> bool {
        response.is_ok() && self.cache_if.is_none_or(|accept| accept(&response.body))
    }
}

/// Status code and body of an upstream response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the upstream answered 200 OK.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }

    /// Parse the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, HttpError> {
        serde_json::from_str(&self.body).map_err(|e| HttpError::Json {
            message: e.to_string(),
            body: Some(self.body.chars().take(500).collect()),
        })
    }
}

/// Something that can perform GET requests.
pub trait HttpClient: Send + Sync {
    fn get(&self, request: &HttpRequest) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}
