//! Transport-level response caching.

use std::sync::Arc;

use crate::cache::{Cache, digest};

use super::error::HttpError;
use super::{HttpClient, HttpRequest, HttpResponse};

/// HTTP client that reuses successful responses for their TTL hint.
///
/// Only requests carrying a TTL hint are cached, and only responses the
/// request accepts (see [`HttpRequest::is_cacheable`]) are stored. Keys are
/// a digest of the full URL, so query credentials never reach the store.
pub struct CachedHttpClient<H, C> {
    inner: H,
    cache: Arc<C>,
}

impl<H, C> CachedHttpClient<H, C> {
    pub fn new(inner: H, cache: Arc<C>) -> Self {
        Self { inner, cache }
    }
}

impl<H: Clone, C> Clone for CachedHttpClient<H, C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            cache: Arc::clone(&self.cache),
        }
    }
}

/// Cache key for a transport response.
fn transport_cache_key(url: &str) -> String {
    format!("http_{}", digest(url))
}

impl<H: HttpClient, C: Cache> HttpClient for CachedHttpClient<H, C> {
    async fn get(&self, request: &HttpRequest) -> Result<HttpResponse, HttpError> {
        let Some(ttl) = request.cache_ttl else {
            return self.inner.get(request).await;
        };

        let key = transport_cache_key(&request.url);
        if let Some(body) = self.cache.get(&key).await {
            tracing::debug!(%key, "transport cache hit");
            return Ok(HttpResponse::new(200, body));
        }

        let response = self.inner.get(request).await?;
        if request.is_cacheable(&response) {
            self.cache.set(&key, response.body.clone(), ttl).await;
        }

        Ok(response)
    }
}
