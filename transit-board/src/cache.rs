//! Key-value caches with per-entry TTL.
//!
//! The board pipeline never talks to a particular store. It reads and
//! writes JSON strings through the [`Cache`] trait, and every caller picks
//! its own TTL: stop lists live for an hour, departure lists for a minute.
//!
//! Two stores are provided: [`MemoryCache`] (moka, process-local) and
//! [`FileCache`] (one JSON file per key, survives restarts).

mod file;

use std::future::Future;
use std::time::{Duration, Instant};

use moka::Expiry;
use moka::future::Cache as MokaCache;
use sha2::{Digest, Sha256};

pub use file::{FileCache, FileCacheConfig};

/// Errors from cache stores.
///
/// The [`Cache`] trait swallows these after logging; they surface only
/// from store-specific methods.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("system time before unix epoch")]
    Clock,
}

/// A string key-value store with per-entry expiry.
///
/// A failed `set` is not an error for callers: the worst outcome of a lost
/// write is one extra upstream request.
pub trait Cache: Send + Sync {
    /// Return the stored value if present and not expired.
    fn get(&self, key: &str) -> impl Future<Output = Option<String>> + Send;

    /// Store `value` under `key` for `ttl`.
    fn set(&self, key: &str, value: String, ttl: Duration) -> impl Future<Output = ()> + Send;
}

/// Hex SHA-256 of `input`.
pub fn digest(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Configuration for the in-memory cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { max_capacity: 1000 }
    }
}

/// A cached value together with the TTL it was stored with.
#[derive(Debug, Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

/// Expires each entry after the TTL it was inserted with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, entry: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(entry.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        entry: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(entry.ttl)
    }
}

/// Process-local cache backed by moka.
pub struct MemoryCache {
    entries: MokaCache<String, Entry>,
}

impl MemoryCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let entries = MokaCache::builder()
            .max_capacity(config.max_capacity)
            .expire_after(PerEntryTtl)
            .build();

        Self { entries }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}

impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).await.map(|entry| entry.value)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) {
        self.entries.insert(key.to_string(), Entry { value, ttl }).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn digest_is_stable_hex() {
        assert_eq!(
            digest("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_ne!(digest("cumtd_IT:1"), digest("cumtd_IT_1"));
    }

    #[tokio::test]
    async fn set_then_get() {
        let cache = MemoryCache::default();
        cache
            .set("cumtd_IT:1", "[]".to_string(), Duration::from_secs(60))
            .await;
        assert_eq!(cache.get("cumtd_IT:1").await.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn missing_key() {
        let cache = MemoryCache::default();
        assert!(cache.get("geo_nothing").await.is_none());
    }

    #[tokio::test]
    async fn overwrite_replaces_value() {
        let cache = MemoryCache::default();
        cache.set("k", "old".to_string(), Duration::from_secs(60)).await;
        cache.set("k", "new".to_string(), Duration::from_secs(60)).await;
        assert_eq!(cache.get("k").await.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn entry_expires_after_its_ttl() {
        let cache = MemoryCache::default();
        cache.set("short", "v".to_string(), Duration::from_millis(50)).await;
        cache.set("long", "v".to_string(), Duration::from_secs(60)).await;

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(cache.get("short").await.is_none());
        assert!(cache.get("long").await.is_some());
    }
}
