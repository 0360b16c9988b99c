//! Disk-based cache: one JSON file per key.

use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

use super::{Cache, CacheError, digest};

/// Longest key prefix kept in a file name.
const MAX_NAME_PREFIX: usize = 80;

/// Hex digits of the key digest appended to a file name.
const NAME_DIGEST_LEN: usize = 16;

/// A cache file's contents.
#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    /// Full key, checked on load in case two keys map to the same file.
    key: String,
    /// Unix timestamp when the entry was written.
    cached_at_secs: u64,
    /// How long the entry stays valid.
    ttl_secs: u64,
    /// The cached value.
    value: String,
}

/// Configuration for the disk cache.
#[derive(Debug, Clone)]
pub struct FileCacheConfig {
    /// Directory holding the cache files.
    pub dir: PathBuf,
}

impl FileCacheConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Default for FileCacheConfig {
    fn default() -> Self {
        // Default to a cache directory under the current directory
        Self::new(".board_cache")
    }
}

/// Disk cache for board data.
#[derive(Debug, Clone)]
pub struct FileCache {
    config: FileCacheConfig,
}

impl FileCache {
    pub fn new(config: FileCacheConfig) -> Self {
        Self { config }
    }

    /// Path of the file holding `key`.
    fn path_for(&self, key: &str) -> PathBuf {
        let prefix: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .take(MAX_NAME_PREFIX)
            .collect();

        let hash = digest(key);

        self.config
            .dir
            .join(format!("{prefix}-{}.json", &hash[..NAME_DIGEST_LEN]))
    }

    /// Try to load a value.
    ///
    /// Returns `None` if the file doesn't exist, is invalid, belongs to a
    /// different key, or has expired. Expired files are deleted.
    pub fn load(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        let contents = std::fs::read_to_string(&path).ok()?;
        let entry: StoredEntry = serde_json::from_str(&contents).ok()?;

        if entry.key != key {
            return None;
        }

        let now = unix_now().ok()?;
        let age_secs = now.saturating_sub(entry.cached_at_secs);
        if age_secs >= entry.ttl_secs {
            if let Err(e) = std::fs::remove_file(&path) {
                tracing::debug!(path = %path.display(), error = %e, "failed to remove expired cache file");
            }
            return None;
        }

        Some(entry.value)
    }

    /// Write a value to disk.
    ///
    /// Creates the cache directory if it doesn't exist.
    pub fn save(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let entry = StoredEntry {
            key: key.to_string(),
            cached_at_secs: unix_now()?,
            ttl_secs: ttl.as_secs(),
            value: value.to_string(),
        };

        if !self.config.dir.as_os_str().is_empty() && !self.config.dir.exists() {
            std::fs::create_dir_all(&self.config.dir)?;
        }

        let json = serde_json::to_string(&entry)?;
        std::fs::write(self.path_for(key), json)?;

        Ok(())
    }
}

impl Cache for FileCache {
    async fn get(&self, key: &str) -> Option<String> {
        self.load(key)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) {
        if let Err(e) = self.save(key, &value, ttl) {
            tracing::warn!(key, error = %e, "failed to write cache entry");
        }
    }
}

fn unix_now() -> Result<u64, CacheError> {
    Ok(SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_err(|_| CacheError::Clock)?
        .as_secs())
}
