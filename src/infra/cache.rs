//! Cache stores.
//!
//! Values are stored as JSON strings with a per-entry TTL. Two stores are
//! provided: an in-process map and Redis.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client, RedisError};
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::config::MAX_CACHE_KEY_LENGTH;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Cache failures. Callers decide whether a failure is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    #[error("Cache backend error: {0}")]
    Backend(String),

    #[error("Cache serialization error: {0}")]
    Serialization(String),
}

impl From<RedisError> for CacheError {
    fn from(e: RedisError) -> Self {
        CacheError::Backend(e.to_string())
    }
}

impl From<serde_json::Error> for CacheError {
    fn from(e: serde_json::Error) -> Self {
        CacheError::Serialization(e.to_string())
    }
}

/// Result type alias for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// Key/value cache with expiring entries.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get a value; `None` when absent or expired
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Store a value for `ttl`
    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()>;
}

// =============================================================================
// In-process cache
// =============================================================================

struct Entry {
    value: String,
    expires_at: Instant,
}

/// In-process cache.
///
/// Rejects the same keys memcached does: longer than 250 bytes or
/// containing whitespace or control characters.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn validate_key(key: &str) -> CacheResult<()> {
    if key.is_empty()
        || key.len() > MAX_CACHE_KEY_LENGTH
        || key.chars().any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(CacheError::InvalidKey(key.to_string()));
    }
    Ok(())
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        validate_key(key)?;
        let mut entries = self.entries.lock().await;

        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        validate_key(key)?;
        let now = Instant::now();
        let mut entries = self.entries.lock().await;

        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_string(),
            Entry {
                value,
                expires_at: now + ttl,
            },
        );
        Ok(())
    }
}

// =============================================================================
// Redis cache
// =============================================================================

/// Redis cache wrapper with connection pooling.
#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    /// Connect to Redis.
    pub async fn connect(url: &str) -> CacheResult<Self> {
        let client = Client::open(url)?;
        let connection = ConnectionManager::new(client).await?;

        tracing::info!("Redis cache connected");

        Ok(Self { connection })
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: String, ttl: Duration) -> CacheResult<()> {
        let mut conn = self.connection.clone();
        // SETEX rejects a zero expiry
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::new();
        cache
            .set("enrollment.course.details.a", "{}".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        let value = cache.get("enrollment.course.details.a").await.unwrap();
        assert_eq!(value.as_deref(), Some("{}"));
        assert!(cache.get("missing").await.unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entries_expire() {
        let cache = MemoryCache::new();
        cache
            .set("key", "value".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        tokio::time::advance(Duration::from_secs(59)).await;
        assert!(cache.get("key").await.unwrap().is_some());

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(cache.get("key").await.unwrap().is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_purges_expired_entries() {
        let cache = MemoryCache::new();
        for key in ["a", "b", "c"] {
            cache
                .set(key, "v".to_string(), Duration::from_secs(1))
                .await
                .unwrap();
        }
        assert_eq!(cache.len().await, 3);

        tokio::time::advance(Duration::from_secs(2)).await;
        cache
            .set("d", "v".to_string(), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(cache.len().await, 1);
        assert!(cache.get("d").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_rejects_invalid_keys() {
        let cache = MemoryCache::new();
        let long_key = "k".repeat(MAX_CACHE_KEY_LENGTH + 1);

        for key in ["", "has space", "tab\tkey", long_key.as_str()] {
            assert!(matches!(cache.get(key).await, Err(CacheError::InvalidKey(_))));
            assert!(matches!(
                cache.set(key, "v".to_string(), Duration::from_secs(1)).await,
                Err(CacheError::InvalidKey(_))
            ));
        }
    }
}
