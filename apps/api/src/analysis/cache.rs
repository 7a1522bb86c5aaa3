//! Sentiment cache: skips repeat classifications of identical text.
//!
//! Keys are `sentiment:{sha256(text)}`. Only successful classifications are
//! stored. Cache failures are logged and bypassed; classifier errors pass
//! through untouched.

use std::sync::Arc;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{debug, warn};

use crate::analysis::sentiment::{ClassificationError, Sentiment, SentimentClassifier};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("cache backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait SentimentCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Sentiment>, CacheError>;
    async fn put(&self, key: &str, sentiment: Sentiment) -> Result<(), CacheError>;
}

pub fn cache_key(text: &str) -> String {
    format!("sentiment:{:x}", Sha256::digest(text.as_bytes()))
}

// ────────────────────────────────────────────────────────────────────────────
// Redis backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct RedisSentimentCache {
    conn: MultiplexedConnection,
    ttl_secs: u64,
}

impl RedisSentimentCache {
    pub async fn connect(redis_url: &str, ttl_secs: u64) -> Result<Self, CacheError> {
        let client = redis::Client::open(redis_url)?;
        let conn = client.get_multiplexed_tokio_connection().await?;
        Ok(Self { conn, ttl_secs })
    }
}

#[async_trait]
impl SentimentCache for RedisSentimentCache {
    async fn get(&self, key: &str) -> Result<Option<Sentiment>, CacheError> {
        let mut conn = self.conn.clone();
        let value: Option<String> = redis::cmd("GET").arg(key).query_async(&mut conn).await?;
        Ok(value.as_deref().and_then(Sentiment::from_label))
    }

    async fn put(&self, key: &str, sentiment: Sentiment) -> Result<(), CacheError> {
        let mut conn = self.conn.clone();
        redis::cmd("SET")
            .arg(key)
            .arg(sentiment.as_str())
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Caching decorator
// ────────────────────────────────────────────────────────────────────────────

pub struct CachedSentimentClassifier {
    inner: Arc<dyn SentimentClassifier>,
    cache: Arc<dyn SentimentCache>,
}

impl CachedSentimentClassifier {
    pub fn new(inner: Arc<dyn SentimentClassifier>, cache: Arc<dyn SentimentCache>) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl SentimentClassifier for CachedSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment, ClassificationError> {
        let key = cache_key(text);

        match self.cache.get(&key).await {
            Ok(Some(sentiment)) => {
                debug!("Sentiment cache hit: {key}");
                return Ok(sentiment);
            }
            Ok(None) => {}
            Err(e) => warn!("Sentiment cache read failed, classifying directly: {e}"),
        }

        let sentiment = self.inner.classify(text).await?;

        if let Err(e) = self.cache.put(&key, sentiment).await {
            warn!("Sentiment cache write failed: {e}");
        }

        Ok(sentiment)
    }
}
