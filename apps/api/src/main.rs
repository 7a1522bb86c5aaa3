mod analysis;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod proposals;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::cache::{CachedSentimentClassifier, RedisSentimentCache};
use crate::analysis::sentiment::{
    LlmSentimentClassifier, RemoteSentimentClassifier, SentimentClassifier,
};
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::proposals::history::PgProposalStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pitchwise API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let timeout = Duration::from_secs(config.llm_timeout_secs);
    let llm = LlmClient::new(config.llm_api_key.clone(), config.llm_api_url.clone(), timeout)?;
    info!("LLM client initialized ({})", config.llm_api_url);

    let (classifier, sentiment_cache_enabled) = build_classifier(&config, &llm, timeout).await?;

    // Build app state
    let state = AppState {
        proposals: Arc::new(PgProposalStore::new(db)),
        llm,
        classifier,
        sentiment_cache_enabled,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Picks the sentiment backend and wraps it in the Redis cache when configured.
/// An unreachable Redis is logged and skipped; sentiment still works uncached.
/// The flag reports whether the cache is actually in front of the backend.
async fn build_classifier(
    config: &Config,
    llm: &LlmClient,
    timeout: Duration,
) -> Result<(Arc<dyn SentimentClassifier>, bool)> {
    let classifier: Arc<dyn SentimentClassifier> = match &config.sentiment_service_url {
        Some(url) => {
            info!("Sentiment backend: remote service at {url}");
            Arc::new(RemoteSentimentClassifier::new(url.clone(), timeout)?)
        }
        None => {
            info!("Sentiment backend: LLM");
            Arc::new(LlmSentimentClassifier::new(llm.clone()))
        }
    };

    let Some(redis_url) = &config.redis_url else {
        return Ok((classifier, false));
    };

    match RedisSentimentCache::connect(redis_url, config.sentiment_cache_ttl_secs).await {
        Ok(cache) => {
            info!(
                "Sentiment cache enabled (ttl {}s)",
                config.sentiment_cache_ttl_secs
            );
            let cached: Arc<dyn SentimentClassifier> =
                Arc::new(CachedSentimentClassifier::new(classifier, Arc::new(cache)));
            Ok((cached, true))
        }
        Err(e) => {
            warn!("Sentiment cache disabled, Redis unavailable: {e}");
            Ok((classifier, false))
        }
    }
}
