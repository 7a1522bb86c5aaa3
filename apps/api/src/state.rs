use std::sync::Arc;

use crate::analysis::sentiment::SentimentClassifier;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::proposals::history::ProposalStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Proposal history. Postgres in production.
    pub proposals: Arc<dyn ProposalStore>,
    pub llm: LlmClient,
    /// Sentiment backend. LLM or remote service, optionally behind the Redis cache.
    pub classifier: Arc<dyn SentimentClassifier>,
    /// True only when the Redis cache actually connected at startup.
    pub sentiment_cache_enabled: bool,
    pub config: Config,
}
