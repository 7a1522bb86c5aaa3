use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns a simple status object with service version and sentiment backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let sentiment_backend = if state.config.sentiment_service_url.is_some() {
        "remote"
    } else {
        "llm"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "pitchwise-api",
        "sentiment_backend": sentiment_backend,
        "sentiment_cache": state.sentiment_cache_enabled
    }))
}
