pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::proposals::handlers as proposals;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        .route("/api/v1/analysis/metrics", post(analysis::handle_metrics))
        .route("/api/v1/sentiment", post(analysis::handle_sentiment))
        // Proposals API
        .route(
            "/api/v1/proposals",
            get(proposals::handle_list).post(proposals::handle_save),
        )
        .route(
            "/api/v1/proposals/generate",
            post(proposals::handle_generate),
        )
        .route("/api/v1/proposals/export", post(proposals::handle_export))
        .route(
            "/api/v1/proposals/:id",
            get(proposals::handle_get).delete(proposals::handle_delete),
        )
        .with_state(state)
}
