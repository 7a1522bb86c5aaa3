use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::analysis::orchestrator::TextMetrics;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("LLM error: {0}")]
    Llm(String),

    /// The sentiment collaborator could not be reached or answered garbage.
    /// Distinct from a model-asserted `Neutral`.
    #[error("Sentiment unavailable: {0}")]
    SentimentUnavailable(String),

    /// Same status as `SentimentUnavailable`, but the response body also
    /// carries the local metrics computed before the classifier failed.
    #[error("Sentiment unavailable: {reason}")]
    PartialAnalysis {
        reason: String,
        metrics: Box<TextMetrics>,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::SentimentUnavailable(msg) | AppError::PartialAnalysis { reason: msg, .. } => {
                tracing::warn!("Sentiment unavailable: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SENTIMENT_UNAVAILABLE",
                    "Analysis unavailable: sentiment classification failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
            AppError::NotImplemented(what) => (
                StatusCode::NOT_IMPLEMENTED,
                "NOT_IMPLEMENTED",
                format!("{what} is not yet implemented"),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let mut body = json!({
            "error": {
                "code": code,
                "message": message
            }
        });
        if let AppError::PartialAnalysis { metrics, .. } = &self {
            body["metrics"] = serde_json::to_value(metrics).unwrap_or(Value::Null);
        }

        (status, Json(body)).into_response()
    }
}
