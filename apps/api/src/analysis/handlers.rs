//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::orchestrator::{analyze, analyze_metrics, AnalysisRecord, TextMetrics};
use crate::analysis::sentiment::Sentiment;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    pub sentiment: Sentiment,
}

/// POST /api/v1/analysis
///
/// Full analysis including sentiment. A failed classification is reported as
/// `SENTIMENT_UNAVAILABLE` with the local metrics alongside the error.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisRecord>, AppError> {
    let record = analyze(&request.text, state.classifier.as_ref())
        .await
        .map_err(|e| AppError::PartialAnalysis {
            reason: e.source.to_string(),
            metrics: Box::new(e.metrics),
        })?;

    Ok(Json(record))
}

/// POST /api/v1/analysis/metrics
///
/// Local metrics only; never touches the network.
pub async fn handle_metrics(Json(request): Json<AnalyzeRequest>) -> Json<TextMetrics> {
    Json(analyze_metrics(&request.text))
}

/// POST /api/v1/sentiment
pub async fn handle_sentiment(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<SentimentResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("No text provided".to_string()));
    }

    let sentiment = state
        .classifier
        .classify(&request.text)
        .await
        .map_err(|e| AppError::SentimentUnavailable(e.to_string()))?;

    Ok(Json(SentimentResponse { sentiment }))
}
