//! Sentiment classification: a pluggable capability behind an async trait.
//!
//! Backends:
//! - `LlmSentimentClassifier`: one deterministic (temperature 0) chat completion.
//! - `RemoteSentimentClassifier`: a `{text} -> {sentiment}` HTTP service.
//! - `CachedSentimentClassifier` (see `cache.rs`): wraps either one.
//!
//! `AppState` holds an `Arc<dyn SentimentClassifier>`, chosen at startup via config.
//!
//! Label matching is case-sensitive: "positive" is not a label and
//! normalizes to `Neutral`. Transport failures are errors, never `Neutral`.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::analysis::prompts::{SENTIMENT_PROMPT_TEMPLATE, SENTIMENT_SYSTEM};
use crate::llm_client::{ChatRequest, LlmClient, LlmError};

/// Small, fast model; the answer is a single word.
pub const SENTIMENT_MODEL: &str = "llama-3.1-8b-instant";
const SENTIMENT_MAX_TOKENS: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// Exact, case-sensitive label match.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Positive" => Some(Sentiment::Positive),
            "Neutral" => Some(Sentiment::Neutral),
            "Negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

/// Maps a raw model/service answer to a label: first line, trimmed, exact
/// match. Missing, empty or unrecognized answers become `Neutral`.
pub fn normalize_label(raw: Option<&str>) -> Sentiment {
    raw.and_then(|text| text.trim().lines().next())
        .map(str::trim)
        .and_then(Sentiment::from_label)
        .unwrap_or_default()
}

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("sentiment request failed: {0}")]
    Transport(String),

    #[error("sentiment service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("sentiment response was malformed: {0}")]
    MalformedResponse(String),
}

impl From<LlmError> for ClassificationError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::Api { status, message } => ClassificationError::Status { status, message },
            LlmError::Parse(e) => ClassificationError::MalformedResponse(e.to_string()),
            other => ClassificationError::Transport(other.to_string()),
        }
    }
}

/// The classification capability. Implementations make at most one outbound
/// request per call and never retry.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Sentiment, ClassificationError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSentimentClassifier
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSentimentClassifier {
    llm: LlmClient,
}

impl LlmSentimentClassifier {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl SentimentClassifier for LlmSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment, ClassificationError> {
        let prompt = SENTIMENT_PROMPT_TEMPLATE.replace("{text}", text);
        let request = ChatRequest {
            model: SENTIMENT_MODEL,
            system: SENTIMENT_SYSTEM,
            prompt: &prompt,
            temperature: 0.0,
            max_tokens: SENTIMENT_MAX_TOKENS,
        };

        let response = self.llm.call_once(&request).await?;
        let sentiment = normalize_label(response.text());
        debug!("LLM sentiment: raw={:?} -> {:?}", response.text(), sentiment);
        Ok(sentiment)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// RemoteSentimentClassifier
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct SentimentReply {
    sentiment: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SentimentErrorReply {
    error: String,
}

/// Client for a standalone sentiment service speaking
/// `POST {text}` -> `{sentiment}` (or `{error}` with a non-2xx status).
pub struct RemoteSentimentClassifier {
    client: reqwest::Client,
    url: String,
}

impl RemoteSentimentClassifier {
    pub fn new(url: String, timeout: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            url,
        })
    }
}

#[async_trait]
impl SentimentClassifier for RemoteSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Sentiment, ClassificationError> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({ "text": text }))
            .send()
            .await
            .map_err(|e| ClassificationError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClassificationError::Transport(e.to_string()))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<SentimentErrorReply>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| String::from_utf8_lossy(&body).into_owned());
            return Err(ClassificationError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let reply: SentimentReply = serde_json::from_slice(&body)
            .map_err(|e| ClassificationError::MalformedResponse(e.to_string()))?;

        Ok(normalize_label(reply.sentiment.as_deref()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lexicon heuristic (history analytics only)
// ────────────────────────────────────────────────────────────────────────────

const POSITIVE_WORDS: &[&str] = &[
    "excellent",
    "great",
    "amazing",
    "perfect",
    "outstanding",
    "professional",
    "experienced",
    "successful",
];

const NEGATIVE_WORDS: &[&str] = &["problem", "difficult", "challenge", "issue", "struggle", "hard"];

/// Network-free word-list sentiment used for stored history analytics.
/// Not a substitute for the classifier.
pub fn lexicon_sentiment(text: &str) -> Sentiment {
    let mut positive = 0usize;
    let mut negative = 0usize;

    for word in text.split_whitespace() {
        let word = word
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if POSITIVE_WORDS.contains(&word.as_str()) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&word.as_str()) {
            negative += 1;
        }
    }

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}
