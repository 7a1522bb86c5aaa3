//! Analysis orchestrator: composes the pure pipeline with one sentiment call.
//!
//! Flow: tokenizer counts → keyword density → readability → suggestions
//!       → await classifier → AnalysisRecord.
//!
//! The classifier await is the only suspension point and the only fallible
//! step. When it fails, the already computed `TextMetrics` travel inside the
//! error so the caller can still render them with sentiment marked unavailable.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::analysis::keywords::{keyword_density, KeywordDensity};
use crate::analysis::readability::{readability_score, ReadabilityScore};
use crate::analysis::sentiment::{ClassificationError, Sentiment, SentimentClassifier};
use crate::analysis::suggestions::{generate_suggestions, Suggestion, SuggestionInput};
use crate::analysis::tokenizer;

/// Every local (network-free) measurement of a proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMetrics {
    pub word_count: usize,
    /// Unicode scalar values in the exact input; no normalization.
    pub character_count: usize,
    pub paragraph_count: usize,
    /// Minutes at 200 words per minute, rounded up.
    pub reading_time: usize,
    /// Rounded to one decimal; paragraph count is floored at 1 so empty text reads as 0.0.
    pub avg_words_per_paragraph: f64,
    pub keyword_density: Vec<KeywordDensity>,
    pub readability_score: ReadabilityScore,
    pub suggestions: Vec<Suggestion>,
}

/// The full, immutable result of analyzing one proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub word_count: usize,
    pub character_count: usize,
    pub paragraph_count: usize,
    pub reading_time: usize,
    pub avg_words_per_paragraph: f64,
    pub sentiment: Sentiment,
    pub keyword_density: Vec<KeywordDensity>,
    pub readability_score: ReadabilityScore,
    pub suggestions: Vec<Suggestion>,
}

impl AnalysisRecord {
    pub fn from_parts(metrics: TextMetrics, sentiment: Sentiment) -> Self {
        Self {
            word_count: metrics.word_count,
            character_count: metrics.character_count,
            paragraph_count: metrics.paragraph_count,
            reading_time: metrics.reading_time,
            avg_words_per_paragraph: metrics.avg_words_per_paragraph,
            sentiment,
            keyword_density: metrics.keyword_density,
            readability_score: metrics.readability_score,
            suggestions: metrics.suggestions,
        }
    }
}

/// Sentiment classification failed; local metrics are still available.
#[derive(Debug, Error)]
#[error("sentiment classification failed: {source}")]
pub struct AnalysisError {
    pub metrics: TextMetrics,
    pub source: ClassificationError,
}

/// Runs every local computation. Pure and infallible.
pub fn analyze_metrics(text: &str) -> TextMetrics {
    let word_count = tokenizer::word_count(text);
    let paragraph_count = tokenizer::paragraphs(text).len();

    TextMetrics {
        word_count,
        character_count: text.chars().count(),
        paragraph_count,
        reading_time: tokenizer::reading_time_minutes(word_count),
        avg_words_per_paragraph: (word_count as f64 / paragraph_count.max(1) as f64 * 10.0)
            .round()
            / 10.0,
        keyword_density: keyword_density(text),
        readability_score: readability_score(text),
        suggestions: generate_suggestions(&SuggestionInput {
            text,
            word_count,
            paragraph_count,
        }),
    }
}

/// Analyzes a proposal: local metrics plus exactly one classifier call.
///
/// The one exception to the single call: empty or whitespace-only text yields
/// zeroed metrics and `Neutral` without contacting the classifier at all.
/// No retries; callers may retry the whole call.
pub async fn analyze(
    text: &str,
    classifier: &dyn SentimentClassifier,
) -> Result<AnalysisRecord, AnalysisError> {
    let metrics = analyze_metrics(text);

    if tokenizer::is_degenerate(text) {
        debug!("Skipping sentiment for empty proposal text");
        return Ok(AnalysisRecord::from_parts(metrics, Sentiment::Neutral));
    }

    match classifier.classify(text).await {
        Ok(sentiment) => {
            info!(
                "Analyzed proposal: words={}, readability={}, sentiment={}",
                metrics.word_count,
                metrics.readability_score.band.label(),
                sentiment.as_str()
            );
            Ok(AnalysisRecord::from_parts(metrics, sentiment))
        }
        Err(source) => Err(AnalysisError { metrics, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::readability::ReadabilityBand;
    use crate::analysis::suggestions::SuggestionKind;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed answer and counts calls.
    struct FakeClassifier {
        answer: Result<Sentiment, String>,
        calls: AtomicUsize,
    }

    impl FakeClassifier {
        fn ok(sentiment: Sentiment) -> Self {
            Self {
                answer: Ok(sentiment),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                answer: Err(message.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl SentimentClassifier for FakeClassifier {
        async fn classify(&self, _text: &str) -> Result<Sentiment, ClassificationError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.answer
                .clone()
                .map_err(ClassificationError::Transport)
        }
    }

    #[tokio::test]
    async fn test_short_greeting_scenario() {
        let classifier = FakeClassifier::ok(Sentiment::Positive);
        let record = analyze("Hi there. I can help.", &classifier).await.unwrap();

        assert_eq!(record.word_count, 5);
        assert_eq!(record.character_count, 21);
        assert_eq!(record.paragraph_count, 1);
        assert_eq!(record.reading_time, 1);
        assert_eq!(record.sentiment, Sentiment::Positive);
        assert_eq!(record.readability_score.avg_words_per_sentence, 2.5);
        assert_eq!(record.readability_score.band, ReadabilityBand::Easy);

        assert_eq!(record.suggestions.len(), 3);
        assert_eq!(record.suggestions[0].kind, SuggestionKind::Warning);
        assert!(record.suggestions[0].message.contains("too short"));
        assert!(record.suggestions[1].message.contains("asking a question"));
        assert!(record.suggestions[2].message.contains("shorter paragraphs"));

        // "there" and "help" are the only tokens longer than three characters
        let words: Vec<&str> = record.keyword_density.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["there", "help"]);
        assert_eq!(classifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_local_metrics() {
        let classifier = FakeClassifier::failing("connection refused");
        let err = analyze("Hi there. I can help.", &classifier)
            .await
            .unwrap_err();

        assert!(matches!(err.source, ClassificationError::Transport(_)));
        assert_eq!(err.metrics.word_count, 5);
        assert_eq!(err.metrics.character_count, 21);
        assert_eq!(err.metrics.paragraph_count, 1);
        assert_eq!(err.metrics.readability_score.band, ReadabilityBand::Easy);
        assert_eq!(err.metrics.suggestions.len(), 3);
        assert_eq!(classifier.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_text_is_degenerate_not_error() {
        let classifier = FakeClassifier::failing("should not be called");
        let record = analyze("", &classifier).await.unwrap();

        assert_eq!(record.word_count, 0);
        assert_eq!(record.character_count, 0);
        assert_eq!(record.paragraph_count, 0);
        assert_eq!(record.reading_time, 0);
        assert_eq!(record.sentiment, Sentiment::Neutral);
        assert_eq!(record.readability_score.band, ReadabilityBand::NotApplicable);
        assert!(record.keyword_density.is_empty());
        assert!(record.suggestions.is_empty());
        assert_eq!(record.avg_words_per_paragraph, 0.0);
        assert_eq!(classifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_counts_raw_characters() {
        let classifier = FakeClassifier::ok(Sentiment::Positive);
        let record = analyze("  \n\t ", &classifier).await.unwrap();
        assert_eq!(record.character_count, 5);
        assert_eq!(record.word_count, 0);
        assert_eq!(record.sentiment, Sentiment::Neutral);
    }

    #[tokio::test]
    async fn test_analyze_is_idempotent() {
        let text = "Hello!\n\nI built a similar dashboard last month. Want a quick call?\n\nBest, Sam";
        let classifier = FakeClassifier::ok(Sentiment::Positive);

        let first = analyze(text, &classifier).await.unwrap();
        let second = analyze(text, &classifier).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }

    #[test]
    fn test_character_count_is_not_normalized() {
        let metrics = analyze_metrics("Café — naïve\r\n");
        assert_eq!(metrics.character_count, 14);
    }

    #[test]
    fn test_reading_time_matches_word_count() {
        let text = vec!["word"; 401].join(" ");
        let metrics = analyze_metrics(&text);
        assert_eq!(metrics.word_count, 401);
        assert_eq!(metrics.reading_time, 3);
    }

    #[test]
    fn test_avg_words_per_paragraph() {
        let metrics = analyze_metrics("one two three\n\nfour five\nsix");
        assert_eq!(metrics.paragraph_count, 3);
        assert_eq!(metrics.avg_words_per_paragraph, 2.0);

        let uneven = analyze_metrics("one two\n\nthree four five six\n\nseven");
        assert_eq!(uneven.avg_words_per_paragraph, 2.3);
    }

    #[test]
    fn test_record_serializes_with_snake_case_fields() {
        let record = AnalysisRecord::from_parts(analyze_metrics("Hi there."), Sentiment::Neutral);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["word_count"], 2);
        assert_eq!(value["avg_words_per_paragraph"], 2.0);
        assert_eq!(value["sentiment"], "Neutral");
        assert_eq!(value["readability_score"]["band"], "Easy");
        assert_eq!(value["suggestions"][0]["kind"], "warning");
    }
}
