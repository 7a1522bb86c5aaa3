//! Readability: a coarse band derived from average sentence length.

use serde::{Deserialize, Serialize};

use crate::analysis::tokenizer;

/// Coarse difficulty band. Ordered from easiest to hardest; `NotApplicable`
/// is reserved for text with nothing to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReadabilityBand {
    Easy,
    Moderate,
    Hard,
    #[serde(rename = "Very Hard")]
    VeryHard,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ReadabilityBand {
    /// Inclusive upper bounds: 15, 20, 30.
    pub fn from_avg_words_per_sentence(avg: f64) -> Self {
        if avg <= 15.0 {
            ReadabilityBand::Easy
        } else if avg <= 20.0 {
            ReadabilityBand::Moderate
        } else if avg <= 30.0 {
            ReadabilityBand::Hard
        } else {
            ReadabilityBand::VeryHard
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadabilityBand::Easy => "Easy",
            ReadabilityBand::Moderate => "Moderate",
            ReadabilityBand::Hard => "Hard",
            ReadabilityBand::VeryHard => "Very Hard",
            ReadabilityBand::NotApplicable => "N/A",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityScore {
    pub band: ReadabilityBand,
    /// Rounded to one decimal.
    pub avg_words_per_sentence: f64,
}

/// Scores text by average words per sentence. Sentence count is floored at 1.
pub fn readability_score(text: &str) -> ReadabilityScore {
    if tokenizer::is_degenerate(text) {
        return ReadabilityScore {
            band: ReadabilityBand::NotApplicable,
            avg_words_per_sentence: 0.0,
        };
    }

    let word_count = tokenizer::word_count(text);
    let sentence_count = tokenizer::sentences(text).len().max(1);
    let avg = round1(word_count as f64 / sentence_count as f64);

    ReadabilityScore {
        band: ReadabilityBand::from_avg_words_per_sentence(avg),
        avg_words_per_sentence: avg,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
