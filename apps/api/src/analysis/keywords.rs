//! Keyword density: the most frequent substantive words in a proposal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Tokens of this length or shorter are ignored ("the", "and", "you").
pub const MIN_KEYWORD_LEN: usize = 3;
/// Number of entries returned.
pub const TOP_KEYWORDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordDensity {
    pub word: String,
    pub count: usize,
    /// Percentage of all qualifying tokens, rounded to 2 decimals.
    pub density: f64,
}

impl KeywordDensity {
    /// Density formatted with exactly two decimals, e.g. `"12.50"`.
    pub fn density_label(&self) -> String {
        format!("{:.2}", self.density)
    }
}

/// Lower-cased tokens split on non-word characters, keeping only those longer
/// than `MIN_KEYWORD_LEN`. Word characters are ASCII alphanumerics and `_`.
pub fn qualifying_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|token| token.len() > MIN_KEYWORD_LEN)
        .map(str::to_string)
        .collect()
}

/// Top keywords by descending count; ties keep first-occurrence order.
/// Returns an empty list when no token qualifies.
pub fn keyword_density(text: &str) -> Vec<KeywordDensity> {
    let tokens = qualifying_tokens(text);
    if tokens.is_empty() {
        return Vec::new();
    }
    let total = tokens.len();

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for token in tokens {
        match index.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(TOP_KEYWORDS)
        .map(|(word, count)| KeywordDensity {
            density: round2(count as f64 / total as f64 * 100.0),
            word,
            count,
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
