//! Suggestion engine: a fixed, ordered table of independent rules.
//!
//! Each rule is `(predicate, kind, message)`. Rules never look at sentiment
//! or keyword data, and any subset of them may fire.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
}

/// What the rules are evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionInput<'a> {
    pub text: &'a str,
    pub word_count: usize,
    pub paragraph_count: usize,
}

pub const MIN_WORDS: usize = 100;
pub const MAX_WORDS: usize = 250;
pub const MIN_PARAGRAPHS: usize = 3;

pub struct SuggestionRule {
    pub applies: fn(&SuggestionInput) -> bool,
    pub kind: SuggestionKind,
    pub message: &'static str,
}

fn too_short(input: &SuggestionInput) -> bool {
    input.word_count < MIN_WORDS
}

fn too_long(input: &SuggestionInput) -> bool {
    input.word_count > MAX_WORDS
}

fn asks_no_question(input: &SuggestionInput) -> bool {
    !input.text.contains('?')
}

fn too_few_paragraphs(input: &SuggestionInput) -> bool {
    input.paragraph_count < MIN_PARAGRAPHS
}

/// Evaluation order is output order.
pub const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        applies: too_short,
        kind: SuggestionKind::Warning,
        message: "Proposal might be too short. Consider adding more details.",
    },
    SuggestionRule {
        applies: too_long,
        kind: SuggestionKind::Warning,
        message: "Proposal might be too long. Consider making it more concise.",
    },
    SuggestionRule {
        applies: asks_no_question,
        kind: SuggestionKind::Info,
        message: "Consider asking a question to engage the client.",
    },
    SuggestionRule {
        applies: too_few_paragraphs,
        kind: SuggestionKind::Info,
        message: "Break your proposal into shorter paragraphs for better readability.",
    },
];

/// Emits one suggestion per triggered rule. Empty text gets none.
pub fn generate_suggestions(input: &SuggestionInput) -> Vec<Suggestion> {
    if input.text.trim().is_empty() {
        return Vec::new();
    }

    RULES
        .iter()
        .filter(|rule| (rule.applies)(input))
        .map(|rule| Suggestion {
            kind: rule.kind,
            message: rule.message.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer;

    fn suggest(text: &str) -> Vec<Suggestion> {
        generate_suggestions(&SuggestionInput {
            text,
            word_count: tokenizer::word_count(text),
            paragraph_count: tokenizer::paragraphs(text).len(),
        })
    }

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    #[test]
    fn test_fifty_words_one_paragraph_no_question() {
        let result = suggest(&words(50));
        assert_eq!(result.len(), 3);
        assert_eq!(result[0].kind, SuggestionKind::Warning);
        assert_eq!(result[0].message, RULES[0].message);
        assert_eq!(result[1].kind, SuggestionKind::Info);
        assert_eq!(result[1].message, RULES[2].message);
        assert_eq!(result[2].kind, SuggestionKind::Info);
        assert_eq!(result[2].message, RULES[3].message);
    }

    #[test]
    fn test_well_formed_proposal_triggers_nothing() {
        let text = format!("{}\n\n{}\n\n{} - shall we talk?", words(50), words(50), words(50));
        assert!(suggest(&text).is_empty());
    }

    #[test]
    fn test_long_proposal_warns_concise() {
        let text = format!("{}\n{}\n{}?", words(100), words(100), words(100));
        let result = suggest(&text);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].kind, SuggestionKind::Warning);
        assert!(result[0].message.contains("too long"));
    }

    #[test]
    fn test_boundaries_do_not_fire() {
        let exactly_min = generate_suggestions(&SuggestionInput {
            text: "Question?",
            word_count: MIN_WORDS,
            paragraph_count: MIN_PARAGRAPHS,
        });
        assert!(exactly_min.is_empty());

        let exactly_max = generate_suggestions(&SuggestionInput {
            text: "Question?",
            word_count: MAX_WORDS,
            paragraph_count: MIN_PARAGRAPHS,
        });
        assert!(exactly_max.is_empty());
    }

    #[test]
    fn test_rules_fire_independently() {
        let only_question = generate_suggestions(&SuggestionInput {
            text: "no question mark",
            word_count: 150,
            paragraph_count: 4,
        });
        assert_eq!(only_question.len(), 1);
        assert_eq!(only_question[0].message, RULES[2].message);

        let only_paragraphs = generate_suggestions(&SuggestionInput {
            text: "what next?",
            word_count: 150,
            paragraph_count: 1,
        });
        assert_eq!(only_paragraphs.len(), 1);
        assert_eq!(only_paragraphs[0].message, RULES[3].message);
    }

    #[test]
    fn test_empty_text_has_no_suggestions() {
        assert!(suggest("").is_empty());
        assert!(suggest("  \n ").is_empty());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SuggestionKind::Warning).unwrap(), "\"warning\"");
        assert_eq!(serde_json::to_string(&SuggestionKind::Info).unwrap(), "\"info\"");
    }
}
