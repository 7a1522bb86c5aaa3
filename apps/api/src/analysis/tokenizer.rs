//! Tokenizer / Segmenter: splits proposal text into words, sentences and paragraphs.
//!
//! Every function here is pure and total: empty or whitespace-only input
//! simply yields empty sequences.

/// Average silent reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Word tokens: runs of non-whitespace, empties discarded.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentence segments.
///
/// A segment ends immediately after a `.`, `?` or `!` that is followed by
/// whitespace; that whitespace run is consumed. Segments are trimmed and
/// empty ones dropped, so unpunctuated text is a single sentence.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() && matches!(prev, Some('.' | '?' | '!')) {
            segments.push(&text[start..idx]);

            let mut end = idx + ch.len_utf8();
            while let Some(&(next_idx, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_idx + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }
    segments.push(&text[start..]);

    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Paragraph segments: newline-delimited, trimmed, blank ones dropped.
pub fn paragraphs(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// `ceil(word_count / 200)`; zero words read in zero minutes.
pub fn reading_time_minutes(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

/// True when the text carries nothing to analyze.
pub fn is_degenerate(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_split_on_whitespace_runs() {
        assert_eq!(
            words("  Hello   there,\tclient\nfriend  "),
            vec!["Hello", "there,", "client", "friend"]
        );
    }

    #[test]
    fn test_word_count_empty_is_zero() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
    }

    #[test]
    fn test_word_count_matches_trimmed_whitespace_split() {
        let samples = [
            "Hi there. I can help.",
            "one",
            "  leading and trailing  ",
            "line one\nline two\n\nline three",
        ];
        for text in samples {
            let expected = text.trim().split_whitespace().count();
            assert_eq!(word_count(text), expected, "text: {text:?}");
        }
    }

    #[test]
    fn test_sentences_split_after_terminal_punctuation() {
        assert_eq!(
            sentences("Hi there. I can help."),
            vec!["Hi there.", "I can help."]
        );
    }

    #[test]
    fn test_sentences_handle_runs_of_punctuation() {
        assert_eq!(
            sentences("Really?! Yes... Absolutely!"),
            vec!["Really?!", "Yes...", "Absolutely!"]
        );
    }

    #[test]
    fn test_sentences_do_not_split_inside_decimals() {
        assert_eq!(sentences("Version 2.5 shipped. Done"), vec!["Version 2.5 shipped.", "Done"]);
    }

    #[test]
    fn test_sentences_without_punctuation_is_single_segment() {
        assert_eq!(sentences("  no punctuation here  "), vec!["no punctuation here"]);
    }

    #[test]
    fn test_sentences_empty_text_yields_none() {
        assert!(sentences("").is_empty());
        assert!(sentences("   ").is_empty());
    }

    #[test]
    fn test_sentences_split_across_newlines() {
        assert_eq!(
            sentences("First line.\n\nSecond line?\nThird"),
            vec!["First line.", "Second line?", "Third"]
        );
    }

    #[test]
    fn test_paragraphs_drop_blank_lines() {
        assert_eq!(
            paragraphs("Hello,\n\n   \nI can help.\r\nThanks"),
            vec!["Hello,", "I can help.", "Thanks"]
        );
    }

    #[test]
    fn test_paragraphs_without_newline_is_single_segment() {
        assert_eq!(paragraphs("just one"), vec!["just one"]);
        assert!(paragraphs("").is_empty());
    }

    #[test]
    fn test_reading_time_is_ceiling() {
        assert_eq!(reading_time_minutes(0), 0);
        assert_eq!(reading_time_minutes(1), 1);
        assert_eq!(reading_time_minutes(200), 1);
        assert_eq!(reading_time_minutes(201), 2);
        assert_eq!(reading_time_minutes(650), 4);
    }

    #[test]
    fn test_is_degenerate() {
        assert!(is_degenerate(""));
        assert!(is_degenerate(" \n\t"));
        assert!(!is_degenerate(" a "));
    }
}
