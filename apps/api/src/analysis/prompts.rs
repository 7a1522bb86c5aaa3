// Sentiment classification prompts.

pub const SENTIMENT_SYSTEM: &str = "You are a sentiment classifier for freelance job proposals. \
    You MUST answer with exactly one word: Positive, Neutral, or Negative. \
    Do NOT add punctuation, explanations, or any other text.";

/// Replace `{text}` before sending.
pub const SENTIMENT_PROMPT_TEMPLATE: &str = r#"Classify the sentiment of the following text as one of:
Positive, Neutral, or Negative.

Text:
"""{text}"""

Answer with only one word: Positive, Neutral, or Negative."#;
