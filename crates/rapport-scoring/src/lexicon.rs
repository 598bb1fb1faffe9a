//! Cue-word sentiment classifier.
//!
//! Counts positive and negative cue words in a statement. A negator
//! ("not", "don't", ...) flips the polarity of the cue that follows it.

use std::collections::HashSet;

use crate::error::ScoringError;
use crate::sentiment::{Classification, SentimentClassifier, SentimentLabel};

const POSITIVE_CUES: &[&str] = &[
    "appreciate", "care", "comfortable", "concern", "concerns", "encourage",
    "glad", "good", "great", "happy", "hear", "help", "helpful", "listen",
    "options", "reassure", "safe", "share", "sorry", "support", "thank",
    "thanks", "together", "understand", "understandable", "welcome",
];

const NEGATIVE_CUES: &[&str] = &[
    "bad", "blame", "careless", "dangerous", "denial", "excuse", "excuses",
    "fail", "failed", "fault", "ignorant", "irresponsible", "just", "lazy",
    "must", "nonsense", "noncompliant", "obviously", "overreacting",
    "problem", "refuse", "ridiculous", "should", "silly", "stop", "stupid",
    "terrible", "wasting", "worrying", "worse", "worst", "wrong",
];

const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "can't", "cant", "won't", "isn't",
    "aren't", "didn't", "doesn't",
];

pub struct LexiconClassifier {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
    negators: HashSet<&'static str>,
}

impl LexiconClassifier {
    /// Build the classifier from the built-in cue lists.
    pub fn load() -> Self {
        Self {
            positive: POSITIVE_CUES.iter().copied().collect(),
            negative: NEGATIVE_CUES.iter().copied().collect(),
            negators: NEGATORS.iter().copied().collect(),
        }
    }

    fn cue_counts(&self, text: &str) -> (u32, u32) {
        let lower = text.to_lowercase().replace('\u{2019}', "'");
        let mut positive = 0;
        let mut negative = 0;
        let mut negated = false;

        for token in lower
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|t| t.trim_matches('\''))
            .filter(|t| !t.is_empty())
        {
            if self.negators.contains(token) {
                negated = true;
                continue;
            }

            let polarity = if self.positive.contains(token) {
                Some(true)
            } else if self.negative.contains(token) {
                Some(false)
            } else {
                None
            };

            if let Some(is_positive) = polarity {
                if is_positive != negated {
                    positive += 1;
                } else {
                    negative += 1;
                }
                negated = false;
            }
        }

        (positive, negative)
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Classification, ScoringError> {
        let (positive, negative) = self.cue_counts(text);
        let total = positive + negative;

        let confidence = if total == 0 {
            0.5
        } else {
            0.5 + 0.5 * f64::from(positive.abs_diff(negative)) / f64::from(total)
        };

        let label = if negative > positive {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        };

        Ok(Classification { label, confidence })
    }
}
