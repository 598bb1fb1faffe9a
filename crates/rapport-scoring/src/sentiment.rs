use std::sync::{Arc, OnceLock};

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;

/// Binary sentiment label produced by a classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

/// A single classifier verdict. `confidence` is expected in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    pub confidence: f64,
}

/// Opaque binary sentiment classifier.
///
/// Implementations are shared across concurrent requests and must not
/// mutate themselves during `classify`.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Classification, ScoringError>;
}

/// Maps classifier output to a negativity scalar in [0, 10].
///
/// Holds a write-once slot for the classifier: the scorer starts
/// unloaded, [`SentimentScorer::install`] moves it to ready exactly once,
/// and every read after that is lock-free. Clones share the slot.
#[derive(Clone, Default)]
pub struct SentimentScorer {
    classifier: Arc<OnceLock<Arc<dyn SentimentClassifier>>>,
}

impl SentimentScorer {
    /// A scorer with no classifier yet. Scoring fails with
    /// [`ScoringError::ClassifierUnavailable`] until one is installed.
    pub fn unloaded() -> Self {
        Self::default()
    }

    /// A scorer that is ready immediately.
    pub fn loaded(classifier: Arc<dyn SentimentClassifier>) -> Self {
        let scorer = Self::unloaded();
        // A fresh slot is always empty.
        let _ = scorer.classifier.set(classifier);
        scorer
    }

    pub fn install(&self, classifier: Arc<dyn SentimentClassifier>) -> Result<(), ScoringError> {
        self.classifier
            .set(classifier)
            .map_err(|_| ScoringError::ClassifierAlreadyLoaded)
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.get().is_some()
    }

    /// Score `text`: `NEGATIVE` maps to `confidence * 10`, anything else to 0.
    pub fn score(&self, text: &str) -> Result<f64, ScoringError> {
        let classifier = self
            .classifier
            .get()
            .ok_or(ScoringError::ClassifierUnavailable)?;

        let verdict = classifier.classify(text)?;
        if !verdict.confidence.is_finite() || !(0.0..=1.0).contains(&verdict.confidence) {
            return Err(ScoringError::InvalidConfidence(verdict.confidence));
        }

        Ok(match verdict.label {
            SentimentLabel::Negative => verdict.confidence * 10.0,
            SentimentLabel::Positive => 0.0,
        })
    }
}
