use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Sentiment model is not loaded.")]
    ClassifierUnavailable,

    #[error("sentiment classifier is already loaded")]
    ClassifierAlreadyLoaded,

    #[error("sentiment classification failed: {0}")]
    Classifier(String),

    #[error("classifier confidence {0} is outside [0, 1]")]
    InvalidConfidence(f64),

    #[error("sentiment score {0} is not finite")]
    NonFiniteSentiment(f64),
}
