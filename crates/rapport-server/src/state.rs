use std::sync::Arc;

use rapport_scoring::analyzer::Analyzer;
use rapport_scoring::lexicon::LexiconClassifier;
use rapport_scoring::noise::NoiseSource;
use rapport_scoring::sentiment::SentimentScorer;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
}

impl AppState {
    /// Build the analyzer and load the sentiment classifier on a blocking
    /// task. Returns only once the classifier is installed.
    pub async fn initialize(noise: Arc<dyn NoiseSource>) -> eyre::Result<Self> {
        let analyzer = Analyzer::new(SentimentScorer::unloaded(), noise);

        let classifier = tokio::task::spawn_blocking(LexiconClassifier::load).await?;
        analyzer.scorer().install(Arc::new(classifier))?;
        tracing::info!("sentiment classifier loaded");

        Ok(Self { analyzer })
    }
}
