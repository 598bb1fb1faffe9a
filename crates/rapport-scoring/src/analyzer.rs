use std::sync::Arc;

use rapport_core::models::analysis::AnalysisResult;
use rapport_core::models::case::CaseCategory;
use rapport_core::models::conversation::AnalysisRequest;

use crate::error::ScoringError;
use crate::noise::NoiseSource;
use crate::sentiment::SentimentScorer;
use crate::{case, prompt, rubric};

/// Everything derived while analyzing one request.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub category: CaseCategory,
    pub guidelines: &'static [&'static str],
    pub prompt: String,
    pub sentiment: f64,
    pub result: AnalysisResult,
}

/// Per-request pipeline: classify case, compose prompt, score the
/// doctor's statement, synthesize the rubric.
///
/// Holds no mutable state; one instance serves all requests.
#[derive(Clone)]
pub struct Analyzer {
    scorer: SentimentScorer,
    noise: Arc<dyn NoiseSource>,
}

impl Analyzer {
    pub fn new(scorer: SentimentScorer, noise: Arc<dyn NoiseSource>) -> Self {
        Self { scorer, noise }
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }

    pub fn is_ready(&self) -> bool {
        self.scorer.is_ready()
    }

    pub fn analyze(&self, request: &AnalysisRequest) -> Result<Analysis, ScoringError> {
        if !self.is_ready() {
            return Err(ScoringError::ClassifierUnavailable);
        }

        let category = case::classify(&request.patient_background);
        let guidelines = case::guidelines_for(category);
        let prompt = prompt::compose(request, guidelines);
        tracing::debug!(case_category = %category, prompt = %prompt, "composed analysis prompt");

        // Only the latest statement is scored; history and background
        // shape the category and prompt alone.
        let sentiment = self.scorer.score(&request.doctor_statement)?;
        let result = rubric::synthesize(sentiment, self.noise.as_ref())?;

        tracing::info!(
            case_category = %category,
            sentiment,
            overall_negativity = result.overall_negativity,
            perceived_judgment = result.perceived_judgment,
            anxiety_stress = result.anxiety_stress,
            empathy_rapport = result.empathy_rapport,
            "statement analyzed"
        );

        Ok(Analysis {
            category,
            guidelines,
            prompt,
            sentiment,
            result,
        })
    }
}
