use rapport_core::models::analysis::AnalysisResult;
use rapport_core::models::rubric::{
    ANXIETY_STRESS_RANGE, EMPATHY_RAPPORT_RANGE, OVERALL_NEGATIVITY_RANGE,
    PERCEIVED_JUDGMENT_RANGE,
};

use crate::error::ScoringError;
use crate::noise::NoiseSource;

pub const OVERALL_NEGATIVITY_SIGMA: f64 = 1.0;
pub const PERCEIVED_JUDGMENT_SIGMA: f64 = 0.5;
pub const ANXIETY_STRESS_SIGMA: f64 = 0.5;
pub const EMPATHY_RAPPORT_SIGMA: f64 = 1.0;

/// Turn a sentiment scalar into the four rubric scores and a rationale.
///
/// Each score is `mean + noise`, clamped to its range as the last step.
pub fn synthesize(sentiment: f64, noise: &dyn NoiseSource) -> Result<AnalysisResult, ScoringError> {
    if !sentiment.is_finite() {
        return Err(ScoringError::NonFiniteSentiment(sentiment));
    }

    let half = sentiment / 2.0;

    let overall_negativity = OVERALL_NEGATIVITY_RANGE
        .clamp(sentiment + noise.sample(OVERALL_NEGATIVITY_SIGMA));
    let perceived_judgment =
        PERCEIVED_JUDGMENT_RANGE.clamp(half + noise.sample(PERCEIVED_JUDGMENT_SIGMA));
    let anxiety_stress = ANXIETY_STRESS_RANGE.clamp(half + noise.sample(ANXIETY_STRESS_SIGMA));
    let empathy_rapport =
        EMPATHY_RAPPORT_RANGE.clamp(5.0 - half + noise.sample(EMPATHY_RAPPORT_SIGMA));

    Ok(AnalysisResult {
        rationale: rationale(
            overall_negativity,
            perceived_judgment,
            anxiety_stress,
            empathy_rapport,
        ),
        overall_negativity,
        perceived_judgment,
        anxiety_stress,
        empathy_rapport,
    })
}

pub fn rationale(
    overall_negativity: f64,
    perceived_judgment: f64,
    anxiety_stress: f64,
    empathy_rapport: f64,
) -> String {
    format!(
        "Based on sentiment analysis and case-specific guidelines, the statement shows an overall negativity of {overall_negativity:.1}/10. \
         The perceived judgment is {perceived_judgment:.1}/5, potential for anxiety/stress is {anxiety_stress:.1}/5, \
         and empathy/rapport building is {empathy_rapport:.1} on a scale from -5 to +5."
    )
}
