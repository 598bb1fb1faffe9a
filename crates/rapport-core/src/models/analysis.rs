use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Rubric scores for a single doctor statement.
///
/// Numeric fields carry full precision; only `rationale` rounds them
/// (to one decimal) for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResult {
    /// 0 to 10.
    pub overall_negativity: f64,
    /// 0 to 5.
    pub perceived_judgment: f64,
    /// 0 to 5.
    pub anxiety_stress: f64,
    /// -5 to 5.
    pub empathy_rapport: f64,
    pub rationale: String,
}
