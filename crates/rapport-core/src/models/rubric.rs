use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Closed interval a rubric score must lie in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamp `value` into the range. NaN collapses to `min`.
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

pub const OVERALL_NEGATIVITY_RANGE: ScoreRange = ScoreRange::new(0.0, 10.0);
pub const PERCEIVED_JUDGMENT_RANGE: ScoreRange = ScoreRange::new(0.0, 5.0);
pub const ANXIETY_STRESS_RANGE: ScoreRange = ScoreRange::new(0.0, 5.0);
pub const EMPATHY_RAPPORT_RANGE: ScoreRange = ScoreRange::new(-5.0, 5.0);
