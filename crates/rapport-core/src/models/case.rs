use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse classification of the clinical context, used to select
/// communication guidelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CaseCategory {
    VaccineHesitant,
    ChronicIllness,
    General,
}

impl CaseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseCategory::VaccineHesitant => "vaccine_hesitant",
            CaseCategory::ChronicIllness => "chronic_illness",
            CaseCategory::General => "general",
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
