use std::fmt;

use serde::{Deserialize, Serialize};

/// Who spoke a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Speaker {
    Doctor,
    Patient,
}

impl Speaker {
    /// Transcript line prefix for this speaker.
    pub fn prefix(&self) -> &'static str {
        match self {
            Speaker::Doctor => "D:",
            Speaker::Patient => "P:",
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::Doctor => f.write_str("Doctor"),
            Speaker::Patient => f.write_str("Patient"),
        }
    }
}

const PATIENT_DISTRESS_CUES: &[&str] = &["worried", "scared", "pain", "anxious"];

const DOCTOR_REASSURANCE_CUES: &[&str] = &["don't worry", "tests", "reassure"];

/// Label one utterance.
///
/// Patient: 1 when it voices distress, else 0.
/// Doctor: 2 when it reassures or orders tests, else 1.
pub fn label_dialogue(speaker: Speaker, text: &str) -> u8 {
    let lower = text.to_lowercase().replace('\u{2019}', "'");
    let mentions_any = |cues: &[&str]| cues.iter().any(|cue| lower.contains(cue));

    match speaker {
        Speaker::Patient => u8::from(mentions_any(PATIENT_DISTRESS_CUES)),
        Speaker::Doctor => {
            if mentions_any(DOCTOR_REASSURANCE_CUES) {
                2
            } else {
                1
            }
        }
    }
}
