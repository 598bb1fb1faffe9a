//! Explanatory prompt builder.
//!
//! Renders the conversation snapshot and applicable guidelines into one
//! text block for downstream explanation. The block is not scored.

use rapport_core::models::conversation::AnalysisRequest;

/// Compose the context prompt for a request.
///
/// Layout, one item per line: patient background, each history turn as
/// `{speaker}: {text}` in order, the doctor's statement, then a
/// `Guidelines:` header followed by each guideline.
pub fn compose(request: &AnalysisRequest, guidelines: &[&str]) -> String {
    let mut prompt = format!("Patient Background: {}\n", request.patient_background);

    for turn in &request.conversation_history {
        prompt.push_str(&format!("{}: {}\n", turn.speaker, turn.text));
    }

    prompt.push_str(&format!("Doctor: {}\n", request.doctor_statement));
    prompt.push_str("Guidelines:\n");
    prompt.push_str(&guidelines.join("\n"));
    prompt
}
