use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One utterance in a conversation, in chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConversationTurn {
    pub speaker: String,
    pub text: String,
}

/// A snapshot of a clinical conversation submitted for analysis.
///
/// All fields are required; strings may be empty. Only `doctor_statement`
/// is sentiment-scored. The background and history feed case
/// classification and the explanatory prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisRequest {
    pub patient_background: String,
    pub conversation_history: Vec<ConversationTurn>,
    pub doctor_statement: String,
}
