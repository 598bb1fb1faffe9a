use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use uuid::Uuid;

use rapport_core::models::analysis::AnalysisResult;
use rapport_core::models::conversation::AnalysisRequest;

use crate::error::{ApiError, panic_detail};
use crate::state::AppState;

/// Score the doctor's latest statement.
///
/// Body shape is validated before readiness is checked, so a malformed
/// request is always a validation error. The scoring sequence runs on a
/// blocking task; a panic inside it is reported as a processing error.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let Json(request) = payload?;

    let span = tracing::info_span!("analyze", request_id = %Uuid::new_v4());
    let analyzer = state.analyzer.clone();
    let analysis = tokio::task::spawn_blocking(move || span.in_scope(|| analyzer.analyze(&request)))
        .await
        .map_err(|e| {
            if e.is_panic() {
                ApiError::Processing(panic_detail(&*e.into_panic()))
            } else {
                ApiError::Internal(e.to_string())
            }
        })??;

    Ok(Json(analysis.result))
}
