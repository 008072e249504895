//! Answer validation endpoint

use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{ValidateAnswerRequest, ValidateAnswerResponse};
use crate::services::grading;
use crate::AppState;

/// POST /api/validate-answer
///
/// Grades a submitted answer against the stored key. A missing key is
/// reported as a well-formed incorrect result with HTTP 200, so the
/// client renders feedback the same way for every outcome.
pub async fn validate(
    State(state): State<AppState>,
    Json(payload): Json<ValidateAnswerRequest>,
) -> Result<Json<ValidateAnswerResponse>> {
    tracing::debug!(
        "Validating answer for question {} ({})",
        payload.question_id,
        payload.question_type.as_str()
    );

    let response = grading::grade_submission(&state, &payload).await?;
    Ok(Json(response))
}
