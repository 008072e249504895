//! Progress endpoints

use axum::{extract::State, Extension, Json};

use crate::error::Result;
use crate::models::{ProgressResponse, RecordAttemptRequest, RecordAttemptResponse};
use crate::routes::auth::AuthenticatedPlayer;
use crate::services::progress;
use crate::AppState;

/// GET /api/progress
pub async fn overview(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedPlayer>,
) -> Result<Json<ProgressResponse>> {
    let response = progress::overview(&state, auth.player_id).await?;
    Ok(Json(response))
}

/// POST /api/progress/attempt
pub async fn record_attempt(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthenticatedPlayer>,
    Json(payload): Json<RecordAttemptRequest>,
) -> Result<Json<RecordAttemptResponse>> {
    let response = progress::record_attempt(&state, auth.player_id, &payload).await?;
    Ok(Json(response))
}
