//! Question endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::error::Result;
use crate::models::{QuestionListQuery, QuestionListResponse};
use crate::AppState;

/// GET /api/questions
/// Returns the client-safe question view; answer keys never leave the server.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<QuestionListQuery>,
) -> Result<Json<QuestionListResponse>> {
    let questions = state.db.list_questions(query.category_id).await?;

    Ok(Json(QuestionListResponse {
        questions: questions.iter().map(|q| q.to_public()).collect(),
    }))
}
