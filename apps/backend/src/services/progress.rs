//! Player progress and review-status tracking.

use std::collections::HashMap;

use uuid::Uuid;

use crate::error::Result;
use crate::models::{
    CategoryProgress, MistakeStats, ProgressResponse, RecordAttemptRequest, RecordAttemptResponse,
};
use crate::AppState;

/// Consecutive correct answers needed before a question leaves the
/// review pool.
pub const REVIEW_CLEAR_STREAK: i32 = 3;

/// Streak after an attempt: correct answers extend it, a miss resets it.
fn advance_streak(current: i32, is_correct: bool) -> i32 {
    if is_correct {
        current + 1
    } else {
        0
    }
}

fn needs_review(streak: i32) -> bool {
    streak < REVIEW_CLEAR_STREAK
}

/// Record the outcome of one attempt against the review-status table.
pub async fn record_attempt(
    state: &AppState,
    player_id: Uuid,
    request: &RecordAttemptRequest,
) -> Result<RecordAttemptResponse> {
    let existing = state
        .db
        .get_review_status(player_id, request.question_id)
        .await?;

    let (streak, review) = match existing {
        Some(status) => {
            let streak = advance_streak(status.correct_streak, request.is_correct);
            let review = needs_review(streak);
            state
                .db
                .update_review_status(status.id, streak, request.is_correct, review)
                .await?;
            (streak, review)
        }
        None => {
            let streak = advance_streak(0, request.is_correct);
            let review = needs_review(streak);
            state
                .db
                .insert_review_status(
                    player_id,
                    request.question_id,
                    request.category_id,
                    streak,
                    request.is_correct,
                    review,
                )
                .await?;
            (streak, review)
        }
    };

    Ok(RecordAttemptResponse {
        correct_streak: streak,
        needs_review: review,
    })
}

/// Per-category completion and mistake stats for one player.
pub async fn overview(state: &AppState, player_id: Uuid) -> Result<ProgressResponse> {
    let categories = state.db.list_categories().await?;
    let counts = state.db.count_questions_by_category().await?;
    let statuses = state.db.list_review_statuses(player_id).await?;

    let count_by_category: HashMap<Uuid, i64> = counts
        .into_iter()
        .map(|c| (c.category_id, c.question_count))
        .collect();

    let mut progress = Vec::with_capacity(categories.len());
    for category in &categories {
        let total = count_by_category.get(&category.id).copied().unwrap_or(0) as usize;
        let answered = statuses
            .iter()
            .filter(|s| s.category_id == category.id)
            .count();
        let completion = if total > 0 {
            answered as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        progress.push(CategoryProgress {
            category_id: category.id,
            total_questions: total,
            answered_questions: answered,
            completion_percentage: completion,
        });
    }

    let mistakes = MistakeStats {
        total_mistakes: statuses
            .iter()
            .filter(|s| s.total_attempts > s.correct_attempts)
            .count(),
        questions_needing_review: statuses.iter().filter(|s| s.needs_review).count(),
    };

    Ok(ProgressResponse {
        categories: progress,
        mistakes,
    })
}
