//! Server-side grading of submitted answers.
//!
//! The answer key is fetched and compared here, behind the trust
//! boundary; the client only ever sees the graded result.

use glossaki_core::{
    parse_answer_key, validate_blanks, BlankValidation, FeedbackTier, MatchResult, QuestionType,
};

use crate::error::Result;
use crate::models::{UserAnswer, ValidateAnswerRequest, ValidateAnswerResponse};
use crate::AppState;

// User-facing feedback strings; the game UI is Greek.
pub const FEEDBACK_CORRECT: &str = "Σωστό!";
pub const FEEDBACK_NEAR_CORRECT: &str = "Σχεδόν σωστό";
pub const FEEDBACK_WRONG: &str = "Λάθος.";
pub const FEEDBACK_ALL_BLANKS_WRONG: &str = "Λάθος απάντηση";
pub const FEEDBACK_SOME_BLANKS_WRONG: &str = "Μερική απάντηση";
pub const FEEDBACK_VALIDATION_FAILED: &str = "Σφάλμα επικύρωσης απάντησης";

/// Grade one submitted answer against the stored key.
pub async fn grade_submission(
    state: &AppState,
    request: &ValidateAnswerRequest,
) -> Result<ValidateAnswerResponse> {
    match request.question_type {
        QuestionType::FillInTheBlank => grade_fill_blank(state, request).await,
        _ => grade_simple(state, request).await,
    }
}

/// Grade a fill-in-the-blank submission with fuzzy per-blank matching.
async fn grade_fill_blank(
    state: &AppState,
    request: &ValidateAnswerRequest,
) -> Result<ValidateAnswerResponse> {
    // Exercise rows win; legacy questions keep the key in correct_answer.
    let raw_key = match state.db.get_fill_blank_answers(request.question_id).await? {
        Some(raw) => Some(raw),
        None => state
            .db
            .get_question(request.question_id)
            .await?
            .map(|q| q.correct_answer),
    };

    let key = match raw_key.as_deref().map(parse_answer_key) {
        Some(Ok(key)) => key,
        _ => {
            tracing::warn!("No answer key found for question {}", request.question_id);
            return Ok(failure_response());
        }
    };

    let user_answers = request.user_answers.clone().unwrap_or_default();
    let validation = validate_blanks(&user_answers, &key, &state.policy);

    tracing::debug!(
        "Graded question {}: {}/{} blanks correct",
        request.question_id,
        validation.correct_count,
        validation.total_blanks
    );

    Ok(ValidateAnswerResponse {
        is_correct: validation.is_correct,
        similarity: validation.overall_similarity.unwrap_or(0.0),
        correct_answer: key.join(", "),
        feedback: blank_feedback(&validation).to_string(),
        per_blank_results: Some(validation.per_blank_results),
        correct_count: Some(validation.correct_count),
        total_blanks: Some(validation.total_blanks),
        correct_answers: Some(key),
    })
}

/// Grade true-false, multiple-choice and matching submissions by
/// straight comparison; no fuzzy tolerance for picked options.
async fn grade_simple(
    state: &AppState,
    request: &ValidateAnswerRequest,
) -> Result<ValidateAnswerResponse> {
    let question = match state.db.get_question(request.question_id).await? {
        Some(question) => question,
        None => {
            tracing::warn!("Question {} not found", request.question_id);
            return Ok(failure_response());
        }
    };

    let submitted = request
        .user_answer
        .as_ref()
        .map(UserAnswer::as_text)
        .unwrap_or_default();

    let is_correct = match request.question_type {
        QuestionType::TrueFalse => {
            submitted.to_lowercase() == question.correct_answer.to_lowercase()
        }
        _ => submitted == question.correct_answer,
    };

    Ok(ValidateAnswerResponse {
        is_correct,
        similarity: if is_correct { 1.0 } else { 0.0 },
        correct_answer: question.correct_answer,
        feedback: if is_correct {
            FEEDBACK_CORRECT.to_string()
        } else {
            FEEDBACK_WRONG.to_string()
        },
        per_blank_results: None,
        correct_count: None,
        total_blanks: None,
        correct_answers: None,
    })
}

/// Feedback line for a multi-blank result. The three similarity tiers
/// apply to a full match; partial credit gets its own wording.
fn blank_feedback(validation: &BlankValidation) -> &'static str {
    let tier = FeedbackTier::from_result(&MatchResult {
        is_match: validation.is_correct,
        similarity: validation.overall_similarity.unwrap_or(0.0),
    });

    match tier {
        FeedbackTier::Correct => FEEDBACK_CORRECT,
        FeedbackTier::NearCorrect => FEEDBACK_NEAR_CORRECT,
        FeedbackTier::Incorrect => {
            if validation.correct_count == 0 {
                FEEDBACK_ALL_BLANKS_WRONG
            } else {
                FEEDBACK_SOME_BLANKS_WRONG
            }
        }
    }
}

/// Well-formed "incorrect" payload for a failed answer-key lookup.
/// Served with HTTP 200 so the client renders feedback uniformly
/// instead of branching on transport errors.
fn failure_response() -> ValidateAnswerResponse {
    ValidateAnswerResponse {
        is_correct: false,
        similarity: 0.0,
        correct_answer: String::new(),
        feedback: FEEDBACK_VALIDATION_FAILED.to_string(),
        per_blank_results: Some(Vec::new()),
        correct_count: Some(0),
        total_blanks: Some(0),
        correct_answers: Some(Vec::new()),
    }
}
