//! Test fixtures and factory functions for request bodies.

use serde_json::json;
use uuid::Uuid;

/// Create a player register request body.
pub fn player_register_request(name: Option<&str>) -> serde_json::Value {
    match name {
        Some(n) => json!({ "name": n }),
        None => json!({}),
    }
}

/// Create a fill-in-the-blank validation request body.
pub fn validate_fill_blank_request(question_id: Uuid, answers: &[&str]) -> serde_json::Value {
    json!({
        "question_id": question_id,
        "question_type": "fill-in-the-blank",
        "user_answers": answers,
    })
}

/// Create a true-false validation request body.
pub fn validate_true_false_request(question_id: Uuid, answer: bool) -> serde_json::Value {
    json!({
        "question_id": question_id,
        "question_type": "true-false",
        "user_answer": answer,
    })
}

/// Create a multiple-choice validation request body.
pub fn validate_multiple_choice_request(question_id: Uuid, answer: &str) -> serde_json::Value {
    json!({
        "question_id": question_id,
        "question_type": "multiple-choice",
        "user_answer": answer,
    })
}

/// Create a record-attempt request body.
pub fn record_attempt_request(
    question_id: Uuid,
    category_id: Uuid,
    is_correct: bool,
) -> serde_json::Value {
    json!({
        "question_id": question_id,
        "category_id": category_id,
        "is_correct": is_correct,
    })
}
