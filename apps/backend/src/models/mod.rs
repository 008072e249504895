//! Database models and API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

// Re-export shared types from glossaki-core
pub use glossaki_core::types::{MatchPolicy, QuestionType};
pub use glossaki_core::validate::BlankValidation;

// === Database Entity Types ===

/// Registered player
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Player {
    pub id: Uuid,
    pub token: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_seen_at: DateTime<Utc>,
}

/// Quiz category stored in PostgreSQL
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbCategory {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub order_index: i32,
    pub created_at: DateTime<Utc>,
}

/// Question stored in PostgreSQL, answer key included.
/// Never serialize this to a client; convert with [`DbQuestion::to_public`].
#[derive(Debug, Clone, Deserialize, FromRow)]
pub struct DbQuestion {
    pub id: Uuid,
    pub category_id: Uuid,
    pub question_text: String,
    pub question_type: String,
    pub difficulty_level: i32,
    pub points_value: i32,
    pub correct_answer: String,
    pub options: Option<String>,
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl DbQuestion {
    /// Convert to the client-safe view, stripping the answer key.
    pub fn to_public(&self) -> PublicQuestion {
        PublicQuestion {
            id: self.id,
            category_id: self.category_id,
            question_text: self.question_text.clone(),
            question_type: self.question_type.clone(),
            difficulty_level: self.difficulty_level,
            points_value: self.points_value,
            options: self
                .options
                .as_deref()
                .and_then(|raw| serde_json::from_str(raw).ok()),
            explanation: self.explanation.clone(),
            created_at: self.created_at,
        }
    }
}

/// Client-facing question view. Carries everything the game screens
/// need except the answer key, which stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: Uuid,
    pub category_id: Uuid,
    pub question_text: String,
    pub question_type: String,
    pub difficulty_level: i32,
    pub points_value: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Per-player review state of one question
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbReviewStatus {
    pub id: Uuid,
    pub player_id: Uuid,
    pub question_id: Uuid,
    pub category_id: Uuid,
    pub correct_streak: i32,
    pub total_attempts: i32,
    pub correct_attempts: i32,
    pub needs_review: bool,
    pub last_attempted_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Question count per category (for progress aggregation)
#[derive(Debug, Clone, FromRow)]
pub struct CategoryQuestionCount {
    pub category_id: Uuid,
    pub question_count: i64,
}

// === API Request/Response Types ===

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerRegisterRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerRegisterResponse {
    pub player_id: Uuid,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerStatusResponse {
    pub player_id: Uuid,
    pub last_seen_at: DateTime<Utc>,
}

// Content types

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryListResponse {
    pub categories: Vec<DbCategory>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionListQuery {
    pub category_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionListResponse {
    pub questions: Vec<PublicQuestion>,
}

// Validation types

/// Answer submitted for a non-blank question. True/false questions send
/// a boolean, everything else a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserAnswer {
    Bool(bool),
    Text(String),
}

impl UserAnswer {
    /// Text form used for comparison against the stored answer.
    pub fn as_text(&self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateAnswerRequest {
    pub question_id: Uuid,
    pub question_type: QuestionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answer: Option<UserAnswer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_answers: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateAnswerResponse {
    pub is_correct: bool,
    pub similarity: f64,
    /// Human-readable join of the answer key, shown after grading.
    pub correct_answer: String,
    pub feedback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_blank_results: Option<Vec<bool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_blanks: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answers: Option<Vec<String>>,
}

// Progress types

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordAttemptRequest {
    pub question_id: Uuid,
    pub category_id: Uuid,
    pub is_correct: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordAttemptResponse {
    pub correct_streak: i32,
    pub needs_review: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryProgress {
    pub category_id: Uuid,
    pub total_questions: usize,
    pub answered_questions: usize,
    pub completion_percentage: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MistakeStats {
    pub total_mistakes: usize,
    pub questions_needing_review: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub categories: Vec<CategoryProgress>,
    pub mistakes: MistakeStats,
}
