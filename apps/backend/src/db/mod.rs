//! PostgreSQL database operations

use sqlx::{postgres::PgPoolOptions, PgPool, Row};
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;

/// Database wrapper with connection pool
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect to PostgreSQL and create connection pool
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Run database migrations
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| ApiError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Player Repository ===

    /// Create a new player with generated token
    pub async fn create_player(&self, name: Option<&str>) -> Result<Player> {
        let token = Uuid::new_v4().to_string();
        let player = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO players (token, name)
            VALUES ($1, $2)
            RETURNING id, token, name, created_at, last_seen_at
            "#,
        )
        .bind(&token)
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(player)
    }

    /// Get player by token
    pub async fn get_player_by_token(&self, token: &str) -> Result<Option<Player>> {
        let player = sqlx::query_as::<_, Player>(
            r#"
            SELECT id, token, name, created_at, last_seen_at
            FROM players
            WHERE token = $1
            "#,
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(player)
    }

    /// Update player last_seen_at timestamp
    pub async fn update_last_seen(&self, player_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE players
            SET last_seen_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(player_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // === Category Repository ===

    /// List all categories in display order
    pub async fn list_categories(&self) -> Result<Vec<DbCategory>> {
        let categories = sqlx::query_as::<_, DbCategory>(
            r#"
            SELECT id, name, description, order_index, created_at
            FROM categories
            ORDER BY order_index
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    // === Question Repository ===

    /// Get question by ID, answer key included
    pub async fn get_question(&self, question_id: Uuid) -> Result<Option<DbQuestion>> {
        let question = sqlx::query_as::<_, DbQuestion>(
            r#"
            SELECT id, category_id, question_text, question_type, difficulty_level,
                   points_value, correct_answer, options, explanation, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// List questions, newest first, optionally filtered by category
    pub async fn list_questions(&self, category_id: Option<Uuid>) -> Result<Vec<DbQuestion>> {
        let questions = match category_id {
            Some(category_id) => {
                sqlx::query_as::<_, DbQuestion>(
                    r#"
                    SELECT id, category_id, question_text, question_type, difficulty_level,
                           points_value, correct_answer, options, explanation, created_at
                    FROM questions
                    WHERE category_id = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(category_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, DbQuestion>(
                    r#"
                    SELECT id, category_id, question_text, question_type, difficulty_level,
                           points_value, correct_answer, options, explanation, created_at
                    FROM questions
                    ORDER BY created_at DESC
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(questions)
    }

    /// Count questions per category
    pub async fn count_questions_by_category(&self) -> Result<Vec<CategoryQuestionCount>> {
        let counts = sqlx::query_as::<_, CategoryQuestionCount>(
            r#"
            SELECT category_id, COUNT(*) AS question_count
            FROM questions
            GROUP BY category_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(counts)
    }

    /// Get the stored answer key of a fill-in-the-blank exercise.
    /// Exercises share the question ID space; rows only exist for
    /// questions authored through the exercise editor.
    pub async fn get_fill_blank_answers(&self, question_id: Uuid) -> Result<Option<String>> {
        let row = sqlx::query(
            r#"
            SELECT answers
            FROM fill_blank_exercises
            WHERE id = $1
            "#,
        )
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.get("answers")))
    }

    // === Review Status Repository ===

    /// Get review status for one player and question
    pub async fn get_review_status(
        &self,
        player_id: Uuid,
        question_id: Uuid,
    ) -> Result<Option<DbReviewStatus>> {
        let status = sqlx::query_as::<_, DbReviewStatus>(
            r#"
            SELECT id, player_id, question_id, category_id, correct_streak,
                   total_attempts, correct_attempts, needs_review, last_attempted_at, created_at
            FROM question_review_status
            WHERE player_id = $1 AND question_id = $2
            "#,
        )
        .bind(player_id)
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(status)
    }

    /// List all review statuses for a player
    pub async fn list_review_statuses(&self, player_id: Uuid) -> Result<Vec<DbReviewStatus>> {
        let statuses = sqlx::query_as::<_, DbReviewStatus>(
            r#"
            SELECT id, player_id, question_id, category_id, correct_streak,
                   total_attempts, correct_attempts, needs_review, last_attempted_at, created_at
            FROM question_review_status
            WHERE player_id = $1
            "#,
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(statuses)
    }

    /// Record the first attempt at a question
    pub async fn insert_review_status(
        &self,
        player_id: Uuid,
        question_id: Uuid,
        category_id: Uuid,
        correct_streak: i32,
        was_correct: bool,
        needs_review: bool,
    ) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO question_review_status
                (player_id, question_id, category_id, correct_streak,
                 total_attempts, correct_attempts, needs_review, last_attempted_at)
            VALUES ($1, $2, $3, $4, 1, $5, $6, NOW())
            "#,
        )
        .bind(player_id)
        .bind(question_id)
        .bind(category_id)
        .bind(correct_streak)
        .bind(if was_correct { 1 } else { 0 })
        .bind(needs_review)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Record a repeat attempt at a question
    pub async fn update_review_status(
        &self,
        status_id: Uuid,
        correct_streak: i32,
        was_correct: bool,
        needs_review: bool,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE question_review_status
            SET correct_streak = $2,
                total_attempts = total_attempts + 1,
                correct_attempts = correct_attempts + $3,
                needs_review = $4,
                last_attempted_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(status_id)
        .bind(correct_streak)
        .bind(if was_correct { 1 } else { 0 })
        .bind(needs_review)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
