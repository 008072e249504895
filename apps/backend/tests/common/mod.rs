//! Common test utilities and fixtures for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - TestContext for setting up test environment with database
//! - Helper functions for seeding quiz content
//! - Authentication helpers
//!
//! # Requirements
//! Integration tests require a PostgreSQL database (set DATABASE_URL env var).

pub mod fixtures;

use std::sync::Arc;

use axum::Router;
use uuid::Uuid;

use glossaki_backend::db::Database;
use glossaki_backend::models::MatchPolicy;
use glossaki_backend::{build_router, AppState};

/// Test context containing database connection and test server.
///
/// Use this to set up integration tests with a real database connection.
/// Requires DATABASE_URL environment variable to be set.
pub struct TestContext {
    pub db: Arc<Database>,
    app: Router,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Panics
    /// Panics if DATABASE_URL is not set or database connection fails.
    pub async fn new() -> Self {
        dotenvy::dotenv().ok();

        let database_url =
            std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

        let db = Database::connect(&database_url)
            .await
            .expect("Failed to connect to test database");

        db.run_migrations().await.expect("Failed to run migrations");

        let db = Arc::new(db);

        let state = AppState {
            db: db.clone(),
            policy: MatchPolicy::default(),
        };

        let app = build_router(state);

        Self { db, app }
    }

    /// Get the router for use with axum-test.
    pub fn router(&self) -> Router {
        self.app.clone()
    }

    /// Create a test player and return its ID and token.
    pub async fn create_test_player(&self, name: Option<&str>) -> (Uuid, String) {
        let player = self
            .db
            .create_player(name)
            .await
            .expect("Failed to create test player");
        (player.id, player.token)
    }

    /// Format authorization header value.
    pub fn auth_header_value(token: &str) -> String {
        format!("Bearer {}", token)
    }

    /// Seed a category and return its ID.
    pub async fn seed_category(&self, name: &str, order_index: i32) -> Uuid {
        let row: (Uuid,) = sqlx::query_as(
            "INSERT INTO categories (name, order_index) VALUES ($1, $2) RETURNING id",
        )
        .bind(name)
        .bind(order_index)
        .fetch_one(self.db.pool())
        .await
        .expect("Failed to seed category");
        row.0
    }

    /// Seed a question and return its ID.
    pub async fn seed_question(
        &self,
        category_id: Uuid,
        question_type: &str,
        question_text: &str,
        correct_answer: &str,
    ) -> Uuid {
        let row: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO questions (category_id, question_text, question_type, correct_answer)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(category_id)
        .bind(question_text)
        .bind(question_type)
        .bind(correct_answer)
        .fetch_one(self.db.pool())
        .await
        .expect("Failed to seed question");
        row.0
    }

    /// Seed a fill-in-the-blank exercise row for a question.
    pub async fn seed_fill_blank_exercise(&self, question_id: Uuid, answers: &str) {
        sqlx::query("INSERT INTO fill_blank_exercises (id, answers) VALUES ($1, $2)")
            .bind(question_id)
            .bind(answers)
            .execute(self.db.pool())
            .await
            .expect("Failed to seed fill-blank exercise");
    }

    /// Clean up test data for a player.
    ///
    /// Call this after tests to remove test data.
    pub async fn cleanup_player(&self, player_id: Uuid) {
        let _ = sqlx::query("DELETE FROM question_review_status WHERE player_id = $1")
            .bind(player_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(player_id)
            .execute(self.db.pool())
            .await;
    }

    /// Clean up a seeded category and everything hanging off it.
    pub async fn cleanup_category(&self, category_id: Uuid) {
        let _ = sqlx::query(
            r#"
            DELETE FROM fill_blank_exercises
            WHERE id IN (SELECT id FROM questions WHERE category_id = $1)
            "#,
        )
        .bind(category_id)
        .execute(self.db.pool())
        .await;

        let _ = sqlx::query("DELETE FROM questions WHERE category_id = $1")
            .bind(category_id)
            .execute(self.db.pool())
            .await;

        let _ = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(category_id)
            .execute(self.db.pool())
            .await;
    }
}
