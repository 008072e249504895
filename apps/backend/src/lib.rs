pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use glossaki_core::MatchPolicy;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::Database;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub policy: MatchPolicy,
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url).await?;

    tracing::info!("Running migrations...");
    db.run_migrations().await?;

    let state = AppState {
        db: Arc::new(db),
        policy: match_policy_from_env(),
    };

    let app = build_router(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the full router with auth-protected routes.
pub fn build_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        // Content routes
        .route("/api/categories", get(routes::categories::list))
        .route("/api/questions", get(routes::questions::list))
        // Validation route - the answer key never leaves the server
        .route("/api/validate-answer", post(routes::validate::validate))
        // Progress routes
        .route("/api/progress", get(routes::progress::overview))
        .route("/api/progress/attempt", post(routes::progress::record_attempt))
        // Player routes
        .route("/api/players/status", get(routes::players::status))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            routes::auth::auth_middleware,
        ));

    Router::new()
        .route("/health", get(health_check))
        .route("/api/players/register", post(routes::players::register))
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Match policy with an optional threshold override from the environment.
fn match_policy_from_env() -> MatchPolicy {
    let mut policy = MatchPolicy::default();
    if let Ok(raw) = std::env::var("FUZZY_THRESHOLD") {
        match raw.parse::<f64>() {
            Ok(threshold) if (0.0..=1.0).contains(&threshold) => policy.threshold = threshold,
            _ => tracing::warn!("Ignoring invalid FUZZY_THRESHOLD value: {}", raw),
        }
    }
    policy
}

async fn health_check() -> &'static str {
    "OK"
}
