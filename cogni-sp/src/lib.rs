//! cogni-sp library - CogniGrasp study processor service
//!
//! JSON API over the shared processing pipeline: submit study text, browse
//! processed materials, inspect usage statistics and administer the subject
//! configuration catalog.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/process", post(api::process_study_material))
        .route("/api/materials", get(api::list_materials))
        .route("/api/materials/:id", get(api::get_material))
        .route("/api/stats", get(api::get_stats))
        .route("/api/interaction", post(api::log_interaction))
        .route("/api/subject-configs", get(api::list_subject_configs))
        .route(
            "/api/subject-configs/:subject",
            get(api::get_subject_config).put(api::update_subject_config),
        )
        .merge(api::health_routes())
        .with_state(state)
        .layer(CorsLayer::permissive())
}
