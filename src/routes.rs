use crate::app::AppState;
use crate::handlers::{health_check, recommendation_handler};
use axum::{Router, routing::get, routing::post};

pub const RECOMMENDATION_PATH: &str = "/api/ai/corporate-recommendation";

/// Creates and configures all application routes
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_check))
        .route(RECOMMENDATION_PATH, post(recommendation_handler))
}
