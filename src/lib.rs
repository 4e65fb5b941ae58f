pub mod app;
pub mod config;
pub mod error;
pub mod gemini;
pub mod handlers;
pub mod models;
pub mod recommendation;
pub mod routes;

// Re-export key functions for convenience
pub use app::{AppState, build_router, create_app, init_tracing};
