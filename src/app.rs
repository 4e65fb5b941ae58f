use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::gemini::GeminiClient;
use crate::recommendation::RecommendationService;
use crate::routes::create_routes;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub recommendations: Arc<RecommendationService>,
}

/// Initialize tracing and logging for the application
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "corporate_ai_svc=info,tower_http=debug,axum::rejection=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Create and configure the Axum application with all routes and middleware
pub fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    info!("Initializing application router");

    let api_key_loaded = config.gemini.has_api_key();
    info!("Gemini API key loaded: {}", api_key_loaded);
    if !api_key_loaded {
        warn!("GEMINI_API_KEY is not set; recommendations will fall back until it is configured");
    }

    let client = GeminiClient::new(&config.gemini)?;
    info!(
        "Gemini client initialized (timeout {} ms)",
        config.gemini.timeout_ms
    );

    let state = AppState {
        recommendations: Arc::new(RecommendationService::new(
            Arc::new(client),
            config.instruction_preamble.clone(),
        )),
    };

    Ok(build_router(state))
}

/// Attach routes and middleware to an already-built state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(create_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
