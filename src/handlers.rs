use crate::app::AppState;
use crate::error::AppResult;
use crate::models::{HealthResponse, RecommendationRequest, RecommendationResponse};
use axum::{
    extract::{Json, State, rejection::JsonRejection},
    response::Json as ResponseJson,
};
use tracing::{debug, info};

/// Health check handler
/// Returns the service status and health information
pub async fn health_check() -> AppResult<ResponseJson<HealthResponse>> {
    debug!("Health check endpoint called");

    let response = HealthResponse::ok();

    info!("Health check successful");
    Ok(ResponseJson(response))
}

/// Corporate insurance recommendation handler.
/// Always answers 200 with some reply once the body parses; upstream failures
/// surface as the fallback text.
pub async fn recommendation_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<ResponseJson<RecommendationResponse>> {
    let Json(payload) = payload?;
    info!("Recommendation endpoint called with input: {}", payload.input);

    let reply = state.recommendations.recommend(&payload.input).await;

    info!("Returning recommendation reply ({} chars)", reply.len());
    Ok(ResponseJson(RecommendationResponse::new(reply)))
}
