use serde::{Deserialize, Serialize};

/// Request payload for the recommendation endpoint.
///
/// A missing `input` is read as an empty question.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub input: String,
}

/// Response payload for the recommendation endpoint
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub response: String,
}

/// Response payload for the health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            message: "Service is healthy".to_string(),
        }
    }
}

impl RecommendationResponse {
    pub fn new(response: String) -> Self {
        Self { response }
    }
}
