//! Health check endpoint

use axum::Json;
use crewline_api::responses::{HealthResponse, HealthStatus};

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        version: crewline_api::API_VERSION.to_string(),
    })
}
