//! Liveness route handler

use axum::Json;
use chrono::{Local, SecondsFormat};
use serde::Serialize;

/// Status reported while the service is up
pub const HEALTH_STATUS: &str = "ML Service Running";

/// Response for the health check
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    /// Current local time, ISO-8601 with offset
    pub timestamp: String,
}

/// Health check handler
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS.to_string(),
        timestamp: Local::now().to_rfc3339_opts(SecondsFormat::Micros, false),
    })
}
