//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::http::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub environment: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let info = state.info();
    Json(HealthResponse {
        status: "healthy",
        version: info.version.clone(),
        environment: info.environment.clone(),
        timestamp: Utc::now(),
    })
}

/// Health routes
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
