//! Industry endpoints

use axum::{extract::State, routing::get, Json, Router};
use topsaas_core::IndustryRead;

use crate::http::error::ApiError;
use crate::http::state::AppState;
use crate::services;

/// GET /industries - all industries ordered by name
async fn list_industries(
    State(state): State<AppState>,
) -> Result<Json<Vec<IndustryRead>>, ApiError> {
    let industries = services::list_industries(state.industries()).await?;
    Ok(Json(industries))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/industries", get(list_industries))
}
