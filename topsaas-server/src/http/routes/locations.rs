//! Location endpoints

use axum::{extract::State, routing::get, Json, Router};
use topsaas_core::LocationRead;

use crate::http::error::ApiError;
use crate::http::state::AppState;
use crate::services;

/// GET /locations - all locations ordered by city
async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationRead>>, ApiError> {
    let locations = services::list_locations(state.locations()).await?;
    Ok(Json(locations))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/locations", get(list_locations))
}
