//! Route handlers organized by resource

pub mod companies;
pub mod health;
pub mod industries;
pub mod locations;

use axum::Router;

use super::state::AppState;

/// Every route served below `/api/v1`
pub fn api_router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(companies::router())
        .merge(industries::router())
        .merge(locations::router())
}
