//! HTTP layer
//!
//! Axum server with:
//! - `/api/v1` routes for health, companies, industries and locations
//! - CORS from configured origins
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;
pub mod state;

pub use error::ApiError;
pub use server::{build_router, run_server, ServerConfig, ServerError};
pub use state::{AppInfo, AppState};
