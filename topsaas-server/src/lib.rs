//! topsaas-server: read API over the Top SaaS directory
//!
//! Layers, outermost first:
//! - http: axum routes, error mapping, CORS, graceful shutdown
//! - services: response shaping and pagination metadata
//! - repos: one trait per table, gateway-backed implementations
//! - gateway: PostgREST client over reqwest

pub mod gateway;
pub mod http;
pub mod repos;
pub mod services;

pub use gateway::{GatewayClient, GatewayError};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
