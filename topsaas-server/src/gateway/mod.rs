//! REST-over-Postgres gateway client
//!
//! Speaks the PostgREST query grammar served under `{base}/rest/v1`:
//! column selection with embedded relations, `eq` filters, ordering,
//! offset/limit ranges and exact counts via `Content-Range`.

pub mod client;
pub mod error;
pub mod query;

pub use client::GatewayClient;
pub use error::GatewayError;
pub use query::TableQuery;
