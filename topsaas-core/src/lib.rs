//! topsaas-core: shared types for the Top SaaS directory API
//!
//! Holds everything that does not talk to the network:
//! - settings loaded from the environment / `.env`
//! - read models for companies, industries and locations
//! - pagination arithmetic and request validation

pub mod config;
pub mod error;
pub mod models;

pub use config::Settings;
pub use error::ConfigError;
pub use models::{
    CompanyFilter, CompanyRead, CompanyRecord, IndustryRead, LocationRead, PageRequest,
    Paginated, ValidationError,
};
