/// Configuration errors for topsaas-core.
///
/// Library crates get structured errors; the `topsaas` binary wraps them
/// with `anyhow` context.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A numeric setting could not be parsed
    #[error("Invalid value for {key}: '{value}' is not a valid number")]
    InvalidNumber { key: &'static str, value: String },

    /// A required setting is empty
    #[error("Missing required setting '{key}'")]
    Missing { key: &'static str },

    /// The gateway URL is not a usable http(s) URL
    #[error("Invalid URL for {key}: {reason}")]
    InvalidUrl { key: &'static str, reason: String },

    /// host/port do not form a socket address
    #[error("Invalid bind address '{addr}'")]
    InvalidBindAddr { addr: String },

    /// The env file given explicitly could not be loaded
    #[error("Failed to load env file {path:?}: {reason}")]
    EnvFile { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
