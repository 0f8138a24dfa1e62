use thiserror::Error;

/// Failure talking to the gateway
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid gateway configuration: {0}")]
    Config(String),

    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("gateway returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("could not decode gateway response for '{table}': {reason}")]
    Decode { table: &'static str, reason: String },

    #[error("malformed Content-Range header '{0}'")]
    ContentRange(String),
}
