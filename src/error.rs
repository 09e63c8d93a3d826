use thiserror::Error;

/// Failure of a single API exchange.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Non-2xx response. Displays the raw body so it can be surfaced verbatim.
    #[error("{body}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid request: {0}")]
    Encode(String),
}

/// Create-form input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill required fields.")]
    MissingRequired { fields: Vec<&'static str> },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Config error: unknown log level '{0}'")]
    LogLevel(String),
}
