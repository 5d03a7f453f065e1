use thiserror::Error;

/// Errors that can occur while converting a HAR capture to a JMeter plan.
#[derive(Error, Debug)]
pub enum Har2JmxError {
    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from invalid HAR content.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error for malformed entry URLs.
    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration file error.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for har2jmx operations.
pub type Result<T> = std::result::Result<T, Har2JmxError>;
