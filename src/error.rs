//! Error types for the wealth advisor

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {

    // =============================
    // Service Errors
    // =============================

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Speech synthesis error: {0}")]
    SynthesisError(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParseError(#[from] std::net::AddrParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
