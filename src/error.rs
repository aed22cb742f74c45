//! Error types for the archive client.

use thiserror::Error;

/// Result type for archive client operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;

/// Archive client errors.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Configuration error (client construction, invalid settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, DNS, TLS, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response from the snapshot service)
    #[error("API error: {0}")]
    Api(String),

    /// Parse error (response body was not valid JSON)
    #[error("Parse error: {0}")]
    Parse(String),
}
