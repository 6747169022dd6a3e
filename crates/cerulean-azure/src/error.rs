//! Error types for Azure providers.

use crate::config::ConfigError;
use thiserror::Error;

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, AzureError>;

/// Errors that can occur while calling an Azure AI service
#[derive(Error, Debug)]
pub enum AzureError {
    /// Required configuration missing or invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// Service answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Service error message, or the raw body when it has none
        message: String,
    },

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Reading a local image failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for AzureError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AzureError::InvalidResponse(e.to_string())
        } else {
            AzureError::Communication(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AzureError {
    fn from(e: serde_json::Error) -> Self {
        AzureError::InvalidResponse(format!("JSON parsing error: {}", e))
    }
}
