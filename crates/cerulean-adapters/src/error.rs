//! Error types for the adapters

use thiserror::Error;

/// Errors that can occur while normalizing a remote call
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdapterError {
    /// The remote call itself failed
    #[error("Service error: {0}")]
    Service(String),

    /// The remote response violated the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The chat service returned no choices
    #[error("Empty response: the service returned no choices")]
    EmptyResponse,
}

impl AdapterError {
    /// Wrap a provider error
    pub fn service(err: impl std::fmt::Display) -> Self {
        AdapterError::Service(err.to_string())
    }
}
