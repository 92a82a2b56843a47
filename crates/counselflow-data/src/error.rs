//! Error types for the data layer

use thiserror::Error;

/// Backend error types.
///
/// Raised by [`DataBackend`](crate::backend::DataBackend) implementations and
/// by configuration loading. Services never hand these to callers directly;
/// they are flattened into a [`ServiceError`].
#[derive(Debug, Error)]
pub enum BackendError {
    /// Required environment value absent or empty
    #[error("Missing required environment variable: {0}")]
    MissingEnv(&'static str),

    /// Configuration is present but unusable
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with a non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Backend answered with something we cannot interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Backend is not reachable or has been disabled
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_yaml::Error> for BackendError {
    fn from(e: serde_yaml::Error) -> Self {
        BackendError::Config(e.to_string())
    }
}

/// The single failure kind surfaced by services: an operation failed.
///
/// Carries only the operation label (e.g. "Get contracts") and a human
/// readable message. Callers cannot tell network, permission and
/// not-found failures apart.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {message}")]
pub struct ServiceError {
    /// Operation label, e.g. "Get contracts"
    pub operation: String,
    /// Underlying failure, rendered as text
    pub message: String,
}

impl ServiceError {
    /// Create a new operation failure.
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Result type for backend operations
pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// Result type for service operations
pub type Result<T> = std::result::Result<T, ServiceError>;
