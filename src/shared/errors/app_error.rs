use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// No response was received (connect, DNS, timeout, truncated body)
    #[error("Transport error: {0}")]
    TransportError(String),

    /// The service answered with a non-success status
    #[error("Service error ({status}): {message}")]
    ServiceError { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::TransportError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::TransportError("Failed to connect to catalog service".to_string())
        } else if let Some(status) = err.status() {
            match status.as_u16() {
                404 => AppError::NotFound("Catalog resource not found".to_string()),
                code => AppError::ServiceError {
                    status: code,
                    message: status
                        .canonical_reason()
                        .unwrap_or("Unexpected status")
                        .to_string(),
                },
            }
        } else if err.is_decode() {
            AppError::SerializationError(err.to_string())
        } else {
            AppError::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::StorageError(err.to_string())
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
