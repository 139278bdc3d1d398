// --- File: crates/parkify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by the Parkify crates.
///
/// Crates with their own error enums convert into this one at the HTTP edge.
#[derive(Error, Debug)]
pub enum ParkifyError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred while reading or writing persisted bookings
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Error returned by an upstream service
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., resource already exists)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),
}

/// Maps an error to the HTTP status code it should be reported with.
pub trait HttpStatusCode {
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ParkifyError {
    fn status_code(&self) -> u16 {
        match self {
            ParkifyError::HttpError(_) => 500,
            ParkifyError::ParseError(_) => 400,
            ParkifyError::ConfigError(_) => 500,
            ParkifyError::ValidationError(_) => 400,
            ParkifyError::StorageError(_) => 500,
            ParkifyError::ExternalServiceError { .. } => 502,
            ParkifyError::ConflictError(_) => 409,
            ParkifyError::NotFoundError(_) => 404,
        }
    }
}

impl From<reqwest::Error> for ParkifyError {
    fn from(err: reqwest::Error) -> Self {
        ParkifyError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for ParkifyError {
    fn from(err: serde_json::Error) -> Self {
        ParkifyError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for ParkifyError {
    fn from(err: std::io::Error) -> Self {
        ParkifyError::StorageError(err.to_string())
    }
}

pub fn config_error<T: fmt::Display>(message: T) -> ParkifyError {
    ParkifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> ParkifyError {
    ParkifyError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> ParkifyError {
    ParkifyError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> ParkifyError {
    ParkifyError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> ParkifyError {
    ParkifyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
