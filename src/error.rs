//! Error types for the sales_forecast crate

use thiserror::Error;

/// Errors that can occur while building a series or generating a forecast
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Too few valid observations remain after cleaning
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to internal length/shape validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error serializing a forecast result
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
