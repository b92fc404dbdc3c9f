//! Late-fee error types.

use feedesk_shared::AppError;
use thiserror::Error;

/// Errors raised while configuring or evaluating late fees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LateFeeError {
    /// The late-fee configuration cannot be used.
    #[error("Invalid late fee configuration: {0}")]
    InvalidConfiguration(String),

    /// An input supplied by the caller is malformed.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl LateFeeError {
    /// Returns the HTTP-style status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidConfiguration(_) => 422,
            Self::Validation(_) => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<LateFeeError> for AppError {
    fn from(err: LateFeeError) -> Self {
        match err {
            LateFeeError::InvalidConfiguration(msg) => Self::Configuration(msg),
            LateFeeError::Validation(msg) => Self::Validation(msg),
        }
    }
}
