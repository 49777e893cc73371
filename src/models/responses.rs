//! Response DTOs for the onboarding service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::validation::{FieldError, ValidationErrors};

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for non-validation failures
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Response body for rejected onboarding input (422)
#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    /// Always "validation failed"
    pub error: String,
    /// Every failing field with its localized message
    pub fields: Vec<FieldError>,
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            error: "validation failed".to_string(),
            fields: errors.into_inner(),
        }
    }
}
