//! Error types for the onboarding service
//!
//! Provides unified error handling using thiserror.

use std::io;
use std::path::PathBuf;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::{ErrorResponse, ValidationErrorResponse};
use crate::validation::ValidationErrors;

// == API Error Enum ==
/// Errors surfaced to HTTP callers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body failed field validation
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Request could not be read (malformed JSON, wrong content type)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(errors) => {
                let body = Json(ValidationErrorResponse::from(errors));
                return (StatusCode::UNPROCESSABLE_ENTITY, body).into_response();
            }
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Reaper Error Enum ==
/// Operational failures of a temp cleanup tick.
///
/// These are logged and kept in the tick report; they never leave the tick.
#[derive(Error, Debug)]
pub enum ReaperError {
    /// The temp directory is missing or unreadable
    #[error("cannot read directory {}: {source}", path.display())]
    DirectoryAccess { path: PathBuf, source: io::Error },

    /// Metadata of a single entry could not be read
    #[error("cannot stat {}: {source}", path.display())]
    Stat { path: PathBuf, source: io::Error },

    /// A stale file could not be removed
    #[error("cannot delete {}: {source}", path.display())]
    Delete { path: PathBuf, source: io::Error },
}

impl ReaperError {
    /// Path the failed operation was acting on.
    pub fn path(&self) -> &PathBuf {
        match self {
            ReaperError::DirectoryAccess { path, .. }
            | ReaperError::Stat { path, .. }
            | ReaperError::Delete { path, .. } => path,
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for HTTP handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{FieldError, FieldErrorKind};

    #[test]
    fn test_validation_error_status() {
        let errors = ValidationErrors::new(vec![FieldError::new(
            "title",
            FieldErrorKind::Required,
            "Title is required",
        )]);
        let response = ApiError::from(errors).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_invalid_request_status() {
        let response = ApiError::InvalidRequest("bad json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_reaper_error_display_names_path() {
        let err = ReaperError::Delete {
            path: PathBuf::from("/srv/uploads/temp/a.tmp"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/srv/uploads/temp/a.tmp"));
        assert_eq!(err.path(), &PathBuf::from("/srv/uploads/temp/a.tmp"));
    }
}
