//! Field-level validation errors

use serde::Serialize;
use thiserror::Error;

/// Category of a field failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Field is missing, `null`, or not of the required type
    Required,
    /// Field is present with the wrong JSON type
    TypeMismatch,
    /// Field is not a whole number
    InvalidNumber,
    /// Field cannot be read as a timestamp
    InvalidDate,
}

/// One failing field with its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    /// Non-localized message for a value of the wrong JSON type.
    pub fn type_mismatch(field: &str, expected: &str) -> Self {
        Self::new(
            field,
            FieldErrorKind::TypeMismatch,
            format!("\"{field}\" must be {expected}"),
        )
    }
}

/// Every field error produced by one validation run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("validation failed: {}", summarize(.0))]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// Errors reported against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.0.iter().filter(move |e| e.field == field)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
