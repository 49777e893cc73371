//! Validation Module
//!
//! Field-by-field request validation with localized error messages.
//!
//! A validator is built per language and reports every failing field as
//! data instead of stopping at the first one.

mod dates;
mod errors;
mod schema;


pub use dates::parse_timestamp;
pub use errors::{FieldError, FieldErrorKind, ValidationErrors};
pub use schema::OnboardingSchema;

use serde_json::Value;

/// Checks an untyped input value and produces a typed one.
pub trait Validator {
    /// Typed value produced from valid input
    type Output;

    /// Validates `input`, returning the typed value or every field error.
    fn validate(&self, input: &Value) -> Result<Self::Output, ValidationErrors>;

    /// Validates `input` and returns only the field errors (empty when valid).
    fn errors(&self, input: &Value) -> Vec<FieldError> {
        match self.validate(input) {
            Ok(_) => Vec::new(),
            Err(errors) => errors.into_inner(),
        }
    }

    /// True when `input` passes validation.
    fn is_valid(&self, input: &Value) -> bool {
        self.validate(input).is_ok()
    }
}
