//! Translation Module
//!
//! Message lookup used to localize validation errors.

mod catalog;

pub use catalog::Catalog;

// == Message Keys ==
/// Message shown when the onboarding title is missing or not text
pub const TITLE_REQUIRED: &str = "onBoarding_title_required";

/// Message shown when a numeric field is not an integer
pub const INVALID_NUMBER: &str = "invalidNumber";

/// Message shown when a date field cannot be read as a timestamp
pub const INVALID_DATE: &str = "invalidDate";

/// Resolves a message key into text for a language.
///
/// Implementations are opaque lookups; callers never inspect the token.
pub trait Translator: Send + Sync {
    /// Returns the message for `key` in `language`.
    fn get_translation(&self, language: &str, key: &str) -> String;
}
