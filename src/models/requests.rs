//! Request DTOs for the onboarding service API
//!
//! Defines the structure of incoming query parameters. Onboarding bodies
//! are read as raw JSON and checked by the validation schema instead.

use serde::Deserialize;

/// Query parameters for POST /onboarding/validate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LanguageQuery {
    /// Language for error messages, overrides `Accept-Language`
    #[serde(default)]
    pub lang: Option<String>,
}

impl LanguageQuery {
    /// Returns the requested language if one was given and is non-empty.
    pub fn language(&self) -> Option<&str> {
        self.lang.as_deref().map(str::trim).filter(|l| !l.is_empty())
    }
}
