//! API Handlers
//!
//! HTTP request handlers for each onboarding service endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::{header::ACCEPT_LANGUAGE, HeaderMap},
    Json,
};
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::i18n::{Catalog, Translator};
use crate::models::{HealthResponse, LanguageQuery, OnboardingRecord};
use crate::validation::{OnboardingSchema, Validator};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Message lookup for validation errors
    pub translator: Arc<dyn Translator>,
    /// Language used when a request names none
    pub default_language: String,
}

impl AppState {
    /// Creates a new AppState with the given translator.
    pub fn new(translator: Arc<dyn Translator>, default_language: impl Into<String>) -> Self {
        Self {
            translator,
            default_language: default_language.into(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses the built-in message catalog.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(Arc::new(Catalog::default()), config.default_language.clone())
    }

    /// Builds an onboarding schema for `language`.
    pub fn onboarding_schema(&self, language: &str) -> OnboardingSchema {
        OnboardingSchema::new(language, Arc::clone(&self.translator))
    }

    /// Picks the message language: query parameter, then `Accept-Language`,
    /// then the configured default.
    pub fn language_for<'a>(&'a self, query: &'a LanguageQuery, headers: &'a HeaderMap) -> &'a str {
        query
            .language()
            .or_else(|| preferred_language(headers))
            .unwrap_or(self.default_language.as_str())
    }
}

/// First concrete language tag of the `Accept-Language` header.
fn preferred_language(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(ACCEPT_LANGUAGE)?
        .to_str()
        .ok()?
        .split(',')
        .filter_map(|tag| tag.split(';').next())
        .map(str::trim)
        .find(|tag| !tag.is_empty() && *tag != "*")
}

/// Handler for POST /onboarding/validate
///
/// Validates the JSON body and echoes the validated record, or returns the
/// localized field errors.
pub async fn validate_onboarding_handler(
    State(state): State<AppState>,
    Query(query): Query<LanguageQuery>,
    headers: HeaderMap,
    body: std::result::Result<Json<Value>, JsonRejection>,
) -> Result<Json<OnboardingRecord>> {
    let Json(input) = body.map_err(|rejection| ApiError::InvalidRequest(rejection.body_text()))?;

    let schema = state.onboarding_schema(state.language_for(&query, &headers));
    let record = schema.validate(&input)?;

    Ok(Json(record))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
