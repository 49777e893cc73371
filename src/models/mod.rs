//! Request and Response models for the onboarding service API
//!
//! This module defines the validated onboarding shape and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod onboarding;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use onboarding::OnboardingRecord;
pub use requests::LanguageQuery;
pub use responses::{ErrorResponse, HealthResponse, ValidationErrorResponse};
