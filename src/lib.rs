//! Onboarding Service - request validation and temp upload housekeeping
//!
//! Provides a localized validator for onboarding content and a background
//! task that reclaims stale temporary upload files.

pub mod api;
pub mod config;
pub mod error;
pub mod i18n;
pub mod models;
pub mod tasks;
pub mod validation;

pub use api::AppState;
pub use config::Config;
pub use tasks::{ReaperHandle, TempFileReaper};
pub use validation::{OnboardingSchema, Validator};
