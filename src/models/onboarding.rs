//! Validated onboarding record
//!
//! The shape produced by [`crate::validation::OnboardingSchema`]. Nothing is
//! persisted here; the record only describes what passed validation.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Content shown to first-time users, with bilingual text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnboardingRecord {
    /// Primary display text
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_ar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_ar: Option<String>,
    /// Ordering key, `0` when the input carried none
    pub sort_id: i64,
    /// Soft-delete marker.
    ///
    /// `None` when the input omitted the field, `Some(None)` for an explicit
    /// `null`, `Some(Some(ts))` for a timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Option<DateTime<Utc>>>,
}

impl OnboardingRecord {
    /// Creates a record with only the required title set.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            title_ar: None,
            subtitle: None,
            subtitle_ar: None,
            content: None,
            content_ar: None,
            sort_id: 0,
            deleted_at: None,
        }
    }

    /// True when the record carries a soft-delete timestamp.
    pub fn is_deleted(&self) -> bool {
        matches!(self.deleted_at, Some(Some(_)))
    }
}
