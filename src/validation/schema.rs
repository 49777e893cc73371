//! Onboarding request schema
//!
//! Builds a validator bound to one language so error messages are localized
//! without touching any shared validator state.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Number, Value};

use super::{parse_timestamp, FieldError, FieldErrorKind, ValidationErrors, Validator};
use crate::i18n::{Translator, INVALID_DATE, INVALID_NUMBER, TITLE_REQUIRED};
use crate::models::OnboardingRecord;

// == Field Names ==
const TITLE: &str = "title";
const SORT_ID: &str = "sort_id";
const DELETED_AT: &str = "deleted_at";

/// Optional text fields, in declaration order.
const TEXT_FIELDS: [&str; 5] = ["title_ar", "subtitle", "subtitle_ar", "content", "content_ar"];

/// Validator for onboarding request bodies in one language.
#[derive(Clone)]
pub struct OnboardingSchema {
    language: String,
    translator: Arc<dyn Translator>,
}

impl OnboardingSchema {
    /// Creates a schema whose messages are resolved for `language`.
    pub fn new(language: impl Into<String>, translator: Arc<dyn Translator>) -> Self {
        Self {
            language: language.into(),
            translator,
        }
    }

    /// Language token this schema localizes messages for.
    pub fn language(&self) -> &str {
        &self.language
    }

    fn message(&self, key: &str) -> String {
        self.translator.get_translation(&self.language, key)
    }

    fn check_title(&self, object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> String {
        match object.get(TITLE) {
            Some(Value::String(title)) if !title.is_empty() => title.clone(),
            // Missing, empty and wrong-typed titles share one message.
            _ => {
                errors.push(FieldError::new(
                    TITLE,
                    FieldErrorKind::Required,
                    self.message(TITLE_REQUIRED),
                ));
                String::new()
            }
        }
    }

    fn check_sort_id(&self, object: &Map<String, Value>, errors: &mut Vec<FieldError>) -> i64 {
        let Some(value) = object.get(SORT_ID) else {
            return 0;
        };

        integer_value(value).unwrap_or_else(|| {
            errors.push(FieldError::new(
                SORT_ID,
                FieldErrorKind::InvalidNumber,
                self.message(INVALID_NUMBER),
            ));
            0
        })
    }

    fn check_deleted_at(
        &self,
        object: &Map<String, Value>,
        errors: &mut Vec<FieldError>,
    ) -> Option<Option<DateTime<Utc>>> {
        let value = object.get(DELETED_AT)?;

        let parsed = match value {
            Value::Null => return Some(None),
            Value::String(s) => parse_timestamp(s),
            Value::Number(n) => epoch_millis(n),
            _ => None,
        };

        match parsed {
            Some(ts) => Some(Some(ts)),
            None => {
                errors.push(FieldError::new(
                    DELETED_AT,
                    FieldErrorKind::InvalidDate,
                    self.message(INVALID_DATE),
                ));
                None
            }
        }
    }
}

impl fmt::Debug for OnboardingSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OnboardingSchema")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Validator for OnboardingSchema {
    type Output = OnboardingRecord;

    fn validate(&self, input: &Value) -> Result<OnboardingRecord, ValidationErrors> {
        let Some(object) = input.as_object() else {
            return Err(ValidationErrors::new(vec![FieldError::type_mismatch(
                "value",
                "an object",
            )]));
        };

        let mut errors = Vec::new();

        let title = self.check_title(object, &mut errors);
        let [title_ar, subtitle, subtitle_ar, content, content_ar] =
            TEXT_FIELDS.map(|field| optional_text(object, field, &mut errors));
        let sort_id = self.check_sort_id(object, &mut errors);
        let deleted_at = self.check_deleted_at(object, &mut errors);

        if !errors.is_empty() {
            return Err(ValidationErrors::new(errors));
        }

        Ok(OnboardingRecord {
            title,
            title_ar,
            subtitle,
            subtitle_ar,
            content,
            content_ar,
            sort_id,
            deleted_at,
        })
    }
}

fn optional_text(
    object: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match object.get(field)? {
        Value::String(s) => Some(s.clone()),
        _ => {
            errors.push(FieldError::type_mismatch(field, "a string"));
            None
        }
    }
}

/// Whole number from a JSON number or numeric string.
///
/// Integral floats (`3.0`) and numeric strings (`"7"`) are converted;
/// fractions, non-numeric values and out-of-range numbers are rejected.
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn integral(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
}

/// Already-typed timestamp given as milliseconds since the Unix epoch.
fn epoch_millis(n: &Number) -> Option<DateTime<Utc>> {
    let millis = n
        .as_i64()
        .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))?;
    DateTime::from_timestamp_millis(millis)
}
