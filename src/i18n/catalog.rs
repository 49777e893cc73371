//! In-memory message catalog
//!
//! Ships English and Arabic messages for the keys the validators use.

use std::collections::HashMap;

use super::{Translator, INVALID_DATE, INVALID_NUMBER, TITLE_REQUIRED};

/// Table-backed [`Translator`].
///
/// Lookups match the primary language subtag case-insensitively, so `ar-EG`
/// and `AR` both resolve to `ar`. An unknown language falls back to the
/// catalog's default language; an unknown key resolves to the key itself.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_language: String,
    messages: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Creates an empty catalog falling back to `default_language`.
    pub fn empty(default_language: impl Into<String>) -> Self {
        Self {
            default_language: normalize(&default_language.into()),
            messages: HashMap::new(),
        }
    }

    /// Adds or replaces one message.
    pub fn insert(
        &mut self,
        language: &str,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> &mut Self {
        self.messages
            .entry(normalize(language))
            .or_default()
            .insert(key.into(), message.into());
        self
    }

    /// Language used when a lookup names one the catalog does not know.
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&String> {
        self.messages.get(language).and_then(|table| table.get(key))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let mut catalog = Self::empty("en");
        catalog
            .insert("en", TITLE_REQUIRED, "Title is required")
            .insert("en", INVALID_NUMBER, "Must be a valid whole number")
            .insert("en", INVALID_DATE, "Must be a valid date")
            .insert("ar", TITLE_REQUIRED, "العنوان مطلوب")
            .insert("ar", INVALID_NUMBER, "يجب أن يكون رقمًا صحيحًا")
            .insert("ar", INVALID_DATE, "يجب أن يكون تاريخًا صالحًا");
        catalog
    }
}

impl Translator for Catalog {
    fn get_translation(&self, language: &str, key: &str) -> String {
        self.lookup(&normalize(language), key)
            .or_else(|| self.lookup(&self.default_language, key))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}

fn normalize(language: &str) -> String {
    language
        .trim()
        .split(&['-', '_'][..])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_lookup() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.get_translation("en", TITLE_REQUIRED),
            "Title is required"
        );
    }

    #[test]
    fn test_region_subtag_and_case_are_ignored() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get_translation("AR-eg", TITLE_REQUIRED), "العنوان مطلوب");
        assert_eq!(catalog.get_translation("en_US", INVALID_NUMBER), "Must be a valid whole number");
    }

    #[test]
    fn test_unknown_language_falls_back() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get_translation("fr", INVALID_DATE), "Must be a valid date");
    }

    #[test]
    fn test_unknown_key_returns_key() {
        let catalog = Catalog::default();
        assert_eq!(catalog.get_translation("en", "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_insert_overrides() {
        let mut catalog = Catalog::empty("de");
        catalog.insert("de", TITLE_REQUIRED, "Titel fehlt");
        assert_eq!(catalog.default_language(), "de");
        assert_eq!(catalog.get_translation("xx", TITLE_REQUIRED), "Titel fehlt");
    }
}
