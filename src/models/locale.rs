// ============================================================================
// msgcat - Locale Data Model
// ============================================================================
//
// File: src/models/locale.rs
// Role: Supported language tags
// Boundaries:
//   - ✅ Closed set of locales and their codes
//   - ✅ Parsing and display
//   - ✅ Native display names
//   - ❌ Should not contain locale detection
//   - ❌ Should not contain the current-locale state
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::I18nError;

/// Supported locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English (base locale)
    En,
    /// Bulgarian
    Bg,
    /// Russian
    Ru,
    /// Ukrainian
    Ua,
}

impl Locale {
    /// Locale used when a key is missing in the requested locale
    pub const BASE: Locale = Locale::En;

    /// Language tag string
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Bg => "bg",
            Locale::Ru => "ru",
            Locale::Ua => "ua",
        }
    }

    /// Parse a language tag; case-insensitive, surrounding whitespace ignored
    pub fn from_code(code: &str) -> Option<Locale> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "bg" => Some(Locale::Bg),
            "ru" => Some(Locale::Ru),
            "ua" => Some(Locale::Ua),
            _ => None,
        }
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Bg => "Български",
            Locale::Ru => "Русский",
            Locale::Ua => "Українська",
        }
    }

    /// All supported locales, base locale first
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Bg, Locale::Ru, Locale::Ua]
    }

    pub fn is_base(&self) -> bool {
        *self == Self::BASE
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::BASE
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| I18nError::UnknownLocale(s.to_string()))
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!(Locale::from_code("BG"), Some(Locale::Bg));
        assert_eq!(Locale::from_code(" ua "), Some(Locale::Ua));
        assert_eq!(Locale::from_code("uk"), None);
        assert_eq!("ru".parse::<Locale>().unwrap(), Locale::Ru);
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert!(matches!(err, I18nError::UnknownLocale(ref code) if code == "fr"));
    }

    #[test]
    fn codes_round_trip_through_display() {
        for locale in Locale::all() {
            assert_eq!(Locale::from_code(&locale.to_string()), Some(*locale));
        }
    }

    #[test]
    fn base_locale_is_english_and_listed_first() {
        assert_eq!(Locale::default(), Locale::En);
        assert_eq!(Locale::all()[0], Locale::BASE);
        assert!(Locale::En.is_base());
        assert!(!Locale::Bg.is_base());
    }

    #[test]
    fn serializes_as_lowercase_code() {
        assert_eq!(serde_json::to_string(&Locale::Ua).unwrap(), "\"ua\"");
        let parsed: Locale = serde_json::from_str("\"bg\"").unwrap();
        assert_eq!(parsed, Locale::Bg);
    }
}
