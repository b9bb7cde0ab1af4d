// ============================================================================
// msgcat - Message Call Data Model
// ============================================================================
//
// File: src/models/message.rs
// Role: Inputs of a message lookup
// Boundaries:
//   - ✅ Placeholder parameters
//   - ✅ Per-call options (explicit locale)
//   - ❌ Should not contain lookup or formatting logic
//
// ============================================================================

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::models::locale::Locale;

/// Values substituted into `{name}` placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, builder style
    pub fn with(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name, value);
        self
    }

    /// Add or replace a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: impl Display) {
        self.values.insert(name.into(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

/// Per-call lookup options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageOptions {
    /// Explicit locale; `None` uses the resolver's current locale
    pub locale: Option<Locale>,
}

impl MessageOptions {
    /// Options pinned to one locale
    pub fn locale(locale: Locale) -> Self {
        Self {
            locale: Some(locale),
        }
    }
}

impl From<Locale> for MessageOptions {
    fn from(locale: Locale) -> Self {
        Self::locale(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_stringifies_values() {
        let params = Params::new().with("count", 3).with("username", "alice");
        assert_eq!(params.get("count"), Some("3"));
        assert_eq!(params.get("username"), Some("alice"));
        assert_eq!(params.len(), 2);
        assert!(!params.contains("days"));
    }

    #[test]
    fn later_insert_replaces_value() {
        let mut params = Params::new().with("count", 1);
        params.insert("count", 2);
        assert_eq!(params.get("count"), Some("2"));
    }

    #[test]
    fn collects_from_pairs() {
        let params: Params = [("hours", 5), ("days", 2)].into_iter().collect();
        let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["days", "hours"]);
    }

    #[test]
    fn default_options_have_no_locale() {
        assert_eq!(MessageOptions::default().locale, None);
        assert_eq!(MessageOptions::from(Locale::Bg).locale, Some(Locale::Bg));
    }
}
