// ============================================================================
// msgcat - Message Tables
// ============================================================================
//
// File: src/i18n/mod.rs
// Role: Per-language message tables and the lookup macro
// Boundaries:
//   - ✅ Per-language table registration
//   - ✅ Lookup macro definition
//   - ❌ Should not contain template contents (see per-language files)
//   - ❌ Should not contain lookup or fallback logic
//
// ============================================================================

pub mod bg;
pub mod en;
pub mod ru;
pub mod ua;

use crate::models::locale::Locale;

/// Raw table of one language: `(key, template)` pairs
pub type MessageSource = &'static [(&'static str, &'static str)];

/// Table for a locale
pub fn messages_for(locale: Locale) -> MessageSource {
    match locale {
        Locale::En => en::MESSAGES,
        Locale::Bg => bg::MESSAGES,
        Locale::Ru => ru::MESSAGES,
        Locale::Ua => ua::MESSAGES,
    }
}

/// Every locale with its table
pub fn sources() -> Vec<(Locale, MessageSource)> {
    Locale::all()
        .iter()
        .map(|&locale| (locale, messages_for(locale)))
        .collect()
}

/// Translate a message key.
///
/// ```ignore
/// t!("nav_home");
/// t!("dashboard_welcomeBack", username = "alice");
/// t!("dashboard_welcomeBack", username = "alice"; Locale::Bg);
/// ```
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::translate($key, &$crate::Params::new(), &$crate::MessageOptions::default())
    };
    ($key:expr; $locale:expr) => {
        $crate::translate($key, &$crate::Params::new(), &$crate::MessageOptions::locale($locale))
    };
    ($key:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $crate::translate(
            $key,
            &$crate::Params::new()$(.with(stringify!($name), &$value))+,
            &$crate::MessageOptions::default(),
        )
    };
    ($key:expr, $($name:ident = $value:expr),+; $locale:expr) => {
        $crate::translate(
            $key,
            &$crate::Params::new()$(.with(stringify!($name), &$value))+,
            &$crate::MessageOptions::locale($locale),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tables_have_unique_keys() {
        for (locale, source) in sources() {
            let mut seen = HashSet::new();
            for (key, _) in source {
                assert!(seen.insert(*key), "duplicate key '{key}' in {locale}");
            }
        }
    }

    #[test]
    fn every_key_exists_in_base_table() {
        let base: HashSet<&str> = messages_for(Locale::BASE).iter().map(|(k, _)| *k).collect();
        for (locale, source) in sources() {
            for (key, _) in source {
                assert!(base.contains(key), "'{key}' in {locale} has no base entry");
            }
        }
    }
}
