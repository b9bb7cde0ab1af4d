// ============================================================================
// msgcat - Locale Runtime
// ============================================================================
//
// File: src/core/runtime.rs
// Role: Process-wide current locale and the resolver seam
// Boundaries:
//   - ✅ Current locale get / set / apply
//   - ✅ `LocaleResolver` implementations
//   - ❌ Should not contain request-based detection
//   - ❌ Should not contain table lookup
//
// ============================================================================

use std::sync::RwLock;

use crate::models::locale::Locale;

/// Process-wide current locale
static CURRENT_LOCALE: RwLock<Locale> = RwLock::new(Locale::BASE);

/// Source of the locale used when a call does not name one
pub trait LocaleResolver {
    fn resolve(&self) -> Locale;
}

/// Resolves to the process-wide current locale
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentLocale;

impl LocaleResolver for CurrentLocale {
    fn resolve(&self) -> Locale {
        get_locale()
    }
}

/// Always resolves to one locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedLocale(pub Locale);

impl LocaleResolver for FixedLocale {
    fn resolve(&self) -> Locale {
        self.0
    }
}

impl<F> LocaleResolver for F
where
    F: Fn() -> Locale,
{
    fn resolve(&self) -> Locale {
        self()
    }
}

/// Current locale
pub fn get_locale() -> Locale {
    // A poisoned lock still holds a valid Locale.
    match CURRENT_LOCALE.read() {
        Ok(guard) => *guard,
        Err(poisoned) => *poisoned.into_inner(),
    }
}

/// Replace the current locale
pub fn set_locale(locale: Locale) {
    let mut guard = match CURRENT_LOCALE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if *guard != locale {
        tracing::debug!(from = %*guard, to = %locale, "current locale changed");
    }
    *guard = locale;
}

/// Set the current locale from a code; unknown codes leave it unchanged
pub fn apply_locale(code: &str) -> bool {
    match Locale::from_code(code) {
        Some(locale) => {
            set_locale(locale);
            true
        }
        None => {
            tracing::debug!(code, "ignoring unsupported locale");
            false
        }
    }
}

/// Whether a code names a supported locale
pub fn is_locale(code: &str) -> bool {
    Locale::from_code(code).is_some()
}

/// Supported locales
pub fn locales() -> &'static [Locale] {
    Locale::all()
}

pub fn base_locale() -> Locale {
    Locale::BASE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_resolver_ignores_current_locale() {
        assert_eq!(FixedLocale(Locale::Ru).resolve(), Locale::Ru);
    }

    #[test]
    fn closures_are_resolvers() {
        let resolver = || Locale::Ua;
        assert_eq!(resolver.resolve(), Locale::Ua);
    }

    #[test]
    fn recognizes_supported_codes() {
        assert!(is_locale("bg"));
        assert!(is_locale("UA"));
        assert!(!is_locale("uk"));
        assert!(!is_locale(""));
        assert_eq!(locales().len(), 4);
        assert_eq!(base_locale(), Locale::En);
    }
}
