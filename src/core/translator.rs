// ============================================================================
// msgcat - Translator
// ============================================================================
//
// File: src/core/translator.rs
// Role: Generic message lookup
// Boundaries:
//   - ✅ Locale selection (explicit or resolver)
//   - ✅ Lenient lookup with base-locale and key fallback
//   - ✅ Strict lookup with typed errors
//   - ❌ Should not contain template contents
//   - ❌ Should not contain request-based detection
//
// ============================================================================

use crate::core::formatter::{first_missing_param, format_message};
use crate::core::runtime::{CurrentLocale, LocaleResolver};
use crate::core::table::MessageTable;
use crate::error::{I18nError, Result};
use crate::models::locale::Locale;
use crate::models::message::{MessageOptions, Params};

/// A message table bound to a locale resolver
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a, R> {
    table: &'a MessageTable,
    resolver: R,
}

impl Translator<'static, CurrentLocale> {
    /// Compiled-in table with the process-wide current locale
    pub fn global() -> Self {
        Self::new(MessageTable::global(), CurrentLocale)
    }
}

impl<'a, R: LocaleResolver> Translator<'a, R> {
    pub fn new(table: &'a MessageTable, resolver: R) -> Self {
        Self { table, resolver }
    }

    pub fn table(&self) -> &'a MessageTable {
        self.table
    }

    /// Locale a call with these options renders in
    pub fn target_locale(&self, options: &MessageOptions) -> Locale {
        options.locale.unwrap_or_else(|| self.resolver.resolve())
    }

    /// Localized message.
    ///
    /// Missing in the target locale: base locale template. Missing everywhere:
    /// the key itself.
    pub fn translate(&self, key: &str, params: &Params, options: &MessageOptions) -> String {
        let locale = self.target_locale(options);
        match self.table.resolve(key, locale) {
            Some((found, template)) => {
                if found != locale {
                    tracing::debug!(key, requested = %locale, "using base locale template");
                }
                format_message(template, params)
            }
            None => {
                tracing::warn!(key, locale = %locale, "unknown message key");
                key.to_string()
            }
        }
    }

    /// Localized message without fallback.
    ///
    /// Fails when the key has no template for `locale` or when the template
    /// names a placeholder `params` does not supply.
    pub fn try_translate(&self, key: &str, params: &Params, locale: Locale) -> Result<String> {
        let template = self
            .table
            .get(key, locale)
            .ok_or_else(|| I18nError::MissingMessage {
                key: key.to_string(),
                locale,
            })?;

        if let Some(param) = first_missing_param(template, params) {
            return Err(I18nError::MissingParam {
                key: key.to_string(),
                param,
            });
        }

        Ok(format_message(template, params))
    }
}

/// Localized message from the compiled-in table and current locale
pub fn translate(key: &str, params: &Params, options: &MessageOptions) -> String {
    Translator::global().translate(key, params, options)
}

/// Strict lookup in the compiled-in table
pub fn try_translate(key: &str, params: &Params, locale: Locale) -> Result<String> {
    Translator::global().try_translate(key, params, locale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::runtime::FixedLocale;
    use crate::i18n::MessageSource;

    const EN: MessageSource = &[
        ("welcome", "Welcome back, {username}!"),
        ("only_en", "English only"),
    ];
    const BG: MessageSource = &[("welcome", "Добре дошъл, {username}!")];

    fn table() -> MessageTable {
        MessageTable::from_sources([(Locale::En, EN), (Locale::Bg, BG)])
    }

    #[test]
    fn resolver_supplies_default_locale() {
        let table = table();
        let translator = Translator::new(&table, FixedLocale(Locale::Bg));
        let params = Params::new().with("username", "alice");

        assert_eq!(
            translator.translate("welcome", &params, &MessageOptions::default()),
            "Добре дошъл, alice!"
        );
    }

    #[test]
    fn explicit_locale_wins_over_resolver() {
        let table = table();
        let translator = Translator::new(&table, FixedLocale(Locale::Bg));
        let params = Params::new().with("username", "alice");

        assert_eq!(
            translator.translate("welcome", &params, &MessageOptions::locale(Locale::En)),
            "Welcome back, alice!"
        );
    }

    #[test]
    fn missing_translation_uses_base_locale() {
        let table = table();
        let translator = Translator::new(&table, FixedLocale(Locale::Bg));
        assert_eq!(
            translator.translate("only_en", &Params::new(), &MessageOptions::default()),
            "English only"
        );
    }

    #[test]
    fn unknown_key_returns_key() {
        let table = table();
        let translator = Translator::new(&table, FixedLocale(Locale::Ru));
        assert_eq!(
            translator.translate("nope", &Params::new(), &MessageOptions::default()),
            "nope"
        );
    }

    #[test]
    fn strict_lookup_reports_missing_translation() {
        let table = table();
        let translator = Translator::new(&table, FixedLocale(Locale::En));
        let err = translator
            .try_translate("only_en", &Params::new(), Locale::Bg)
            .unwrap_err();
        assert!(matches!(
            err,
            I18nError::MissingMessage { ref key, locale: Locale::Bg } if key == "only_en"
        ));
    }

    #[test]
    fn strict_lookup_reports_missing_param() {
        let table = table();
        let translator = Translator::new(&table, FixedLocale(Locale::En));
        let err = translator
            .try_translate("welcome", &Params::new(), Locale::En)
            .unwrap_err();
        assert!(matches!(err, I18nError::MissingParam { ref param, .. } if param == "username"));
        assert_eq!(err.to_string(), "message 'welcome' requires parameter 'username'");
    }

    #[test]
    fn strict_lookup_formats_when_complete() {
        let table = table();
        let translator = Translator::new(&table, FixedLocale(Locale::En));
        let params = Params::new().with("username", "bob");
        assert_eq!(
            translator.try_translate("welcome", &params, Locale::Bg).unwrap(),
            "Добре дошъл, bob!"
        );
    }
}
