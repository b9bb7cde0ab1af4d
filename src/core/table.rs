// ============================================================================
// msgcat - Message Table
// ============================================================================
//
// File: src/core/table.rs
// Role: Nested `key -> locale -> template` map
// Boundaries:
//   - ✅ One-time construction from per-language tables
//   - ✅ Exact and base-fallback template resolution
//   - ✅ Key and locale enumeration
//   - ❌ Should not contain placeholder formatting
//   - ❌ Should not contain current-locale state
//
// ============================================================================

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use crate::i18n::{self, MessageSource};
use crate::models::locale::Locale;

/// Templates of one key, per locale
pub type LocaleTemplates = HashMap<Locale, &'static str>;

/// Read-only message table
#[derive(Debug, Default)]
pub struct MessageTable {
    entries: BTreeMap<&'static str, LocaleTemplates>,
}

impl MessageTable {
    /// Build a table from per-language sources.
    ///
    /// A key repeated within one source keeps its last template.
    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = (Locale, MessageSource)>,
    {
        let mut entries: BTreeMap<&'static str, LocaleTemplates> = BTreeMap::new();
        for (locale, source) in sources {
            for &(key, template) in source {
                entries.entry(key).or_default().insert(locale, template);
            }
        }
        tracing::debug!(keys = entries.len(), "message table built");
        Self { entries }
    }

    /// Table built from the compiled-in languages, initialized on first use
    pub fn global() -> &'static MessageTable {
        static TABLE: OnceLock<MessageTable> = OnceLock::new();
        TABLE.get_or_init(|| MessageTable::from_sources(i18n::sources()))
    }

    /// Template for exactly this locale
    pub fn get(&self, key: &str, locale: Locale) -> Option<&'static str> {
        self.entries.get(key)?.get(&locale).copied()
    }

    /// Template for the locale, falling back to the base locale.
    ///
    /// Returns the locale the template actually came from.
    pub fn resolve(&self, key: &str, locale: Locale) -> Option<(Locale, &'static str)> {
        let templates = self.entries.get(key)?;
        if let Some(template) = templates.get(&locale) {
            return Some((locale, *template));
        }
        templates
            .get(&Locale::BASE)
            .map(|template| (Locale::BASE, *template))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Templates of one key
    pub fn templates(&self, key: &str) -> Option<&LocaleTemplates> {
        self.entries.get(key)
    }

    /// Locales that translate a key, in `Locale::all()` order
    pub fn locales_for(&self, key: &str) -> Vec<Locale> {
        match self.entries.get(key) {
            Some(templates) => Locale::all()
                .iter()
                .copied()
                .filter(|locale| templates.contains_key(locale))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN: MessageSource = &[("greet", "Hello"), ("only_en", "English only")];
    const BG: MessageSource = &[("greet", "Здравей")];

    fn table() -> MessageTable {
        MessageTable::from_sources([(Locale::En, EN), (Locale::Bg, BG)])
    }

    #[test]
    fn exact_lookup_does_not_fall_back() {
        let table = table();
        assert_eq!(table.get("greet", Locale::Bg), Some("Здравей"));
        assert_eq!(table.get("only_en", Locale::Bg), None);
        assert_eq!(table.get("missing", Locale::En), None);
    }

    #[test]
    fn resolve_falls_back_to_base_locale() {
        let table = table();
        assert_eq!(table.resolve("greet", Locale::Bg), Some((Locale::Bg, "Здравей")));
        assert_eq!(
            table.resolve("only_en", Locale::Bg),
            Some((Locale::En, "English only"))
        );
        assert_eq!(table.resolve("missing", Locale::Bg), None);
    }

    #[test]
    fn enumerates_keys_and_locales() {
        let table = table();
        assert_eq!(table.len(), 2);
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["greet", "only_en"]);
        assert_eq!(table.locales_for("greet"), vec![Locale::En, Locale::Bg]);
        assert_eq!(table.locales_for("only_en"), vec![Locale::En]);
        assert!(table.locales_for("missing").is_empty());
    }

    #[test]
    fn global_table_is_built_once() {
        let first = MessageTable::global() as *const MessageTable;
        let second = MessageTable::global() as *const MessageTable;
        assert_eq!(first, second);
        assert!(MessageTable::global().contains_key("nav_home"));
    }
}
