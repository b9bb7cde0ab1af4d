// ============================================================================
// msgcat - Catalog Auditor
// ============================================================================
//
// File: src/core/audit.rs
// Role: Completeness and consistency checks of a message table
// Boundaries:
//   - ✅ Missing keys per locale
//   - ✅ Empty templates
//   - ✅ Placeholder differences against the base locale
//   - ❌ Should not contain output formatting
//   - ❌ Should not modify the table
//
// ============================================================================

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::core::formatter::placeholders;
use crate::core::table::MessageTable;
use crate::models::locale::Locale;

/// Placeholder difference between a translation and the base template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceholderMismatch {
    pub key: String,
    pub locale: Locale,
    /// Used by the translation but never supplied for the base template
    pub unknown: Vec<String>,
    /// Supplied for the base template but unused by the translation
    pub unused: Vec<String>,
}

impl PlaceholderMismatch {
    /// Unknown placeholders render literally, unused ones are only lossy
    pub fn is_error(&self) -> bool {
        !self.unknown.is_empty()
    }
}

/// Template with no visible text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyMessage {
    pub key: String,
    pub locale: Locale,
}

/// Audit result
#[derive(Debug, Clone, Default, Serialize)]
pub struct AuditReport {
    /// Number of keys in the table
    pub total_keys: usize,
    /// Audited locales
    pub locales: Vec<Locale>,
    /// Keys without a template, per locale
    pub missing: BTreeMap<Locale, Vec<String>>,
    /// Keys with a template but no base template
    pub orphaned: Vec<String>,
    pub empty: Vec<EmptyMessage>,
    pub placeholder_mismatches: Vec<PlaceholderMismatch>,
}

impl AuditReport {
    /// No missing, orphaned or empty messages and no unknown placeholders
    pub fn is_clean(&self) -> bool {
        self.missing_count() == 0
            && self.orphaned.is_empty()
            && self.empty.is_empty()
            && !self.placeholder_mismatches.iter().any(|m| m.is_error())
    }

    pub fn missing_count(&self) -> usize {
        self.missing.values().map(Vec::len).sum()
    }

    /// Share of keys translated for a locale, in percent
    pub fn coverage(&self, locale: Locale) -> f64 {
        if self.total_keys == 0 {
            return 100.0;
        }
        let missing = self.missing.get(&locale).map_or(0, Vec::len);
        (self.total_keys - missing) as f64 * 100.0 / self.total_keys as f64
    }
}

/// Audits a message table
pub struct CatalogAuditor<'a> {
    table: &'a MessageTable,
    locales: Vec<Locale>,
}

impl<'a> CatalogAuditor<'a> {
    pub fn new(table: &'a MessageTable) -> Self {
        Self {
            table,
            locales: Locale::all().to_vec(),
        }
    }

    /// Restrict the audit to some locales
    pub fn with_locales(mut self, locales: &[Locale]) -> Self {
        self.locales = locales.to_vec();
        self
    }

    pub fn audit(&self) -> AuditReport {
        let mut report = AuditReport {
            total_keys: self.table.len(),
            locales: self.locales.clone(),
            ..Default::default()
        };

        for key in self.table.keys() {
            let Some(templates) = self.table.templates(key) else {
                continue;
            };
            let base = templates.get(&Locale::BASE);
            if base.is_none() {
                report.orphaned.push(key.to_string());
            }
            let base_placeholders = base.map(|t| placeholders(t));

            for &locale in &self.locales {
                let Some(template) = templates.get(&locale) else {
                    report
                        .missing
                        .entry(locale)
                        .or_default()
                        .push(key.to_string());
                    continue;
                };

                if template.trim().is_empty() {
                    report.empty.push(EmptyMessage {
                        key: key.to_string(),
                        locale,
                    });
                }

                if let Some(expected) = &base_placeholders {
                    if let Some(mismatch) = compare_placeholders(key, locale, expected, template) {
                        report.placeholder_mismatches.push(mismatch);
                    }
                }
            }
        }

        tracing::debug!(
            keys = report.total_keys,
            missing = report.missing_count(),
            mismatches = report.placeholder_mismatches.len(),
            "catalog audited"
        );
        report
    }
}

fn compare_placeholders(
    key: &str,
    locale: Locale,
    expected: &BTreeSet<String>,
    template: &str,
) -> Option<PlaceholderMismatch> {
    let found = placeholders(template);
    if &found == expected {
        return None;
    }
    Some(PlaceholderMismatch {
        key: key.to_string(),
        locale,
        unknown: found.difference(expected).cloned().collect(),
        unused: expected.difference(&found).cloned().collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageSource;

    const EN: MessageSource = &[
        ("a", "Alpha"),
        ("b", "{count} photo{s}"),
        ("c", "Hi {name}"),
    ];
    const BG: MessageSource = &[("a", "Алфа"), ("b", "{count} снимки"), ("c", "Здр {nmae}")];
    const RU: MessageSource = &[("a", " "), ("d", "orphan")];

    fn report() -> AuditReport {
        let table = MessageTable::from_sources([
            (Locale::En, EN),
            (Locale::Bg, BG),
            (Locale::Ru, RU),
        ]);
        CatalogAuditor::new(&table)
            .with_locales(&[Locale::En, Locale::Bg, Locale::Ru])
            .audit()
    }

    #[test]
    fn finds_missing_and_orphaned_keys() {
        let report = report();
        assert_eq!(report.total_keys, 4);
        assert_eq!(report.missing[&Locale::Ru], vec!["b", "c"]);
        assert_eq!(report.missing[&Locale::En], vec!["d"]);
        assert_eq!(report.missing[&Locale::Bg], vec!["d"]);
        assert_eq!(report.orphaned, vec!["d"]);
        assert!(!report.is_clean());
    }

    #[test]
    fn finds_empty_templates() {
        let report = report();
        assert_eq!(
            report.empty,
            vec![EmptyMessage {
                key: "a".to_string(),
                locale: Locale::Ru
            }]
        );
    }

    #[test]
    fn classifies_placeholder_mismatches() {
        let report = report();
        let b = report
            .placeholder_mismatches
            .iter()
            .find(|m| m.key == "b")
            .unwrap();
        assert_eq!(b.unused, vec!["s"]);
        assert!(b.unknown.is_empty());
        assert!(!b.is_error());

        let c = report
            .placeholder_mismatches
            .iter()
            .find(|m| m.key == "c")
            .unwrap();
        assert_eq!(c.unknown, vec!["nmae"]);
        assert_eq!(c.unused, vec!["name"]);
        assert!(c.is_error());
    }

    #[test]
    fn complete_table_is_clean() {
        let table = MessageTable::from_sources([(Locale::En, EN)]);
        let report = CatalogAuditor::new(&table).with_locales(&[Locale::En]).audit();
        assert!(report.is_clean());
        assert_eq!(report.coverage(Locale::En), 100.0);
    }

    #[test]
    fn coverage_counts_missing_keys() {
        let report = report();
        assert_eq!(report.coverage(Locale::Ru), 50.0);
    }
}
