// ============================================================================
// msgcat - CLI List Command
// ============================================================================
//
// File: src/cli/list.rs
// Role: List catalog messages in one locale
// Boundaries:
//   - ✅ Key filtering by glob pattern
//   - ✅ Table / JSON output selection
//   - ❌ Should not contain lookup logic
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;
use glob::Pattern;

use crate::ui::summary::{self, MessageRow};
use msgcat::core::table::MessageTable;
use msgcat::utils::logger::Logger;
use msgcat::{get_locale, Locale};

/// List messages in a locale
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Locale to list (defaults to the current locale)
    #[arg(long)]
    pub lang: Option<Locale>,

    /// Only keys matching a glob pattern, e.g. "sell_*"
    #[arg(long)]
    pub filter: Option<String>,

    /// Output format (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,
}

pub fn handle_list(args: ListArgs) -> Result<()> {
    let locale = args.lang.unwrap_or_else(get_locale);
    let pattern = args
        .filter
        .as_deref()
        .map(Pattern::new)
        .transpose()
        .context("Invalid filter pattern")?;

    let rows = collect_rows(MessageTable::global(), locale, pattern.as_ref());
    if rows.is_empty() && args.format != "json" {
        Logger::warn("No messages match");
        return Ok(());
    }

    summary::output_results(&args.format, rows.as_slice(), summary::print_message_table)?;

    if args.format != "json" {
        let fallbacks = rows.iter().filter(|r| r.fallback).count();
        Logger::info(format!(
            "{} messages in {} ({} from {})",
            rows.len(),
            locale,
            fallbacks,
            Locale::BASE
        ));
    }
    Ok(())
}

fn collect_rows(table: &MessageTable, locale: Locale, pattern: Option<&Pattern>) -> Vec<MessageRow> {
    table
        .keys()
        .filter(|key| pattern.map_or(true, |p| p.matches(key)))
        .filter_map(|key| {
            let (found, template) = table.resolve(key, locale)?;
            Some(MessageRow {
                key: key.to_string(),
                locale,
                text: template.to_string(),
                fallback: found != locale,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgcat::i18n::MessageSource;

    const EN: MessageSource = &[("nav_home", "Home"), ("sell_title", "Sell"), ("sell_price", "Price")];
    const BG: MessageSource = &[("nav_home", "Начало"), ("sell_title", "Продай")];

    fn table() -> MessageTable {
        MessageTable::from_sources([(Locale::En, EN), (Locale::Bg, BG)])
    }

    #[test]
    fn filters_by_glob() {
        let pattern = Pattern::new("sell_*").unwrap();
        let rows = collect_rows(&table(), Locale::Bg, Some(&pattern));
        let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["sell_price", "sell_title"]);
    }

    #[test]
    fn no_match_renders_empty_json_array() {
        let pattern = Pattern::new("checkout_*").unwrap();
        let rows = collect_rows(&table(), Locale::Bg, Some(&pattern));
        assert!(rows.is_empty());
        assert_eq!(summary::render_json(rows.as_slice()).unwrap(), "[]");
    }

    #[test]
    fn marks_base_locale_fallbacks() {
        let rows = collect_rows(&table(), Locale::Bg, None);
        let price = rows.iter().find(|r| r.key == "sell_price").unwrap();
        assert!(price.fallback);
        assert_eq!(price.text, "Price");
        let home = rows.iter().find(|r| r.key == "nav_home").unwrap();
        assert!(!home.fallback);
        assert_eq!(home.text, "Начало");
    }
}
