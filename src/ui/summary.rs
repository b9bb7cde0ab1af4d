// ============================================================================
// msgcat - Result Summaries
// ============================================================================
//
// File: src/ui/summary.rs
// Role: Table rendering of command results
// Boundaries:
//   - ✅ Audit report tables
//   - ✅ Message listings
//   - ✅ Locale and detection summaries
//   - ❌ Should not contain audit or lookup logic
//   - ❌ Should not contain file operations
//
// ============================================================================

use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

use msgcat::core::audit::AuditReport;
use msgcat::core::detector::Detection;
use msgcat::utils::colors::Colors;
use msgcat::utils::constants::icons;
use msgcat::utils::logger::Logger;
use msgcat::utils::styles::TextStyles;
use msgcat::Locale;

const RULE: &str = "───────────────────────────────────────";

/// One row of a message listing
#[derive(Debug, Clone, Serialize)]
pub struct MessageRow {
    pub key: String,
    pub locale: Locale,
    pub text: String,
    /// Template came from the base locale
    pub fallback: bool,
}

/// Print a serializable value as pretty JSON, or run the table printer
pub fn output_results<T, F>(format: &str, data: &T, print_table: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> Result<()>,
{
    match format {
        "json" => {
            println!("{}", render_json(data)?);
        }
        _ => {
            print_table(data)?;
        }
    }
    let _ = io::stdout().flush();
    Ok(())
}

/// Pretty JSON form of a result
pub fn render_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

// ============================================================================
// Audit
// ============================================================================

/// Print an audit report
pub fn print_audit_report(report: &AuditReport, detail: bool) -> Result<()> {
    Logger::info("");
    Logger::info(TextStyles::bold("Catalog coverage"));
    Logger::info(RULE);

    for locale in &report.locales {
        let missing = report.missing.get(locale).map_or(0, Vec::len);
        let icon = if missing == 0 {
            Colors::success(icons::SUCCESS)
        } else {
            Colors::warn(icons::WARNING)
        };
        Logger::info(format!(
            "{} {} {:<11} {:>6.1}%  ({} missing)",
            icon,
            locale,
            locale.native_name(),
            report.coverage(*locale),
            missing
        ));
        if detail && missing > 0 {
            for key in &report.missing[locale] {
                Logger::info(format!("    {} {}", icons::KEY, Colors::muted(key)));
            }
        }
    }

    if !report.orphaned.is_empty() {
        Logger::info("");
        Logger::warn(format!("{} keys have no base template", report.orphaned.len()));
        for key in &report.orphaned {
            Logger::info(format!("    {} {}", icons::KEY, key));
        }
    }

    if !report.empty.is_empty() {
        Logger::info("");
        Logger::warn(format!("{} empty templates", report.empty.len()));
        for empty in &report.empty {
            Logger::info(format!("    {} {} [{}]", icons::KEY, empty.key, empty.locale));
        }
    }

    if !report.placeholder_mismatches.is_empty() {
        Logger::info("");
        Logger::info(TextStyles::bold("Placeholder differences"));
        Logger::info(RULE);
        for mismatch in &report.placeholder_mismatches {
            let icon = if mismatch.is_error() {
                Colors::error(icons::ERROR)
            } else {
                Colors::warn(icons::WARNING)
            };
            let mut line = format!("{} {} [{}]", icon, mismatch.key, mismatch.locale);
            if !mismatch.unknown.is_empty() {
                line.push_str(&format!(" unknown: {}", mismatch.unknown.join(", ")));
            }
            if !mismatch.unused.is_empty() {
                line.push_str(&format!(" unused: {}", mismatch.unused.join(", ")));
            }
            Logger::info(line);
        }
    }

    Ok(())
}

// ============================================================================
// Listings
// ============================================================================

/// Print message rows, one per key
pub fn print_message_table(rows: &[MessageRow]) -> Result<()> {
    let width = rows.iter().map(|r| r.key.len()).max().unwrap_or(0);
    for row in rows {
        let marker = if row.fallback {
            Colors::muted(&format!(" ({} fallback)", Locale::BASE))
        } else {
            String::new()
        };
        let key = format!("{:<width$}", row.key, width = width);
        println!("{}  {}  {}{}", Colors::info(&key), row.locale, row.text, marker);
    }
    Ok(())
}

/// Print supported locales
pub fn print_locales(current: Locale) {
    for locale in Locale::all() {
        let mut line = format!("{} {}  {}", icons::LOCALE, locale, locale.native_name());
        if locale.is_base() {
            line.push_str(&Colors::muted("  (base)"));
        }
        if *locale == current {
            line = TextStyles::bold(&line);
            line.push_str(&Colors::success(&format!("  {} current", icons::ARROW)));
        }
        println!("{}", line);
    }
}

/// Print a detection result
pub fn print_detection(detection: &Detection) -> Result<()> {
    println!(
        "{} {} {}",
        TextStyles::bold(detection.locale.code()),
        icons::ARROW,
        format!("{:?}", detection.source).to_lowercase()
    );
    Ok(())
}
