// ============================================================================
// msgcat - CLI Check Command
// ============================================================================
//
// File: src/cli/check.rs
// Role: CLI layer of the catalog audit
// Boundaries:
//   - ✅ Argument definition
//   - ✅ Running the auditor
//   - ✅ Result output and exit status
//   - ❌ Should not contain audit rules
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::ui::summary;
use msgcat::core::audit::{AuditReport, CatalogAuditor};
use msgcat::core::table::MessageTable;
use msgcat::models::config::Config;
use msgcat::utils::logger::Logger;
use msgcat::Locale;

/// Audit catalog completeness
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Only audit these locales (repeatable)
    #[arg(long = "lang")]
    pub locales: Vec<Locale>,

    /// Output format (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// List every missing key
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    if Config::get_verbose() {
        Logger::info("Auditing message catalog...");
    }

    let table = MessageTable::global();
    let mut auditor = CatalogAuditor::new(table);
    if !args.locales.is_empty() {
        auditor = auditor.with_locales(&args.locales);
    }
    let report = auditor.audit();

    summary::output_results(&args.format, &report, |r| {
        summary::print_audit_report(r, args.detail)
    })?;

    if report.is_clean() {
        if args.format != "json" {
            Logger::success(format!("All {} keys are complete", report.total_keys));
        }
        return Ok(());
    }

    if args.format != "json" {
        log_issue_summary(&report);
    }
    std::process::exit(1);
}

fn log_issue_summary(report: &AuditReport) {
    let errors = report
        .placeholder_mismatches
        .iter()
        .filter(|m| m.is_error())
        .count();
    Logger::error(format!(
        "{} missing, {} orphaned, {} empty, {} placeholder errors",
        report.missing_count(),
        report.orphaned.len(),
        report.empty.len(),
        errors
    ));
}
