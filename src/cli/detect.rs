// ============================================================================
// msgcat - CLI Detect Command
// ============================================================================
//
// File: src/cli/detect.rs
// Role: Run request and visitor locale detection from the command line
// Boundaries:
//   - ✅ Request input arguments
//   - ✅ Visitor (country / browser) arguments
//   - ❌ Should not contain detection rules
//
// ============================================================================

use anyhow::Result;
use clap::Args;

use crate::ui::summary;
use msgcat::core::detector::{
    detect_locale, detect_user_locale, should_show_locale_banner, DetectionInput,
};
use msgcat::utils::logger::Logger;
use msgcat::{get_locale, Locale};

/// Detect the locale of a request
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// URL path, e.g. /bg/products
    #[arg(long)]
    pub path: Option<String>,

    /// Query string, e.g. locale=ru
    #[arg(long)]
    pub query: Option<String>,

    /// Locale cookie value
    #[arg(long)]
    pub cookie: Option<String>,

    /// Accept-Language header value
    #[arg(long)]
    pub header: Option<String>,

    /// Fallback locale (defaults to the configured one)
    #[arg(long)]
    pub default: Option<Locale>,

    /// Visitor country code (ISO 3166 alpha-2)
    #[arg(long)]
    pub country: Option<String>,

    /// Output format (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,
}

pub fn handle_detect(args: DetectArgs) -> Result<()> {
    let input = DetectionInput {
        path: args.path.as_deref(),
        query: args.query.as_deref(),
        cookie: args.cookie.as_deref(),
        header: args.header.as_deref(),
        default_locale: args.default,
    };

    let detection = detect_locale(&input);
    summary::output_results(&args.format, &detection, summary::print_detection)?;

    if let Some(country) = args.country.as_deref() {
        let visitor = detect_user_locale(Some(country), args.header.as_deref());
        summary::output_results(&args.format, &visitor, |v| {
            println!(
                "{} visitor: {} ({:?} confidence)",
                v.detected_country.as_deref().unwrap_or("-"),
                v.detected_locale,
                v.confidence
            );
            Ok(())
        })?;

        if args.format != "json"
            && should_show_locale_banner(get_locale(), visitor.detected_locale, false)
        {
            Logger::info(format!(
                "Suggest switching to {}",
                visitor.detected_locale.native_name()
            ));
        }
    }

    Ok(())
}
