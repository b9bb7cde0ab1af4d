// ============================================================================
// msgcat - Logging
// ============================================================================
//
// File: src/utils/logger.rs
// Role: User-facing console output and tracing setup
// Boundaries:
//   - ✅ Prefixed console output
//   - ✅ tracing subscriber initialization
//   - ❌ Should not contain business logic
//   - ❌ Should not contain file logging
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use super::colors::Colors;
use super::constants::{APP_NAME, LOG_ENV};

/// Console logger for CLI output
pub struct Logger;

impl Logger {
    /// Bracketed prefix for a level
    pub fn get_prefix(level: &str) -> String {
        match level {
            "WARN" => Colors::warn("[WARN]"),
            "ERROR" => Colors::error("[ERROR]"),
            "SUCCESS" => Colors::success(&format!("[{}]", APP_NAME)),
            _ => Colors::info(&format!("[{}]", APP_NAME)),
        }
    }

    pub fn info<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("INFO"), msg.as_ref());
    }

    pub fn warn<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("WARN"), msg.as_ref());
    }

    pub fn error<S: AsRef<str>>(msg: S) {
        eprintln!("{} {}", Self::get_prefix("ERROR"), msg.as_ref());
    }

    pub fn success<S: AsRef<str>>(msg: S) {
        println!("{} {}", Self::get_prefix("SUCCESS"), msg.as_ref());
    }
}

/// Install the global tracing subscriber.
///
/// `MSGCAT_LOG` takes precedence; otherwise `debug` when verbose, `warn` when not.
/// Events go to stderr so command output stays pipeable.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "msgcat=debug" } else { "msgcat=warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
