// ============================================================================
// msgcat - Binary Entry
// ============================================================================
//
// File: src/main.rs
// Role: Program entry point
// Boundaries:
//   - ✅ Config initialization
//   - ✅ Top-level error reporting and exit status
//   - ❌ Should not contain command logic
//
// ============================================================================

mod cli;
mod ui;

use msgcat::models::config::Config;
use msgcat::utils::logger::Logger;

fn main() {
    if let Err(e) = Config::initialize() {
        Logger::error(format!("{:#}", e));
        std::process::exit(2);
    }

    if let Err(e) = cli::run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
