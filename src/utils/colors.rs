// ============================================================================
// msgcat - Colors
// ============================================================================
//
// File: src/utils/colors.rs
// Role: Terminal color output
// Boundaries:
//   - ✅ ANSI color codes
//   - ✅ Color formatting
//   - ✅ Color support detection
//   - ❌ Should not contain business logic
//
// ============================================================================

use crate::models::config::Config;

/// ANSI color codes
pub mod ansi {
    /// Reset
    pub const RESET: &str = "\x1b[0m";

    /// Foreground colors
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Log level color theme
pub mod log_colors {
    use super::ansi;

    /// Info (cyan)
    pub const INFO: &str = ansi::CYAN;

    /// Warning (yellow)
    pub const WARN: &str = ansi::YELLOW;

    /// Error (red)
    pub const ERROR: &str = ansi::RED;

    /// Success (green)
    pub const SUCCESS: &str = ansi::GREEN;

    /// Secondary text (gray)
    pub const MUTED: &str = ansi::GRAY;
}

/// Color helpers
pub struct Colors;

impl Colors {
    /// Whether stdout should receive ANSI codes
    pub fn enabled() -> bool {
        Config::get_colored() && atty::is(atty::Stream::Stdout)
    }

    /// Wrap text in a color; plain text when colors are off
    pub fn colorize(text: &str, color: &str) -> String {
        if !Self::enabled() {
            return text.to_string();
        }
        format!("{}{}{}", color, text, ansi::RESET)
    }

    pub fn info(text: &str) -> String {
        Self::colorize(text, log_colors::INFO)
    }

    pub fn warn(text: &str) -> String {
        Self::colorize(text, log_colors::WARN)
    }

    pub fn error(text: &str) -> String {
        Self::colorize(text, log_colors::ERROR)
    }

    pub fn success(text: &str) -> String {
        Self::colorize(text, log_colors::SUCCESS)
    }

    pub fn muted(text: &str) -> String {
        Self::colorize(text, log_colors::MUTED)
    }
}
