// ============================================================================
// msgcat - Text Styles
// ============================================================================
//
// File: src/utils/styles.rs
// Role: Terminal text styles
// Boundaries:
//   - ✅ ANSI style codes
//   - ✅ Style formatting
//   - ❌ Should not contain business logic
//
// ============================================================================

use super::colors::Colors;

/// ANSI style codes
pub mod ansi_styles {
    /// Reset all styles
    pub const RESET: &str = "\x1b[0m";

    /// Bold
    pub const BOLD: &str = "\x1b[1m";
}

/// Text style helpers
pub struct TextStyles;

impl TextStyles {
    /// Apply a style; plain text when colors are off
    pub fn stylize(text: &str, style: &str) -> String {
        if !Colors::enabled() {
            return text.to_string();
        }
        format!("{}{}{}", style, text, ansi_styles::RESET)
    }

    pub fn bold(text: &str) -> String {
        Self::stylize(text, ansi_styles::BOLD)
    }
}
