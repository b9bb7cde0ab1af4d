// ============================================================================
// msgcat - Constants
// ============================================================================
//
// File: src/utils/constants.rs
// Role: Application constants
// Boundaries:
//   - ✅ Application name, file names, environment variable names
//   - ✅ Icon characters for CLI output
//   - ❌ Should not contain dynamic config
//   - ❌ Should not contain business logic
//
// ============================================================================

/// Application name
pub const APP_NAME: &str = "MSGCAT";

/// Default config file name
pub const CONFIG_FILE: &str = "msgcat.toml";

/// Environment variable overriding the configured language
pub const LANG_ENV: &str = "MSGCAT_LANG";

/// Environment variable for the tracing filter
pub const LOG_ENV: &str = "MSGCAT_LOG";

/// Query string parameter carrying a locale
pub const LOCALE_QUERY_PARAM: &str = "locale";

/// Icons
pub mod icons {
    /// Success
    pub const SUCCESS: &str = "✓";
    /// Error
    pub const ERROR: &str = "✗";
    /// Warning
    pub const WARNING: &str = "!";
    /// Locale
    pub const LOCALE: &str = "◆";
    /// Message key
    pub const KEY: &str = "●";
    /// Arrow
    pub const ARROW: &str = "→";
}
