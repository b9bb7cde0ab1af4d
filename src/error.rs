// ============================================================================
// msgcat - Error Types
// ============================================================================
//
// File: src/error.rs
// Role: Library error type
// Boundaries:
//   - ✅ Typed failures of strict lookups and locale parsing
//   - ✅ Config loading failures
//   - ❌ Should not contain CLI error reporting
//
// ============================================================================

use thiserror::Error;

use crate::models::locale::Locale;

/// Errors produced by the catalog
#[derive(Debug, Error)]
pub enum I18nError {
    /// Language code is not one of the supported locales
    #[error("unsupported locale: {0}")]
    UnknownLocale(String),

    /// Key has no template for the requested locale
    #[error("message '{key}' has no '{locale}' translation")]
    MissingMessage { key: String, locale: Locale },

    /// Template references a placeholder the caller did not supply
    #[error("message '{key}' requires parameter '{param}'")]
    MissingParam { key: String, param: String },

    /// Config file could not be read or parsed
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, I18nError>;
