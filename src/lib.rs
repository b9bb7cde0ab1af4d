// ============================================================================
// msgcat - Library Root
// ============================================================================
//
// File: src/lib.rs
// Role: Crate root and public API
// Boundaries:
//   - ✅ Module declarations
//   - ✅ Public re-exports
//   - ❌ Should not contain implementation
//
// ============================================================================

//! Compiled message catalog.
//!
//! Every message key maps to one template per [`Locale`]. A lookup picks the
//! explicitly requested locale or the current one, falls back to the base
//! locale (`en`) when a translation is missing, and substitutes `{name}`
//! placeholders from [`Params`].
//!
//! ```
//! use msgcat::{t, translate, Locale, MessageOptions, Params};
//!
//! let options = MessageOptions::locale(Locale::Bg);
//! assert_eq!(translate("nav_home", &Params::new(), &options), "Начало");
//!
//! let text = t!("dashboard_minutesAgo", minutes = 5; Locale::En);
//! assert_eq!(text, "5m ago");
//! ```

pub mod core;
pub mod error;
pub mod i18n;
pub mod messages;
pub mod models;
pub mod utils;

pub use crate::core::runtime::{apply_locale, base_locale, get_locale, is_locale, locales, set_locale};
pub use crate::core::translator::{translate, try_translate};
pub use error::{I18nError, Result};
pub use models::{Locale, MessageOptions, Params};
