// ============================================================================
// msgcat - Core
// ============================================================================
//
// File: src/core/mod.rs
// Role: Core module entry and re-exports
// Boundaries:
//   - ✅ Core submodule exports
//   - ✅ Common type re-exports
//   - ❌ Should not contain CLI logic
//   - ❌ Should not contain UI logic
//
// ============================================================================

pub mod audit;
pub mod detector;
pub mod formatter;
pub mod runtime;
pub mod table;
pub mod translator;

pub use audit::{AuditReport, CatalogAuditor};
pub use detector::{detect_language, detect_locale, Detection, DetectionInput, LocaleSource};
pub use runtime::{apply_locale, get_locale, set_locale, CurrentLocale, FixedLocale, LocaleResolver};
pub use table::MessageTable;
pub use translator::{translate, try_translate, Translator};
