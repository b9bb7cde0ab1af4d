// ============================================================================
// msgcat - Data Models
// ============================================================================
//
// File: src/models/mod.rs
// Role: Data model module entry
// Boundaries:
//   - ✅ Locale, message call inputs, config
//   - ❌ Should not contain lookup logic
//
// ============================================================================

pub mod config;
pub mod locale;
pub mod message;

pub use locale::Locale;
pub use message::{MessageOptions, Params};
