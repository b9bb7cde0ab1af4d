// ============================================================================
// msgcat - Utilities
// ============================================================================
//
// File: src/utils/mod.rs
// Role: Utility module entry
// Boundaries:
//   - ✅ Colors, text styles, logging, constants
//   - ❌ Should not contain catalog logic
//
// ============================================================================

pub mod colors;
pub mod constants;
pub mod logger;
pub mod styles;
