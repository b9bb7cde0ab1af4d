// ============================================================================
// msgcat - UI Module
// ============================================================================
//
// File: src/ui/mod.rs
// Role: Terminal rendering of command results
//
// ============================================================================

pub mod summary;
