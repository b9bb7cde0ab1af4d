// ============================================================================
// msgcat - CLI Locales Command
// ============================================================================
//
// File: src/cli/locales.rs
// Role: Show supported locales
//
// ============================================================================

use anyhow::Result;

use crate::ui::summary;
use msgcat::get_locale;

pub fn handle_locales() -> Result<()> {
    summary::print_locales(get_locale());
    Ok(())
}
