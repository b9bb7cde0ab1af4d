// ============================================================================
// msgcat - CLI Init Command
// ============================================================================
//
// File: src/cli/init.rs
// Role: Write the default configuration file
// Boundaries:
//   - ✅ Existing-file check and --force
//   - ❌ Should not contain the config format
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use msgcat::models::config::Config;
use msgcat::utils::constants::CONFIG_FILE;
use msgcat::utils::logger::Logger;

/// Initialize configuration file
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Config file path
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Overwrite an existing config file
    #[arg(short, long)]
    pub force: bool,
}

pub fn handle_init(args: InitArgs) -> Result<()> {
    if args.config.exists() && !args.force {
        Logger::warn(format!("{} already exists", args.config.display()));
        Logger::info("Use --force to overwrite it");
        return Ok(());
    }

    if let Err(e) = Config::create_default_config_file(&args.config) {
        Logger::error(format!("Failed to write {}: {}", args.config.display(), e));
        return Err(e);
    }

    Logger::success(format!("Created {}", args.config.display()));
    Logger::info("Set [i18n] language to change the startup locale");
    Ok(())
}
