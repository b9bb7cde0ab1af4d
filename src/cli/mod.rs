// ============================================================================
// msgcat - CLI Module
// ============================================================================
//
// File: src/cli/mod.rs
// Role: CLI entry and command routing
// Boundaries:
//   - ✅ CLI struct and command enum
//   - ✅ Global flag handling
//   - ✅ Command dispatch
//   - ❌ Should not contain command implementations
//   - ❌ Should not contain catalog logic
//
// ============================================================================

pub mod check;
pub mod detect;
pub mod get;
pub mod init;
pub mod list;
pub mod locales;

use anyhow::Result;
use clap::{Parser, Subcommand};

use msgcat::apply_locale;
use msgcat::models::config::{Config, RuntimeArgs};
use msgcat::utils::logger::{init_tracing, Logger};
use check::{handle_check, CheckArgs};
use detect::{handle_detect, DetectArgs};
use get::{handle_get, GetArgs};
use init::{handle_init, InitArgs};
use list::{handle_list, ListArgs};
use locales::handle_locales;

/// msgcat - Compiled message catalog
#[derive(Debug, Parser)]
#[command(name = "msgcat")]
#[command(about = "Look up, list and audit localized messages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Current locale (en, bg, ru, ua)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render one message
    Get(GetArgs),
    /// List messages in a locale
    List(ListArgs),
    /// Audit catalog completeness
    Check(CheckArgs),
    /// Detect the locale of a request
    Detect(DetectArgs),
    /// Show supported locales
    Locales,
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    Config::merge_runtime_args(build_runtime_args(&cli))?;
    init_tracing(Config::get_verbose());

    let language = Config::get_language()?;
    if !apply_locale(&language) {
        Logger::warn(format!("Unsupported language '{}', keeping the base locale", language));
    }

    match cli.command {
        Commands::Get(args) => handle_get(args),
        Commands::List(args) => handle_list(args),
        Commands::Check(args) => handle_check(args),
        Commands::Detect(args) => handle_detect(args),
        Commands::Locales => handle_locales(),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> RuntimeArgs {
    RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        language: cli.language.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["msgcat", "locales", "--no-color", "-l", "bg"]);
        let args = build_runtime_args(&cli);
        assert_eq!(args.colored, Some(false));
        assert_eq!(args.verbose, None);
        assert_eq!(args.language.as_deref(), Some("bg"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
