// ============================================================================
// msgcat - CLI Get Command
// ============================================================================
//
// File: src/cli/get.rs
// Role: Render a single message
// Boundaries:
//   - ✅ Key, parameter and locale arguments
//   - ✅ Lenient and strict lookup
//   - ❌ Should not contain formatting logic
//
// ============================================================================

use anyhow::{Context, Result};
use clap::Args;

use msgcat::core::translator::Translator;
use msgcat::{Locale, MessageOptions, Params};

/// Render one message
#[derive(Debug, Args)]
pub struct GetArgs {
    /// Message key, e.g. nav_home
    pub key: String,

    /// Parameter as name=value (repeatable)
    #[arg(short, long = "param", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Locale to render in (defaults to the current locale)
    #[arg(long)]
    pub lang: Option<Locale>,

    /// Fail instead of falling back or leaving placeholders
    #[arg(long)]
    pub strict: bool,
}

pub fn handle_get(args: GetArgs) -> Result<()> {
    let translator = Translator::global();

    if !translator.table().contains_key(&args.key) {
        anyhow::bail!("Unknown message key '{}'", args.key);
    }

    let params: Params = args.params.into_iter().collect();
    let options = MessageOptions { locale: args.lang };

    let text = if args.strict {
        let locale = translator.target_locale(&options);
        translator
            .try_translate(&args.key, &params, locale)
            .with_context(|| format!("Cannot render '{}'", args.key))?
    } else {
        translator.translate(&args.key, &params, &options)
    };

    println!("{}", text);
    Ok(())
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty parameter name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name_value_pairs() {
        assert_eq!(
            parse_param("count=3").unwrap(),
            ("count".to_string(), "3".to_string())
        );
        assert_eq!(
            parse_param("name=a=b").unwrap(),
            ("name".to_string(), "a=b".to_string())
        );
    }

    #[test]
    fn rejects_malformed_params() {
        assert!(parse_param("count").is_err());
        assert!(parse_param("=3").is_err());
    }
}
