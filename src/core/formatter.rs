// ============================================================================
// msgcat - Template Formatter
// ============================================================================
//
// File: src/core/formatter.rs
// Role: `{name}` placeholder extraction and substitution
// Boundaries:
//   - ✅ Placeholder parsing
//   - ✅ Lenient and strict substitution
//   - ❌ Should not contain table lookup
//   - ❌ Should not contain locale resolution
//
// ============================================================================

use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::OnceLock;

use crate::models::message::Params;

fn placeholder_regex() -> &'static Regex {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    PLACEHOLDER.get_or_init(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"))
}

/// Placeholder names used by a template, deduplicated and sorted
pub fn placeholders(template: &str) -> BTreeSet<String> {
    placeholder_regex()
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Substitute params into a template.
///
/// Placeholders without a matching param are left as written.
pub fn format_message(template: &str, params: &Params) -> String {
    if params.is_empty() {
        return template.to_string();
    }
    placeholder_regex()
        .replace_all(template, |caps: &Captures| match params.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// First placeholder of the template that `params` does not supply
pub fn first_missing_param(template: &str, params: &Params) -> Option<String> {
    placeholder_regex()
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .find(|name| !params.contains(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_named_params() {
        let params = Params::new().with("count", 3).with("s", "s");
        assert_eq!(
            format_message("{count} photo{s} uploaded", &params),
            "3 photos uploaded"
        );
    }

    #[test]
    fn repeated_placeholder_is_replaced_everywhere() {
        let params = Params::new().with("n", 2);
        assert_eq!(format_message("{n} of {n}", &params), "2 of 2");
    }

    #[test]
    fn unmatched_placeholder_is_kept() {
        let params = Params::new().with("count", 1);
        assert_eq!(format_message("{count} photo{s}", &params), "1 photo{s}");
        assert_eq!(format_message("Hi {name}", &Params::new()), "Hi {name}");
    }

    #[test]
    fn braces_without_identifier_are_literal() {
        let params = Params::new().with("x", 1);
        assert_eq!(format_message("{} and { x } and {x}", &params), "{} and { x } and 1");
    }

    #[test]
    fn extracts_sorted_placeholder_names() {
        let names: Vec<String> = placeholders("{count} photo{s} {count}").into_iter().collect();
        assert_eq!(names, vec!["count".to_string(), "s".to_string()]);
        assert!(placeholders("Home").is_empty());
    }

    #[test]
    fn reports_first_missing_param_in_template_order() {
        let params = Params::new().with("count", 1);
        assert_eq!(
            first_missing_param("{count} photo{s}", &params),
            Some("s".to_string())
        );
        assert_eq!(first_missing_param("{count} photo", &params), None);
    }
}
