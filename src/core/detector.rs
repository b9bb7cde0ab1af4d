// ============================================================================
// msgcat - Locale Detection
// ============================================================================
//
// File: src/core/detector.rs
// Role: Request-oriented locale detection
// Boundaries:
//   - ✅ URL path, query, cookie and Accept-Language detection
//   - ✅ Accept-Language negotiation
//   - ✅ Country mapping and banner decision
//   - ❌ Should not read or write cookies / headers itself
//   - ❌ Should not change the current locale
//
// ============================================================================

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

use crate::models::config::Config;
use crate::models::locale::Locale;
use crate::utils::constants::LOCALE_QUERY_PARAM;

/// Path prefixes that stand for another locale (`/uk/...` is the UK storefront)
const PATH_ALIASES: &[(&str, Locale)] = &[("uk", Locale::En)];

/// Accept-Language primary subtags that differ from our locale codes
const HEADER_ALIASES: &[(&str, Locale)] = &[("uk", Locale::Ua)];

/// Country code to locale
const COUNTRY_LOCALES: &[(&str, Locale)] = &[
    ("BG", Locale::Bg),
    ("US", Locale::En),
    ("GB", Locale::En),
    ("CA", Locale::En),
    ("AU", Locale::En),
    ("NZ", Locale::En),
    ("IE", Locale::En),
    ("RU", Locale::Ru),
    ("BY", Locale::Ru),
    ("KZ", Locale::Ru),
    ("UA", Locale::Ua),
];

fn path_regex() -> &'static Regex {
    static PATH: OnceLock<Regex> = OnceLock::new();
    PATH.get_or_init(|| Regex::new(r"^/(en|uk|bg|ru|ua)(?:/|$)").expect("path pattern is valid"))
}

/// Request data available for detection
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectionInput<'a> {
    /// URL path, e.g. `/bg/products/1`
    pub path: Option<&'a str>,
    /// Raw query string, with or without the leading `?`
    pub query: Option<&'a str>,
    /// Locale cookie value
    pub cookie: Option<&'a str>,
    /// `Accept-Language` header value
    pub header: Option<&'a str>,
    /// Fallback; the configured default when absent
    pub default_locale: Option<Locale>,
}

/// Which input decided the locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleSource {
    Path,
    Query,
    Cookie,
    Header,
    Default,
}

impl LocaleSource {
    /// Whether the user asked for this locale (path, query or cookie)
    pub fn is_explicit(&self) -> bool {
        matches!(self, LocaleSource::Path | LocaleSource::Query | LocaleSource::Cookie)
    }
}

/// Detection result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub locale: Locale,
    pub source: LocaleSource,
}

/// Detect the locale of a request.
///
/// Priority: path prefix, `locale` query parameter, cookie, Accept-Language,
/// default. Unsupported values are skipped.
pub fn detect_locale(input: &DetectionInput<'_>) -> Detection {
    let found = [
        (LocaleSource::Path, input.path.and_then(locale_from_path)),
        (LocaleSource::Query, input.query.and_then(locale_from_query)),
        (LocaleSource::Cookie, input.cookie.and_then(Locale::from_code)),
        (LocaleSource::Header, input.header.and_then(negotiate)),
    ]
    .into_iter()
    .find_map(|(source, locale)| locale.map(|locale| Detection { locale, source }));

    let detection = found.unwrap_or_else(|| Detection {
        locale: input.default_locale.unwrap_or_else(Config::get_default_locale),
        source: LocaleSource::Default,
    });
    tracing::debug!(locale = %detection.locale, source = ?detection.source, "locale detected");
    detection
}

/// Locale named by a leading path segment
pub fn locale_from_path(path: &str) -> Option<Locale> {
    let caps = path_regex().captures(path)?;
    let segment = caps.get(1)?.as_str();
    PATH_ALIASES
        .iter()
        .find(|(alias, _)| *alias == segment)
        .map(|(_, locale)| *locale)
        .or_else(|| Locale::from_code(segment))
}

/// Locale named by the first `locale` query parameter
pub fn locale_from_query(query: &str) -> Option<Locale> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let value = query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| *name == LOCALE_QUERY_PARAM)
        .map(|(_, value)| value)?;
    Locale::from_code(value)
}

/// Best supported locale of an Accept-Language header.
///
/// Entries are ranked by q-value (ties keep header order). Entries with
/// `q=0` or a q-value outside `0..=1` are ignored.
pub fn negotiate(header: &str) -> Option<Locale> {
    let mut ranked: Vec<(f32, Locale)> = header
        .split(',')
        .filter_map(|entry| {
            let mut parts = entry.split(';');
            let tag = parts.next()?.trim();
            let quality = match parts.find_map(|p| p.trim().strip_prefix("q=")) {
                Some(q) => q.trim().parse::<f32>().ok()?,
                None => 1.0,
            };
            if quality == 0.0 || !(0.0..=1.0).contains(&quality) {
                return None;
            }
            Some((quality, locale_from_language_tag(tag)?))
        })
        .collect();

    ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    ranked.first().map(|(_, locale)| *locale)
}

fn locale_from_language_tag(tag: &str) -> Option<Locale> {
    let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
    HEADER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == primary)
        .map(|(_, locale)| *locale)
        .or_else(|| Locale::from_code(&primary))
}

/// Locale of an Accept-Language header, base locale when nothing matches
pub fn detect_language(accept_language: Option<&str>) -> Locale {
    accept_language.and_then(negotiate).unwrap_or(Locale::BASE)
}

/// Locale for an ISO 3166 alpha-2 country code
pub fn country_to_locale(country: &str) -> Option<Locale> {
    let country = country.trim().to_ascii_uppercase();
    COUNTRY_LOCALES
        .iter()
        .find(|(code, _)| *code == country)
        .map(|(_, locale)| *locale)
}

/// How much a user-level detection can be trusted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Locale guessed for a visitor from country and browser language
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserLocaleDetection {
    pub detected_locale: Locale,
    pub detected_country: Option<String>,
    pub confidence: Confidence,
}

/// Guess a visitor's locale.
///
/// A mapped country is high confidence. Otherwise the browser language
/// (a single tag or a full Accept-Language value) decides: medium when it
/// names a non-base locale, low when it does not.
pub fn detect_user_locale(
    country: Option<&str>,
    browser_language: Option<&str>,
) -> UserLocaleDetection {
    let detected_country = country.map(|c| c.trim().to_ascii_uppercase());

    if let Some(locale) = country.and_then(country_to_locale) {
        return UserLocaleDetection {
            detected_locale: locale,
            detected_country,
            confidence: Confidence::High,
        };
    }

    let locale = browser_language.and_then(negotiate).unwrap_or(Locale::BASE);
    UserLocaleDetection {
        detected_locale: locale,
        detected_country,
        confidence: if locale.is_base() {
            Confidence::Low
        } else {
            Confidence::Medium
        },
    }
}

/// Whether to offer switching from `current` to `detected`
pub fn should_show_locale_banner(current: Locale, detected: Locale, dismissed: bool) -> bool {
    !dismissed && current != detected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> DetectionInput<'static> {
        DetectionInput {
            default_locale: Some(Locale::Bg),
            ..Default::default()
        }
    }

    #[test]
    fn path_prefix_with_alias() {
        assert_eq!(locale_from_path("/en/home"), Some(Locale::En));
        assert_eq!(locale_from_path("/bg"), Some(Locale::Bg));
        assert_eq!(locale_from_path("/uk/home"), Some(Locale::En));
        assert_eq!(locale_from_path("/ua/"), Some(Locale::Ua));
        assert_eq!(locale_from_path("/english/home"), None);
        assert_eq!(locale_from_path("/products/bg"), None);
    }

    #[test]
    fn query_parameter() {
        assert_eq!(locale_from_query("?locale=ru"), Some(Locale::Ru));
        assert_eq!(locale_from_query("page=2&locale=bg"), Some(Locale::Bg));
        assert_eq!(locale_from_query("locale=fr"), None);
        assert_eq!(locale_from_query("lang=bg"), None);
    }

    #[test]
    fn priority_order() {
        let detection = detect_locale(&DetectionInput {
            path: Some("/en/home"),
            query: Some("locale=bg"),
            cookie: Some("ru"),
            header: Some("ua"),
            ..input()
        });
        assert_eq!(detection, Detection { locale: Locale::En, source: LocaleSource::Path });

        let detection = detect_locale(&DetectionInput {
            path: Some("/home"),
            query: Some("locale=bg"),
            cookie: Some("ru"),
            ..input()
        });
        assert_eq!(detection.source, LocaleSource::Query);

        let detection = detect_locale(&DetectionInput {
            cookie: Some("ru"),
            header: Some("en-US"),
            ..input()
        });
        assert_eq!(detection, Detection { locale: Locale::Ru, source: LocaleSource::Cookie });
    }

    #[test]
    fn invalid_values_fall_through() {
        let detection = detect_locale(&DetectionInput {
            query: Some("locale=xx"),
            cookie: Some("invalid"),
            header: Some("en-GB,en;q=0.9"),
            ..input()
        });
        assert_eq!(detection, Detection { locale: Locale::En, source: LocaleSource::Header });
    }

    #[test]
    fn default_when_nothing_matches() {
        let detection = detect_locale(&DetectionInput {
            header: Some("fr-FR,fr;q=0.9"),
            ..input()
        });
        assert_eq!(detection, Detection { locale: Locale::Bg, source: LocaleSource::Default });
        assert!(!detection.source.is_explicit());
    }

    #[test]
    fn negotiation_respects_quality() {
        assert_eq!(negotiate("bg-BG,bg;q=0.9,en;q=0.8"), Some(Locale::Bg));
        assert_eq!(negotiate("fr;q=1.0,en;q=0.5,ru;q=0.7"), Some(Locale::Ru));
        assert_eq!(negotiate("en;q=0,bg;q=0.1"), Some(Locale::Bg));
        assert_eq!(negotiate("uk-UA,uk;q=0.9"), Some(Locale::Ua));
        assert_eq!(negotiate("*"), None);
    }

    #[test]
    fn out_of_range_quality_is_ignored() {
        assert_eq!(negotiate("bg;q=NaN,ru;q=0.9"), Some(Locale::Ru));
        assert_eq!(negotiate("bg;q=0.9,ru;q=5"), Some(Locale::Bg));
        assert_eq!(negotiate("ru;q=-1,ua;q=inf"), None);
        assert_eq!(negotiate("bg_BG"), Some(Locale::Bg));
    }

    #[test]
    fn detect_language_defaults_to_base() {
        assert_eq!(detect_language(Some("bg-BG,bg;q=0.9,en;q=0.8")), Locale::Bg);
        assert_eq!(detect_language(Some("en-US,en;q=0.9")), Locale::En);
        assert_eq!(detect_language(Some("fr-FR,fr;q=0.9")), Locale::En);
        assert_eq!(detect_language(None), Locale::En);
    }

    #[test]
    fn country_mapping() {
        assert_eq!(country_to_locale("bg"), Some(Locale::Bg));
        assert_eq!(country_to_locale("UA"), Some(Locale::Ua));
        assert_eq!(country_to_locale("KZ"), Some(Locale::Ru));
        assert_eq!(country_to_locale("DE"), None);
    }

    #[test]
    fn user_locale_confidence() {
        let high = detect_user_locale(Some("bg"), Some("en-US"));
        assert_eq!(high.detected_locale, Locale::Bg);
        assert_eq!(high.detected_country.as_deref(), Some("BG"));
        assert_eq!(high.confidence, Confidence::High);

        let medium = detect_user_locale(Some("DE"), Some("ru-RU"));
        assert_eq!(medium.detected_locale, Locale::Ru);
        assert_eq!(medium.confidence, Confidence::Medium);

        let low = detect_user_locale(None, Some("de-DE"));
        assert_eq!(low.detected_locale, Locale::En);
        assert_eq!(low.confidence, Confidence::Low);
    }

    #[test]
    fn banner_only_for_undismissed_mismatch() {
        assert!(should_show_locale_banner(Locale::En, Locale::Bg, false));
        assert!(!should_show_locale_banner(Locale::En, Locale::Bg, true));
        assert!(!should_show_locale_banner(Locale::Bg, Locale::Bg, false));
    }
}
