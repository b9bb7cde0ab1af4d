// ============================================================================
// msgcat - Config Data Model
// ============================================================================
//
// File: src/models/config.rs
// Role: Config file structures and process-wide config access
// Boundaries:
//   - ✅ Config file structure definitions
//   - ✅ Serialization / deserialization
//   - ✅ Default values
//   - ✅ Config file read / write
//   - ✅ Environment and CLI overrides
//   - ❌ Should not contain locale detection logic
//   - ❌ Should not contain CLI argument parsing
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, RwLock};

use crate::error::I18nError;
use crate::models::locale::Locale;
use crate::utils::constants::{CONFIG_FILE, LANG_ENV};

/// Process-wide config
static GLOBAL_CONFIG: OnceLock<Arc<RwLock<Config>>> = OnceLock::new();

/// msgcat config file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Locale settings
    #[serde(default)]
    pub i18n: I18nConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// Locale settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct I18nConfig {
    /// Current locale at startup
    #[serde(default = "default_language")]
    pub language: String,
    /// Fallback when locale detection finds nothing
    #[serde(default = "default_detection_locale")]
    pub default_locale: String,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Verbose output
    #[serde(default)]
    pub verbose: bool,
    /// Colored output
    #[serde(default = "default_colored")]
    pub colored: bool,
}

/// CLI runtime args (override the config file)
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub language: Option<String>,
}

/// Config defaults that do not depend on the global config
pub trait ConfigDefaults {
    fn default_language() -> String {
        Locale::BASE.code().to_string()
    }

    fn default_detection_locale() -> String {
        Locale::Bg.code().to_string()
    }

    fn default_verbose() -> bool {
        false
    }

    fn default_colored() -> bool {
        true
    }
}

impl ConfigDefaults for Config {}

fn default_language() -> String {
    Config::default_language()
}

fn default_detection_locale() -> String {
    Config::default_detection_locale()
}

fn default_colored() -> bool {
    Config::default_colored()
}

impl Config {
    /// Initialize the global config (called once at startup)
    pub fn initialize() -> anyhow::Result<()> {
        let mut config = Self::load_from(Path::new(CONFIG_FILE))?;
        config.apply_language_override(std::env::var(LANG_ENV).ok());
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// Load a config file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, I18nError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| I18nError::Config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content).map_err(|e| I18nError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Replace the configured language when an override is present and non-empty
    pub fn apply_language_override(&mut self, language: Option<String>) {
        if let Some(language) = language.filter(|l| !l.trim().is_empty()) {
            self.i18n.language = language;
        }
    }

    /// Merge runtime args into the global config
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        config.merge(args);
        Ok(())
    }

    fn merge(&mut self, args: RuntimeArgs) {
        if let Some(verbose) = args.verbose {
            self.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            self.output.colored = colored;
        }
        self.apply_language_override(args.language);
    }

    /// Save config to a file
    pub fn save_to_file(&self, config_path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Write the default config template to a file
    pub fn create_default_config_file(config_path: &PathBuf) -> anyhow::Result<()> {
        Self::default().save_to_file(config_path)
    }

    /// Read a value from the global config
    fn read<T>(f: impl FnOnce(&Config) -> T) -> anyhow::Result<T> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(f(&config))
    }

    /// Configured startup language
    pub fn get_language() -> anyhow::Result<String> {
        Self::read(|c| c.i18n.language.clone())
    }

    /// Configured detection fallback (with default)
    pub fn get_default_locale() -> Locale {
        Self::read(Config::detection_locale).unwrap_or_else(|_| Self::builtin_detection_locale())
    }

    /// Detection fallback of this config; an unsupported code uses the default
    pub fn detection_locale(&self) -> Locale {
        Locale::from_code(&self.i18n.default_locale).unwrap_or_else(|| {
            tracing::warn!(
                code = %self.i18n.default_locale,
                "unsupported default_locale, using the built-in default"
            );
            Self::builtin_detection_locale()
        })
    }

    fn builtin_detection_locale() -> Locale {
        Locale::from_code(&Self::default_detection_locale()).unwrap_or(Locale::BASE)
    }

    /// Verbose output (with default)
    pub fn get_verbose() -> bool {
        Self::read(|c| c.output.verbose).unwrap_or_else(|_| Self::default_verbose())
    }

    /// Colored output (with default)
    pub fn get_colored() -> bool {
        Self::read(|c| c.output.colored).unwrap_or_else(|_| Self::default_colored())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            i18n: I18nConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
            default_locale: Config::default_detection_locale(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.i18n.language, "en");
        assert_eq!(config.i18n.default_locale, "bg");
        assert!(config.output.colored);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[i18n]\nlanguage = \"ru\"").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.i18n.language, "ru");
        assert_eq!(config.i18n.default_locale, "bg");
        assert!(!config.output.verbose);
        assert!(config.output.colored);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[i18n\nlanguage = ").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, I18nError::Config(_)));
    }

    #[test]
    fn saved_template_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        Config::create_default_config_file(&path).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn blank_override_is_ignored() {
        let mut config = Config::default();
        config.apply_language_override(Some("  ".to_string()));
        assert_eq!(config.i18n.language, "en");
        config.apply_language_override(Some("ua".to_string()));
        assert_eq!(config.i18n.language, "ua");
    }

    #[test]
    fn unsupported_default_locale_uses_builtin_default() {
        let mut config = Config::default();
        config.i18n.default_locale = "xx".to_string();
        assert_eq!(config.detection_locale(), Locale::Bg);

        config.i18n.default_locale = " RU ".to_string();
        assert_eq!(config.detection_locale(), Locale::Ru);
    }

    #[test]
    fn runtime_args_override_file_values() {
        let mut config = Config::default();
        config.merge(RuntimeArgs {
            verbose: Some(true),
            colored: Some(false),
            language: Some("bg".to_string()),
        });
        assert!(config.output.verbose);
        assert!(!config.output.colored);
        assert_eq!(config.i18n.language, "bg");
    }
}
