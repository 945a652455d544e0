//! TOML-based configuration.
//!
//! Holds presentation preferences for the widgets and the log filter.
//! Nothing about a walk is stored here; widget state lives only in memory.
//!
//! Configuration is stored at `~/.config/dentiq/config.toml`
//! (`~/.config/dentiq-dev/` when `DENTIQ_ENV=dev`).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::catalog::TipCategory;
use crate::error::ConfigError;
use crate::render::DEFAULT_CALL_TO_ACTION;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `warn` or `dentiq_core=debug`.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

/// Health calculator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_true")]
    pub show_recommendations: bool,
}

/// Quest configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestConfig {
    /// Reveal the explanation and tip after each submitted answer.
    #[serde(default = "default_true")]
    pub show_explanations: bool,
}

/// Tips browser configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TipsConfig {
    /// Tab selected when the browser opens.
    #[serde(default)]
    pub default_category: TipCategory,
}

/// Clinic-specific texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicConfig {
    #[serde(default = "default_call_to_action")]
    pub call_to_action: String,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub quest: QuestConfig,
    #[serde(default)]
    pub tips: TipsConfig,
    #[serde(default)]
    pub clinic: ClinicConfig,
}

fn default_log_filter() -> String {
    "warn".into()
}
fn default_true() -> bool {
    true
}
fn default_call_to_action() -> String {
    DEFAULT_CALL_TO_ACTION.into()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            show_recommendations: true,
        }
    }
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            show_explanations: true,
        }
    }
}

impl Default for ClinicConfig {
    fn default() -> Self {
        Self {
            call_to_action: default_call_to_action(),
        }
    }
}

/// Returns `~/.config/dentiq[-dev]/` based on DENTIQ_ENV.
///
/// The directory is not created here; only saving writes to disk.
pub fn config_dir() -> PathBuf {
    let base_dir = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    let env = std::env::var("DENTIQ_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("dentiq-dev")
    } else {
        base_dir.join("dentiq")
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            if parts.peek().is_some() {
                current = current.get_mut(part).ok_or_else(unknown)?;
                continue;
            }

            let obj = current.as_object_mut().ok_or_else(unknown)?;
            let existing = obj.get(part).ok_or_else(unknown)?;

            let new_value = match existing {
                serde_json::Value::Bool(_) => serde_json::Value::Bool(
                    value
                        .parse::<bool>()
                        .map_err(|e| invalid(e.to_string()))?,
                ),
                serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                    return Err(invalid("cannot set a whole section".to_string()));
                }
                _ => serde_json::Value::String(value.into()),
            };

            obj.insert(part.to_string(), new_value);
            return Ok(());
        }

        Err(unknown())
    }

    /// Default location of the config file.
    pub fn path() -> PathBuf {
        config_dir().join("config.toml")
    }

    /// Load from the default location, falling back to defaults when absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path())
    }

    /// Load from `path`; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let load_failed = |message: String| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message,
        };

        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(|e| load_failed(e.to_string())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(load_failed(e.to_string())),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path())
    }

    /// Persist to `path`, creating its parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::NoConfigDir(e.to_string()))?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| save_failed(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_failed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a value by dot-separated key (in memory only).
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value does not fit the
    /// field's type (including unknown tip categories).
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json = serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Self::set_json_value_by_path(&mut json, key, value)?;
        *self = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.log.filter, "warn");
        assert!(parsed.calculator.show_recommendations);
        assert_eq!(parsed.tips.default_category, TipCategory::Daily);
        assert_eq!(parsed.clinic.call_to_action, DEFAULT_CALL_TO_ACTION);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let parsed: Config = toml::from_str("[tips]\ndefault_category = \"children\"\n").unwrap();
        assert_eq!(parsed.tips.default_category, TipCategory::Children);
        assert!(parsed.quest.show_explanations);
    }

    #[test]
    fn get_by_dotted_key() {
        let cfg = Config::default();
        assert_eq!(cfg.get("log.filter").as_deref(), Some("warn"));
        assert_eq!(cfg.get("quest.show_explanations").as_deref(), Some("true"));
        assert_eq!(cfg.get("tips.default_category").as_deref(), Some("daily"));
        assert!(cfg.get("nope").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn set_by_dotted_key() {
        let mut cfg = Config::default();
        cfg.set("calculator.show_recommendations", "false").unwrap();
        cfg.set("tips.default_category", "nutrition").unwrap();
        cfg.set("clinic.call_to_action", "Позвоните нам").unwrap();

        assert!(!cfg.calculator.show_recommendations);
        assert_eq!(cfg.tips.default_category, TipCategory::Nutrition);
        assert_eq!(cfg.clinic.call_to_action, "Позвоните нам");
    }

    #[test]
    fn set_rejects_bad_input() {
        let mut cfg = Config::default();
        assert!(matches!(
            cfg.set("tips.unknown", "x"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(matches!(
            cfg.set("quest.show_explanations", "maybe"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            cfg.set("tips.default_category", "sweets"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(cfg.set("tips", "x"), Err(ConfigError::InvalidValue { .. })));
        assert_eq!(cfg.tips.default_category, TipCategory::Daily);
    }

    #[test]
    fn save_and_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        assert_eq!(Config::load_from(&path).unwrap().log.filter, "warn");

        let mut cfg = Config::default();
        cfg.set("log.filter", "debug").unwrap();
        cfg.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.log.filter, "debug");
    }

    #[test]
    fn loading_never_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("dentiq");
        let path = nested.join("config.toml");

        Config::load_from(&path).unwrap();
        assert!(!nested.exists());

        Config::default().save_to(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log = 3").unwrap();
        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::LoadFailed { .. })
        ));
    }
}
