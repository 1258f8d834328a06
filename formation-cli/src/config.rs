//! `formation.toml` configuration.
//!
//! Looked up in the working directory unless `--config` names another file.
//! CLI flags override config file values, which override defaults.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use formation_chat::ChatSettings;
use formation_core::document::{DEFAULT_DOCUMENT_YEAR, DocumentSettings, InvalidDocumentYear};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::name_check::{DEFAULT_AVAILABILITY, DEFAULT_DELAY, NameCheckSettings};

pub const CONFIG_FILE_NAME: &str = "formation.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("failed to serialize config: {0}")]
    Serialize(String),

    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    #[error("chat API key not found; set the {0} environment variable")]
    MissingApiKey(String),

    #[error("invalid [document] section: {0}")]
    InvalidDocument(#[from] InvalidDocumentYear),
}

// ---------------------------------------------------------------------------
// Config structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub document: DocumentConfig,

    #[serde(default)]
    pub name_check: NameCheckConfig,

    #[serde(default)]
    pub chat: ChatConfig,

    #[serde(default)]
    pub pricing: PricingConfig,
}

/// `[document]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Year printed on documents and used as the identifier prefix.
    #[serde(default = "default_year")]
    pub year: i32,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            year: default_year(),
        }
    }
}

impl TryFrom<&DocumentConfig> for DocumentSettings {
    type Error = InvalidDocumentYear;

    fn try_from(config: &DocumentConfig) -> Result<Self, Self::Error> {
        DocumentSettings::new(config.year)
    }
}

fn default_year() -> i32 {
    DEFAULT_DOCUMENT_YEAR
}

/// `[name_check]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameCheckConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Probability that a name comes back available.
    #[serde(default = "default_availability")]
    pub availability: f64,
}

impl Default for NameCheckConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            availability: default_availability(),
        }
    }
}

impl From<&NameCheckConfig> for NameCheckSettings {
    fn from(config: &NameCheckConfig) -> Self {
        NameCheckSettings {
            delay: Duration::from_millis(config.delay_ms),
            availability: config.availability,
        }
    }
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}
fn default_availability() -> f64 {
    DEFAULT_AVAILABILITY
}

/// `[chat]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the env var holding the API key; the key itself is never stored.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ChatConfig {
    /// Client settings with the key read from `api_key_env`.
    pub fn to_settings(&self) -> Result<ChatSettings, ConfigError> {
        let api_key = match std::env::var(&self.api_key_env) {
            Ok(key) if !key.trim().is_empty() => key,
            _ => return Err(ConfigError::MissingApiKey(self.api_key_env.clone())),
        };

        Ok(ChatSettings {
            base_url: self.base_url.clone(),
            api_key,
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            timeout: Duration::from_secs(self.timeout_secs),
        })
    }
}

fn default_base_url() -> String {
    ChatSettings::default().base_url
}
fn default_api_key_env() -> String {
    "DEEPSEEK_API_KEY".into()
}
fn default_model() -> String {
    ChatSettings::default().model
}
fn default_temperature() -> f32 {
    ChatSettings::default().temperature
}
fn default_max_tokens() -> u32 {
    ChatSettings::default().max_tokens
}
fn default_timeout_secs() -> u64 {
    ChatSettings::default().timeout.as_secs()
}

/// `[pricing]` section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Price schedule CSV replacing the built-in table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Loads `path`, or `formation.toml` in the working directory when `None`.
/// A missing default file yields defaults; a missing explicit file is an error.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    if let Some(path) = path {
        return load_config_from(path);
    }

    let path = Path::new(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(path)
}

pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    DocumentSettings::try_from(&config.document)?;

    Ok(config)
}

/// Writes the default config to `path`. Refuses to overwrite unless `force`.
pub fn init_config(
    path: &Path,
    force: bool,
) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let content = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| ConfigError::Serialize(e.to_string()))?;

    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(?path, "created default config file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_config_serializes_every_section() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).unwrap();

        assert!(toml_str.contains("[document]"));
        assert!(toml_str.contains("year = 2025"));
        assert!(toml_str.contains("delay_ms = 1500"));
        assert!(toml_str.contains("DEEPSEEK_API_KEY"));
        assert!(!toml_str.contains("schedule"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let toml_str = r#"
[document]
year = 2026

[chat]
model = "deepseek-reasoner"

[pricing]
schedule = "prices.csv"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.document.year, 2026);
        assert_eq!(config.chat.model, "deepseek-reasoner");
        assert_eq!(config.chat.max_tokens, 2000);
        assert_eq!(config.name_check, NameCheckConfig::default());
        assert_eq!(config.pricing.schedule, Some(PathBuf::from("prices.csv")));
    }

    #[test]
    fn name_check_config_converts_to_settings() {
        let config = NameCheckConfig {
            delay_ms: 10,
            availability: 0.25,
        };

        let settings = NameCheckSettings::from(&config);

        assert_eq!(settings.delay, Duration::from_millis(10));
        assert_eq!(settings.availability, 0.25);
    }

    #[test]
    fn missing_api_key_env_is_reported() {
        let config = ChatConfig {
            api_key_env: "FORMATION_TEST_NONEXISTENT_KEY_9431".into(),
            ..Default::default()
        };

        let err = config.to_settings().unwrap_err();

        assert!(err.to_string().contains("FORMATION_TEST_NONEXISTENT_KEY_9431"));
    }

    #[test]
    fn document_year_must_have_four_digits() {
        let path = std::env::temp_dir().join(format!(
            "formation-config-{}-year.toml",
            std::process::id()
        ));
        std::fs::write(&path, "[document]\nyear = 12025\n").unwrap();

        let result = load_config_from(&path);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidDocument(InvalidDocumentYear(12025)))
        ));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let result = load_config(Some(Path::new("does/not/exist/formation.toml")));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
