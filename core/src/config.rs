//! Configuration management (config.toml)
//!
//! Handles loading, saving, and providing defaults for formatter settings.
//! Settings are stored in TOML format in the platform-specific config directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// File name inside the config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Formatter configuration.
///
/// Serialized to/from TOML format for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Locale settings used by host descriptions
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Expression logging settings
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Locale configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Separator between integer and fractional digits of decimals (default: '.')
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,
}

/// Expression logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Whether `debug_log_expr!` logs anything at all (default: true)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Whether values with unrecognized descriptors are reported (default: true)
    #[serde(default = "default_true")]
    pub report_unrecognized: bool,
}

fn default_decimal_separator() -> char {
    '.'
}

fn default_true() -> bool {
    true
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: default_decimal_separator(),
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            report_unrecognized: default_true(),
        }
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Returns the platform-specific configuration directory.
///
/// On Windows: `%APPDATA%\typecode\config`
/// On macOS: `~/Library/Application Support/dev.typecode.typecode`
/// On Linux: `~/.config/typecode`
///
/// Returns `None` if the home directory cannot be determined.
pub fn config_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("dev", "typecode", "typecode")
        .map(|dirs| dirs.config_dir().to_path_buf())
}

/// Full path of the config file, if a config directory exists
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from disk.
///
/// Returns default values if the file doesn't exist or cannot be parsed.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    match load_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            Config::default()
        }
        Err(err) => {
            tracing::warn!("Ignoring {}: {}", path.display(), err);
            Config::default()
        }
    }
}

/// Loads the configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to disk.
///
/// Writes `config.toml` to the platform's configuration directory.
/// Creates the directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    if let Some(path) = config_path() {
        save_to(config, &path)?;
    }
    Ok(())
}

/// Saves the configuration to an explicit path, creating parent directories.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

static SHARED: OnceLock<Config> = OnceLock::new();

/// Process-wide configuration, loaded from disk on first use.
pub fn shared() -> &'static Config {
    SHARED.get_or_init(load)
}
