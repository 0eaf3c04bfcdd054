//! Configuration management
//!
//! Values come from drivers layered in priority order: the process
//! environment first, then an optional TOML file. For each field the first
//! driver with a non-empty value wins.

use crate::domain::Interval;
use crate::error::{ChronoNoteError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the Obsidian vault
pub const VAULT_NAME_KEY: &str = "OBSIDIAN_VAULT_NAME";

/// Where and how notes of one interval are stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IntervalConfig {
    /// Luxon-style token used to name the note file
    #[serde(default)]
    pub file_format: String,
    /// Folder the notes live in
    #[serde(default, rename = "path")]
    pub folder_path: String,
    /// Template copied into new notes
    #[serde(default)]
    pub template_path: String,
}

impl IntervalConfig {
    pub fn file_format_key(interval: Interval) -> String {
        format!("{}_FILE_FORMAT", interval.env_prefix())
    }

    pub fn folder_path_key(interval: Interval) -> String {
        format!("{}_PATH", interval.env_prefix())
    }

    pub fn template_path_key(interval: Interval) -> String {
        format!("{}_TEMPLATE_PATH", interval.env_prefix())
    }

    /// Fill every empty field from `fallback`
    fn or_fill(mut self, fallback: IntervalConfig) -> Self {
        if self.file_format.is_empty() {
            self.file_format = fallback.file_format;
        }
        if self.folder_path.is_empty() {
            self.folder_path = fallback.folder_path;
        }
        if self.template_path.is_empty() {
            self.template_path = fallback.template_path;
        }
        self
    }
}

/// Source of configuration values
pub trait ConfigDriver {
    /// Name of the Obsidian vault, if configured
    fn vault_name(&self) -> Option<String>;

    /// Settings for one interval; unset fields are empty strings
    fn interval_config(&self, interval: Interval) -> IntervalConfig;
}

/// Reads configuration from environment variables
#[derive(Debug, Clone, Default)]
pub struct EnvConfigDriver {
    overrides: Option<HashMap<String, String>>,
}

impl EnvConfigDriver {
    /// Driver backed by the process environment
    pub fn new() -> Self {
        EnvConfigDriver { overrides: None }
    }

    /// Driver backed by a fixed set of variables instead of the process environment
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        EnvConfigDriver {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match &self.overrides {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        }
    }
}

impl ConfigDriver for EnvConfigDriver {
    fn vault_name(&self) -> Option<String> {
        self.get(VAULT_NAME_KEY)
    }

    fn interval_config(&self, interval: Interval) -> IntervalConfig {
        IntervalConfig {
            file_format: self
                .get(&IntervalConfig::file_format_key(interval))
                .unwrap_or_default(),
            folder_path: self
                .get(&IntervalConfig::folder_path_key(interval))
                .unwrap_or_default(),
            template_path: self
                .get(&IntervalConfig::template_path_key(interval))
                .unwrap_or_default(),
        }
    }
}

/// Reads configuration from a TOML file:
///
/// ```toml
/// vault = "Personal"
///
/// [daily]
/// file_format = "yyyy-MM-dd cccc"
/// path = "~/Vaults/Personal/Daily"
/// template_path = "~/Vaults/Personal/Templates/Daily.md"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileConfigDriver {
    #[serde(default)]
    vault: Option<String>,
    #[serde(default)]
    daily: Option<IntervalConfig>,
    #[serde(default)]
    weekly: Option<IntervalConfig>,
    #[serde(default)]
    monthly: Option<IntervalConfig>,
    #[serde(default)]
    quarterly: Option<IntervalConfig>,
    #[serde(default)]
    annually: Option<IntervalConfig>,
}

impl FileConfigDriver {
    /// Default config file location (`<config dir>/chrono-notes/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("chrono-notes").join("config.toml"))
    }

    /// Load a config file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChronoNoteError::Config(format!("Config file not found: {}", path.display()))
            } else {
                ChronoNoteError::Io(e)
            }
        })?;

        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn section(&self, interval: Interval) -> Option<&IntervalConfig> {
        match interval {
            Interval::Daily => self.daily.as_ref(),
            Interval::Weekly => self.weekly.as_ref(),
            Interval::Monthly => self.monthly.as_ref(),
            Interval::Quarterly => self.quarterly.as_ref(),
            Interval::Annually => self.annually.as_ref(),
        }
    }
}

impl ConfigDriver for FileConfigDriver {
    fn vault_name(&self) -> Option<String> {
        self.vault.clone()
    }

    fn interval_config(&self, interval: Interval) -> IntervalConfig {
        self.section(interval).cloned().unwrap_or_default()
    }
}

/// Layered view over one or more config drivers
pub struct ConfigProvider {
    drivers: Vec<Box<dyn ConfigDriver>>,
}

impl ConfigProvider {
    /// Create a provider; earlier drivers take precedence
    pub fn new(drivers: Vec<Box<dyn ConfigDriver>>) -> Self {
        ConfigProvider { drivers }
    }

    /// Environment variables over an optional config file.
    ///
    /// An explicit `config_path` must exist. Without one, the default location
    /// is used only when a file is present there.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut drivers: Vec<Box<dyn ConfigDriver>> = vec![Box::new(EnvConfigDriver::new())];

        match config_path {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                drivers.push(Box::new(FileConfigDriver::load(path)?));
            }
            None => {
                if let Some(path) = FileConfigDriver::default_path().filter(|p| p.is_file()) {
                    tracing::debug!("Loading default config file {}", path.display());
                    drivers.push(Box::new(FileConfigDriver::load(&path)?));
                }
            }
        }

        Ok(ConfigProvider::new(drivers))
    }

    pub fn vault_name(&self) -> Option<String> {
        self.drivers
            .iter()
            .filter_map(|driver| driver.vault_name())
            .find(|name| !name.is_empty())
    }

    pub fn interval_config(&self, interval: Interval) -> IntervalConfig {
        let config = self
            .drivers
            .iter()
            .map(|driver| driver.interval_config(interval))
            .fold(IntervalConfig::default(), IntervalConfig::or_fill);

        tracing::debug!("File format: {}", config.file_format);
        tracing::debug!("Folder path: {}", config.folder_path);
        tracing::debug!("Template path: {}", config.template_path);

        config
    }

    /// Vault name, or `MissingConfiguration` when unset or empty
    pub fn validate_vault_name(&self) -> Result<String> {
        self.vault_name()
            .ok_or_else(|| ChronoNoteError::MissingConfiguration(VAULT_NAME_KEY.to_string()))
    }

    /// Check that all three interval settings are non-empty
    pub fn validate_interval_config(interval: Interval, config: &IntervalConfig) -> Result<()> {
        let fields = [
            (&config.file_format, IntervalConfig::file_format_key(interval)),
            (&config.folder_path, IntervalConfig::folder_path_key(interval)),
            (&config.template_path, IntervalConfig::template_path_key(interval)),
        ];

        for (value, key) in fields {
            if value.is_empty() {
                return Err(ChronoNoteError::MissingConfiguration(key));
            }
        }

        Ok(())
    }
}
