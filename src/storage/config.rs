use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::persistence::DEFAULT_STORAGE_KEY;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
}

/// General configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Key the clip list is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Store file location (default: <data dir>/store.json)
    #[serde(default)]
    pub store_file: Option<PathBuf>,

    /// How long a row shows "Copied!" after a successful copy
    #[serde(default = "default_copied_feedback_ms")]
    pub copied_feedback_ms: u64,

    /// How long flash messages stay in the status line
    #[serde(default = "default_flash_message_duration_ms")]
    pub flash_message_duration_ms: u64,

    /// Minimum level written to the log file
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Minimum level shown as a flash message in the TUI
    #[serde(default = "default_flash_level")]
    pub flash_level: String,

    /// Hand store writes to a background thread
    #[serde(default = "default_true")]
    pub background_writes: bool,

    /// Capture the mouse for click and drag-and-drop
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            storage_key: default_storage_key(),
            store_file: None,
            copied_feedback_ms: default_copied_feedback_ms(),
            flash_message_duration_ms: default_flash_message_duration_ms(),
            log_level: default_log_level(),
            flash_level: default_flash_level(),
            background_writes: true,
            mouse: true,
        }
    }
}

impl GeneralConfig {
    /// Store file path, falling back to `data_dir/store.json`
    pub fn store_path(&self, data_dir: &Path) -> PathBuf {
        self.store_file
            .clone()
            .unwrap_or_else(|| data_dir.join("store.json"))
    }
}

// Default value functions for serde
fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_copied_feedback_ms() -> u64 {
    1500
}

fn default_flash_message_duration_ms() -> u64 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_flash_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

/// Trait for configuration storage
pub trait ConfigStorage: Send + Sync {
    /// Load configuration from file
    fn load(&self) -> Result<Config>;

    /// Get the config file path
    fn path(&self) -> &PathBuf;

    /// Create default configuration file if it doesn't exist
    fn create_default(&self) -> Result<()>;
}

/// TOML-based implementation of ConfigStorage
pub struct TomlConfigStorage {
    path: PathBuf,
}

impl TomlConfigStorage {
    pub fn new(path: PathBuf) -> Self {
        TomlConfigStorage { path }
    }
}

impl ConfigStorage for TomlConfigStorage {
    fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            log::info!(
                "Config file not found at {:?}, creating default configuration",
                self.path
            );
            self.create_default()?;
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read config from {:?}", self.path))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {:?}", self.path))?;

        log::info!("Loaded configuration from {:?}", self.path);
        log::debug!(
            "Config: storage_key={}, copied_feedback_ms={}",
            config.general.storage_key,
            config.general.copied_feedback_ms
        );

        Ok(config)
    }

    fn path(&self) -> &PathBuf {
        &self.path
    }

    fn create_default(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let example_config = include_str!("../../quickclip.toml.example");

        fs::write(&self.path, example_config)
            .with_context(|| format!("Failed to create default config at {:?}", self.path))?;

        log::info!("Created default configuration at {:?}", self.path);
        Ok(())
    }
}
