//! Config persistence and path resolution for `Config`.
//!
//! Covers:
//! - `load` / `load_from` / `save` / `save_to` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_path`, `config_dir`, `state_dir`)
//! - State file resolution (`state_file_path`, `state_file`)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_yaml_ng::Value;

use super::config_struct::Config;
use crate::error::ConfigError;
use crate::preset_types::storage::warn_unrecognized_keys;
use crate::state_file::StateFile;

const APP_DIR: &str = "cursor-presets";
const STATE_FILE_NAME: &str = "latest-state.yaml";

impl Config {
    /// Load configuration from the default path, creating it when missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            return Self::load_from(&config_path);
        }

        log::info!(
            "Config file not found, creating default at {:?}",
            config_path
        );
        let config = Self::default();
        if let Err(e) = config.save_to(&config_path) {
            log::error!("Failed to save default config: {}", e);
            return Err(e);
        }
        log::info!("Default config created successfully");
        Ok(config)
    }

    /// Load configuration from an explicit path.
    ///
    /// Unrecognized preset keys are logged and dropped. Duplicate preset names
    /// are rejected.
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)
            .map_err(ConfigError::from)
            .with_context(|| format!("Failed to read config {:?}", path))?;

        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid config {:?}", path))?;
        log::info!("Loaded {} presets from {:?}", config.presets.len(), path);
        Ok(config)
    }

    /// Parse and validate config text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let raw: Value = serde_yaml_ng::from_str(contents)?;
        if let Some(Value::Sequence(entries)) = raw.get("presets") {
            warn_unrecognized_keys(entries);
        }
        let config: Config = serde_yaml_ng::from_value(raw)?;
        config.preset_store()?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let yaml = serde_yaml_ng::to_string(self).context("Failed to serialize config")?;

        // Atomic save: write to temp file then rename
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)
            .with_context(|| format!("Failed to write config to {:?}", temp_path))?;
        fs::rename(&temp_path, path)
            .with_context(|| format!("Failed to move config into place at {:?}", path))?;

        Ok(())
    }

    /// Get the configuration file path (`~/.config/cursor-presets/config.yaml`)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Directory holding runtime state (`~/.local/share/cursor-presets`)
    pub fn state_dir() -> PathBuf {
        if let Some(data_dir) = dirs::data_local_dir() {
            data_dir.join(APP_DIR)
        } else if let Some(home_dir) = dirs::home_dir() {
            home_dir.join(".local").join("share").join(APP_DIR)
        } else {
            PathBuf::from(".")
        }
    }

    /// Effective state file path, honoring the `state_file` override
    pub fn state_file_path(&self) -> PathBuf {
        match &self.state_file {
            Some(path) => expand_home(path),
            None => Self::state_dir().join(STATE_FILE_NAME),
        }
    }

    pub fn state_file(&self) -> StateFile {
        StateFile::new(self.state_file_path())
    }
}

fn expand_home(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}
