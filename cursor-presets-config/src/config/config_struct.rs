//! Core `Config` struct definition.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::preset_types::{PresetDefinition, PresetStore};
use crate::types::LogLevel;

/// Contents of `config.yaml`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ordered preset collection, including the optional `*` wildcard default
    #[serde(default = "crate::defaults::builtin_presets")]
    pub presets: Vec<PresetDefinition>,

    /// Face name to foreground color, consulted for `{ face: .. }` cursor colors
    #[serde(default = "crate::defaults::faces")]
    pub faces: BTreeMap<String, String>,

    /// Write the last applied preset to the state file after each global apply
    #[serde(default = "crate::defaults::persist_state")]
    pub persist_state: bool,

    /// Override of the state file location; a leading `~/` is expanded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,

    /// Debug log verbosity; `DEBUG_LEVEL` and `--log-level` take precedence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            presets: crate::defaults::builtin_presets(),
            faces: crate::defaults::faces(),
            persist_state: crate::defaults::persist_state(),
            state_file: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Build the preset store described by this config.
    ///
    /// Fails when two definitions share a name.
    pub fn preset_store(&self) -> Result<PresetStore, ConfigError> {
        Ok(PresetStore::from_definitions(self.presets.iter().cloned())?)
    }

    /// Foreground color of a face, if the face is known
    pub fn face_color(&self, face: &str) -> Option<&str> {
        self.faces.get(face).map(String::as_str)
    }

    pub fn with_presets(mut self, presets: Vec<PresetDefinition>) -> Self {
        self.presets = presets;
        self
    }

    pub fn with_state_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_file = Some(path.into());
        self
    }

    pub fn with_persist_state(mut self, persist: bool) -> Self {
        self.persist_state = persist;
        self
    }
}
