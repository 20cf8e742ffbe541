//! The persisted "last applied preset" record.
//!
//! The file holds a generated header comment followed by one YAML scalar,
//! the preset name:
//!
//! ```text
//! # Auto-generated by cursor-presets, do not edit (format: yaml, version 1)
//! bar-no-blink
//! ```
//!
//! A missing file and a zero-length file both mean "nothing recorded". Any
//! other content that does not parse as a name is reported as corrupt.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StateError;
use crate::types::PresetName;

/// Header written above the recorded name
pub const STATE_HEADER: &str =
    "# Auto-generated by cursor-presets, do not edit (format: yaml, version 1)\n";

/// Reads and writes the state file at a fixed path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record `name`, replacing any previous record.
    ///
    /// The content goes to a sibling temp file first and is then renamed into
    /// place, so a crash never leaves a half-written record behind.
    pub fn write(&self, name: &PresetName) -> Result<(), StateError> {
        let io_err = |source| StateError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let body = serde_yaml_ng::to_string(name).map_err(StateError::Serialize)?;
        let contents = format!("{STATE_HEADER}{body}");

        let temp_path = self.path.with_extension("yaml.tmp");
        fs::write(&temp_path, contents).map_err(io_err)?;
        fs::rename(&temp_path, &self.path).map_err(io_err)?;

        log::debug!("Saved latest preset to {:?}: {}", self.path, name);
        Ok(())
    }

    /// Read the recorded name, if any.
    ///
    /// The name is returned as a candidate only; it is not checked against any
    /// preset store.
    pub fn read(&self) -> Result<Option<PresetName>, StateError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("No state file at {:?}", self.path);
                return Ok(None);
            }
            Err(source) => {
                return Err(StateError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if contents.is_empty() {
            log::debug!("State file {:?} is empty", self.path);
            return Ok(None);
        }

        let name: PresetName =
            serde_yaml_ng::from_str(&contents).map_err(|source| StateError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        log::debug!("Loaded latest preset from {:?}: {}", self.path, name);
        Ok(Some(name))
    }
}
