//! Typed error variants for the cursor-presets-config crate.
//!
//! Callers that only need a message can keep using `anyhow`; every type here
//! implements `std::error::Error`, so `?` converts them automatically. Callers
//! that need to react to a specific failure (the startup path recovering from
//! a corrupt state file, for instance) match on the variants instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::PresetName;

/// Errors raised while looking up or resolving presets.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetError {
    /// The name is neither a stored preset nor the built-in fallback.
    #[error("unknown preset: '{0}'")]
    UnknownPreset(PresetName),

    /// No named presets exist (the wildcard default does not count).
    #[error("there are no presets to choose from")]
    EmptyStore,

    /// Two definitions in the same collection share a name.
    #[error("preset '{0}' is defined more than once")]
    DuplicatePreset(PresetName),
}

/// Errors raised while reading or writing the persisted state file.
#[derive(Debug, Error)]
pub enum StateError {
    /// The state file exists but could not be read, or could not be written.
    #[error("state file I/O failed for {path:?}: {source}")]
    Io {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The state file is non-empty but does not contain a preset name.
    #[error("state file {path:?} is corrupt: {source}")]
    Corrupt {
        /// Path of the state file.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The preset name could not be serialized.
    #[error("could not serialize preset name: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),
}

/// Errors that can occur when loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// The preset collection failed validation.
    #[error("Config validation error: {0}")]
    Validation(#[from] PresetError),
}
