//! Data layer for cursor-presets.
//!
//! This crate owns everything that can be expressed without a live display:
//!
//! - Preset value types (`PresetName`, `CursorShape`, `CursorColor`, `BlinkMode`)
//! - Preset definitions, the preset store and the resolver
//! - The built-in preset collection and fallback preset
//! - The application `Config` file
//! - The state file recording the last applied preset

pub mod config;
pub mod defaults;
pub mod error;
pub mod preset_types;
pub mod state_file;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, PresetError, StateError};
pub use preset_types::{
    PresetDefinition, PresetStore, PropertySet, RECOGNIZED_KEYS, ResolvedAttributes,
    load_presets_from, parse_presets, save_presets_to,
};
pub use state_file::{STATE_HEADER, StateFile};
pub use types::{
    BOX_NAME, BlinkMode, CursorColor, CursorShape, FALLBACK_NAME, LogLevel, ParseShapeError,
    PresetName, WILDCARD_NAME,
};
