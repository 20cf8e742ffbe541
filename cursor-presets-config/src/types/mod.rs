//! Value types used inside preset definitions.
//!
//! - `name`: `PresetName` and the reserved names
//! - `shape`: `CursorShape` descriptors
//! - `color`: `CursorColor` (literal, face reference, unspecified)
//! - `blink`: `BlinkMode` and the seconds-based duration adapter
//! - `level`: `LogLevel` for the config file and CLI

pub mod blink;
pub mod color;
pub mod level;
pub mod name;
pub mod shape;

pub use blink::BlinkMode;
pub use color::CursorColor;
pub use level::LogLevel;
pub use name::{BOX_NAME, FALLBACK_NAME, PresetName, WILDCARD_NAME};
pub use shape::{CursorShape, ParseShapeError};
