//! Cursor shape descriptors.
//!
//! The resolver never interprets a shape; it only carries it to the host. The
//! textual form (`box`, `hollow`, `bar`, `bar:2`, `hbar`, `hbar:3`, `none`) is
//! what appears in preset files and on the command line.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shape of the text cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorShape {
    /// Filled block covering the whole cell
    Box,
    /// Outline-only block
    Hollow,
    /// Vertical bar, optionally with an explicit width in pixels
    Bar(Option<u8>),
    /// Horizontal bar (underscore), optionally with an explicit height in pixels
    Hbar(Option<u8>),
    /// No cursor at all
    Hidden,
}

impl fmt::Display for CursorShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CursorShape::Box => f.write_str("box"),
            CursorShape::Hollow => f.write_str("hollow"),
            CursorShape::Bar(None) => f.write_str("bar"),
            CursorShape::Bar(Some(width)) => write!(f, "bar:{width}"),
            CursorShape::Hbar(None) => f.write_str("hbar"),
            CursorShape::Hbar(Some(height)) => write!(f, "hbar:{height}"),
            CursorShape::Hidden => f.write_str("none"),
        }
    }
}

/// Error returned when a shape descriptor cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid cursor shape '{0}' (expected box, hollow, bar[:N], hbar[:N] or none)")]
pub struct ParseShapeError(String);

impl FromStr for CursorShape {
    type Err = ParseShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (kind, size) = match s.split_once(':') {
            Some((kind, size)) => {
                let size = size
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| ParseShapeError(s.to_string()))?;
                (kind.trim(), Some(size))
            }
            None => (s, None),
        };

        match (kind.to_lowercase().as_str(), size) {
            ("box", None) => Ok(CursorShape::Box),
            ("hollow", None) => Ok(CursorShape::Hollow),
            ("bar", size) => Ok(CursorShape::Bar(size)),
            ("hbar", size) => Ok(CursorShape::Hbar(size)),
            ("none", None) => Ok(CursorShape::Hidden),
            _ => Err(ParseShapeError(s.to_string())),
        }
    }
}

impl Serialize for CursorShape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CursorShape {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
