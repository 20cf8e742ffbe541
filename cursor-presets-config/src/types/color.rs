//! Cursor color values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

const UNSPECIFIED: &str = "unspecified";

/// Color requested for the cursor.
///
/// Color strings are opaque to the engine (`"#ff5555"`, `red`, ...). A face
/// reference is looked up through the host at apply time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CursorColor {
    /// Leave the current color alone
    Unspecified,
    /// A literal color understood by the host
    Color(String),
    /// Use the foreground color of a named face
    Face(String),
}

/// On-disk shape: a bare string or `{ face: name }`.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawColor {
    Literal(String),
    Face { face: String },
}

impl Serialize for CursorColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = match self {
            CursorColor::Unspecified => RawColor::Literal(UNSPECIFIED.to_string()),
            CursorColor::Color(color) => RawColor::Literal(color.clone()),
            CursorColor::Face(face) => RawColor::Face { face: face.clone() },
        };
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CursorColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawColor::deserialize(deserializer)? {
            RawColor::Literal(s) if s == UNSPECIFIED => CursorColor::Unspecified,
            RawColor::Literal(s) => CursorColor::Color(s),
            RawColor::Face { face } => CursorColor::Face(face),
        })
    }
}
