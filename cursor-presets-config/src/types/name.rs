//! Preset names.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Reserved name of the wildcard default definition.
pub const WILDCARD_NAME: &str = "*";

/// Reserved name of the built-in fallback preset.
pub const FALLBACK_NAME: &str = "fallback";

/// Conventional preset tried at startup before the fallback.
pub const BOX_NAME: &str = "box";

/// Identifier of a preset.
///
/// Cloning is cheap (the text is shared), so names can be copied freely into
/// the selection history and the store index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct PresetName(Arc<str>);

impl PresetName {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// The wildcard default name (`*`)
    pub fn wildcard() -> Self {
        Self::new(WILDCARD_NAME)
    }

    /// The built-in fallback name
    pub fn fallback() -> Self {
        Self::new(FALLBACK_NAME)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_wildcard(&self) -> bool {
        &*self.0 == WILDCARD_NAME
    }

    pub fn is_fallback(&self) -> bool {
        &*self.0 == FALLBACK_NAME
    }
}

impl fmt::Display for PresetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Deref for PresetName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for PresetName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PresetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for PresetName {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<&str> for PresetName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<PresetName> for String {
    fn from(name: PresetName) -> Self {
        name.0.to_string()
    }
}

impl PartialEq<str> for PresetName {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for PresetName {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
