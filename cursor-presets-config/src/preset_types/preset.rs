//! `PropertySet` and `PresetDefinition`: the sparse, user-authored side.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::blink::opt_secs;
use crate::types::{BlinkMode, CursorColor, CursorShape, PresetName};

/// Every key a property set may contain. Anything else in a preset file is
/// reported and ignored.
pub const RECOGNIZED_KEYS: &[&str] = &[
    "cursor-color",
    "cursor-type",
    "cursor-in-non-selected-windows",
    "blink-mode",
    "blink-count",
    "blink-interval",
    "blink-delay",
    "inherit",
];

/// Keeps `key: null` distinct from a missing key: missing stays `None`
/// (via `#[serde(default)]`), null becomes `Some(None)`.
fn explicit_nil<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Sparse set of cursor properties.
///
/// `None` always means "not mentioned". The two shape fields are
/// `Option<Option<_>>`: `Some(None)` is an explicit nil set by the user and
/// must survive resolution untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct PropertySet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_color: Option<CursorColor>,

    #[serde(
        default,
        deserialize_with = "explicit_nil",
        skip_serializing_if = "Option::is_none"
    )]
    pub cursor_type: Option<Option<CursorShape>>,

    #[serde(
        default,
        deserialize_with = "explicit_nil",
        skip_serializing_if = "Option::is_none"
    )]
    pub cursor_in_non_selected_windows: Option<Option<CursorShape>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blink_mode: Option<BlinkMode>,

    /// Number of blinks before the cursor stops; zero or negative blinks forever
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blink_count: Option<i32>,

    #[serde(default, with = "opt_secs", skip_serializing_if = "Option::is_none")]
    pub blink_interval: Option<Duration>,

    #[serde(default, with = "opt_secs", skip_serializing_if = "Option::is_none")]
    pub blink_delay: Option<Duration>,

    /// Single-hop reference to another preset in the same store
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inherit: Option<PresetName>,
}

impl PropertySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the cursor color
    pub fn cursor_color(mut self, color: CursorColor) -> Self {
        self.cursor_color = Some(color);
        self
    }

    /// Builder method to set the cursor shape; `None` records an explicit nil
    pub fn cursor_type(mut self, shape: Option<CursorShape>) -> Self {
        self.cursor_type = Some(shape);
        self
    }

    /// Builder method to set the shape shown in non-selected windows; `None`
    /// records an explicit nil
    pub fn cursor_in_non_selected_windows(mut self, shape: Option<CursorShape>) -> Self {
        self.cursor_in_non_selected_windows = Some(shape);
        self
    }

    pub fn blink_mode(mut self, mode: BlinkMode) -> Self {
        self.blink_mode = Some(mode);
        self
    }

    pub fn blink_count(mut self, count: i32) -> Self {
        self.blink_count = Some(count);
        self
    }

    pub fn blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = Some(interval);
        self
    }

    pub fn blink_delay(mut self, delay: Duration) -> Self {
        self.blink_delay = Some(delay);
        self
    }

    pub fn inherit(mut self, parent: impl Into<PresetName>) -> Self {
        self.inherit = Some(parent.into());
        self
    }

    /// Fill every property not already provided by `self` from `lower`.
    ///
    /// Values are replaced wholesale, never merged. `inherit` is not copied:
    /// it belongs to the definition that declared it.
    pub fn fill_from(&self, lower: &PropertySet) -> PropertySet {
        PropertySet {
            cursor_color: self
                .cursor_color
                .clone()
                .or_else(|| lower.cursor_color.clone()),
            cursor_type: self.cursor_type.or(lower.cursor_type),
            cursor_in_non_selected_windows: self
                .cursor_in_non_selected_windows
                .or(lower.cursor_in_non_selected_windows),
            blink_mode: self.blink_mode.or(lower.blink_mode),
            blink_count: self.blink_count.or(lower.blink_count),
            blink_interval: self.blink_interval.or(lower.blink_interval),
            blink_delay: self.blink_delay.or(lower.blink_delay),
            inherit: self.inherit.clone(),
        }
    }

    /// True when no property at all is set
    pub fn is_empty(&self) -> bool {
        *self == PropertySet::default()
    }
}

/// One named entry of a preset collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetDefinition {
    pub name: PresetName,

    #[serde(flatten)]
    pub properties: PropertySet,
}

impl PresetDefinition {
    pub fn new(name: impl Into<PresetName>, properties: PropertySet) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// The wildcard default definition
    pub fn wildcard(properties: PropertySet) -> Self {
        Self::new(PresetName::wildcard(), properties)
    }
}
