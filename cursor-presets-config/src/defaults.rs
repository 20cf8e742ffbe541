//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields, and as the source of the built-in preset collection and
//! the fallback preset.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::preset_types::{PresetDefinition, PropertySet};
use crate::types::{BlinkMode, CursorColor, CursorShape};

/// Values of the built-in fallback preset.
///
/// Every key except the color is set, which is what lets resolution always
/// produce a complete attribute set.
pub fn fallback_properties() -> PropertySet {
    PropertySet::new()
        .cursor_type(Some(CursorShape::Box))
        .cursor_in_non_selected_windows(Some(CursorShape::Hollow))
        .blink_mode(BlinkMode::Enable)
        .blink_count(10)
        .blink_interval(Duration::from_millis(500))
        .blink_delay(Duration::from_millis(200))
}

/// The preset collection shipped in a fresh config file
pub fn builtin_presets() -> Vec<PresetDefinition> {
    vec![
        PresetDefinition::new(
            "box",
            PropertySet::new().blink_interval(Duration::from_millis(1200)),
        ),
        PresetDefinition::new(
            "box-no-blink",
            PropertySet::new()
                .inherit("box")
                .blink_mode(BlinkMode::Disable),
        ),
        PresetDefinition::new(
            "bar",
            PropertySet::new()
                .cursor_type(Some(CursorShape::Bar(Some(2))))
                .blink_interval(Duration::from_millis(800)),
        ),
        PresetDefinition::new(
            "bar-no-other-window",
            PropertySet::new()
                .inherit("bar")
                .cursor_in_non_selected_windows(None),
        ),
        PresetDefinition::new(
            "bar-no-blink",
            PropertySet::new()
                .inherit("bar")
                .blink_mode(BlinkMode::Disable),
        ),
        PresetDefinition::new(
            "underscore",
            PropertySet::new()
                .cursor_type(Some(CursorShape::Hbar(Some(3))))
                .blink_count(50),
        ),
        PresetDefinition::new(
            "underscore-thin-other-window",
            PropertySet::new()
                .inherit("underscore")
                .cursor_in_non_selected_windows(Some(CursorShape::Hbar(Some(1)))),
        ),
        PresetDefinition::new(
            "underscore-thick",
            PropertySet::new()
                .cursor_type(Some(CursorShape::Hbar(Some(8))))
                .blink_interval(Duration::from_millis(300))
                .blink_count(50)
                .cursor_in_non_selected_windows(Some(CursorShape::Hbar(Some(3)))),
        ),
        PresetDefinition::new(
            "underscore-thick-no-blink",
            PropertySet::new()
                .blink_mode(BlinkMode::Disable)
                .cursor_type(Some(CursorShape::Hbar(Some(8))))
                .cursor_in_non_selected_windows(Some(CursorShape::Hbar(Some(3)))),
        ),
        PresetDefinition::wildcard(
            PropertySet::new()
                // keep whatever color the theme gives the cursor
                .cursor_color(CursorColor::Unspecified)
                .cursor_type(Some(CursorShape::Box))
                .cursor_in_non_selected_windows(Some(CursorShape::Hollow))
                .blink_mode(BlinkMode::Enable)
                .blink_count(10)
                .blink_interval(Duration::from_millis(200))
                .blink_delay(Duration::from_millis(200)),
        ),
    ]
}

/// Face colors used by the terminal host when a preset names a face
pub fn faces() -> BTreeMap<String, String> {
    [
        ("default", "#d0d0d0"),
        ("error", "#ff5555"),
        ("warning", "#f1fa8c"),
        ("success", "#50fa7b"),
        ("accent", "#bd93f9"),
    ]
    .into_iter()
    .map(|(face, color)| (face.to_string(), color.to_string()))
    .collect()
}

pub fn persist_state() -> bool {
    true
}
