//! Preset resolution.
//!
//! A resolved preset is built from three tiers, each one only filling gaps
//! left by the tiers before it:
//!
//! 1. the named preset's own properties
//! 2. the preset named by its `inherit` key, **one hop only**
//! 3. the wildcard default, then the built-in fallback values
//!
//! Inheritance is deliberately not transitive. If the inherited preset has an
//! `inherit` key of its own, that key is ignored. Turning this into a
//! recursive walk would change which values users get.

use std::time::Duration;

use serde::Serialize;

use crate::error::PresetError;
use crate::types::{BlinkMode, CursorColor, CursorShape, PresetName};

use super::preset::PropertySet;
use super::store::PresetStore;

/// Fully-resolved cursor attributes.
///
/// Produced fresh by every [`PresetStore::resolve`] call. `None` in
/// `cursor_color` means "do not touch the color"; `None` in the shape fields
/// is an explicit nil that is forwarded to the host as such.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ResolvedAttributes {
    pub name: PresetName,
    pub cursor_color: Option<CursorColor>,
    pub cursor_type: Option<CursorShape>,
    pub cursor_in_non_selected_windows: Option<CursorShape>,
    pub blink_mode: BlinkMode,
    pub blink_count: i32,
    #[serde(serialize_with = "secs")]
    pub blink_interval: Duration,
    #[serde(serialize_with = "secs")]
    pub blink_delay: Duration,
}

fn secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

impl PresetStore {
    /// Resolve `name` into a complete attribute set.
    ///
    /// Fails with `UnknownPreset` if `name` is neither stored nor the
    /// fallback. A missing or self-referencing `inherit` target is skipped
    /// with a warning; the preset itself still resolves.
    pub fn resolve(&self, name: &str) -> Result<ResolvedAttributes, PresetError> {
        let own = self
            .lookup(name)
            .ok_or_else(|| PresetError::UnknownPreset(PresetName::new(name)))?;

        let mut merged = own.clone();

        if let Some(parent) = &own.inherit {
            if parent == name {
                log::warn!("Preset '{}' inherits from itself; ignoring", name);
            } else if let Some(inherited) = self.lookup(parent) {
                if inherited.inherit.is_some() {
                    log::debug!(
                        "Preset '{}' inherits '{}', whose own inherit key is not followed",
                        name,
                        parent
                    );
                }
                merged = merged.fill_from(inherited);
            } else {
                log::warn!(
                    "Preset '{}' inherits from unknown preset '{}'; ignoring",
                    name,
                    parent
                );
            }
        }

        if let Some(wildcard) = self.wildcard() {
            merged = merged.fill_from(wildcard);
        }
        let merged = merged.fill_from(self.builtin_fallback());

        Ok(ResolvedAttributes::from_complete(PresetName::new(name), merged))
    }
}

impl ResolvedAttributes {
    /// Convert a property set that has been filled from the built-in fallback.
    ///
    /// The fallback sets every key except the color, so the `unwrap_or`
    /// defaults below are never reached in practice; they mirror the fallback
    /// values so the conversion stays total.
    fn from_complete(name: PresetName, set: PropertySet) -> Self {
        let fallback = crate::defaults::fallback_properties();
        Self {
            name,
            cursor_color: set.cursor_color,
            cursor_type: set
                .cursor_type
                .unwrap_or_else(|| fallback.cursor_type.flatten()),
            cursor_in_non_selected_windows: set
                .cursor_in_non_selected_windows
                .unwrap_or_else(|| fallback.cursor_in_non_selected_windows.flatten()),
            blink_mode: set
                .blink_mode
                .or(fallback.blink_mode)
                .unwrap_or(BlinkMode::Enable),
            blink_count: set.blink_count.or(fallback.blink_count).unwrap_or(10),
            blink_interval: set
                .blink_interval
                .or(fallback.blink_interval)
                .unwrap_or(Duration::from_millis(500)),
            blink_delay: set
                .blink_delay
                .or(fallback.blink_delay)
                .unwrap_or(Duration::from_millis(200)),
        }
    }
}
