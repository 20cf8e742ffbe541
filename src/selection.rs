//! Which preset was applied last, and which ones before it.

use cursor_presets_config::PresetName;

/// Maximum number of names remembered in the history
pub const HISTORY_LIMIT: usize = 32;

/// Process-wide selection record.
///
/// Only a successful global apply updates it; see
/// [`crate::applicator::Applicator::apply_global`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    last_selected: Option<PresetName>,
    /// Most recent first, without duplicates
    history: Vec<PresetName>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_selected(&self) -> Option<&PresetName> {
        self.last_selected.as_ref()
    }

    /// Previously selected names, most recent first
    pub fn history(&self) -> &[PresetName] {
        &self.history
    }

    /// Record a selection, moving `name` to the front of the history
    pub(crate) fn record(&mut self, name: PresetName) {
        self.history.retain(|entry| entry != &name);
        self.history.insert(0, name.clone());
        self.history.truncate(HISTORY_LIMIT);
        self.last_selected = Some(name);
    }

    /// Default answer for the next prompt.
    ///
    /// The previous selection when there is one, so accepting the default
    /// toggles between the two most recent presets.
    pub fn prompt_default(&self) -> Option<&PresetName> {
        self.history.get(1).or_else(|| self.history.first())
    }
}
