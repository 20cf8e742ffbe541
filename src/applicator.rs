//! Pushing resolved presets into a live host.
//!
//! Two operations with deliberately asymmetric side effects:
//!
//! - [`Applicator::apply_global`] sets every attribute process-wide, records
//!   the selection and runs the post-apply hooks.
//! - [`Applicator::apply_scoped`] sets the cursor attributes for the current
//!   context only and leaves the selection alone. **Color and blink mode are
//!   still applied globally**, because the host has no scoped variant of
//!   either facility. Callers should warn users about this.

use cursor_presets_config::{
    CursorColor, PresetError, PresetName, PresetStore, ResolvedAttributes, StateError,
};

use crate::hooks::{HookId, HookRegistry};
use crate::selection::SelectionState;
use crate::traits::{CURSOR_ELEMENT, DEFAULT_ELEMENT, FaceStyler, Host, Scope};

/// Errors surfaced by the apply entry points.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    /// The requested name could not be resolved.
    #[error("cannot apply preset: {0}")]
    UnresolvedPreset(PresetError),
    /// A name had to be chosen but the store has no named presets.
    #[error("there are no presets to choose from")]
    EmptyStore,
    /// The user cancelled the prompt.
    #[error("preset selection cancelled")]
    Cancelled,
    /// The preset was applied but recording it failed.
    #[error(transparent)]
    State(#[from] StateError),
}

impl From<PresetError> for ApplyError {
    fn from(err: PresetError) -> Self {
        match err {
            PresetError::EmptyStore => ApplyError::EmptyStore,
            other => ApplyError::UnresolvedPreset(other),
        }
    }
}

/// Applies presets and owns the selection state they update
#[derive(Debug, Default)]
pub struct Applicator {
    selection: SelectionState,
    hooks: HookRegistry,
}

impl Applicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Register a callback run after every successful global apply
    pub fn register_hook(&mut self, hook: impl FnMut(&SelectionState) + Send + 'static) -> HookId {
        self.hooks.register(hook)
    }

    pub fn unregister_hook(&mut self, id: HookId) -> bool {
        self.hooks.unregister(id)
    }

    /// Apply `name` to the whole process.
    ///
    /// Nothing is touched if resolution fails. On success the local
    /// overrides of the current context are cleared, every attribute is
    /// pushed globally, `name` becomes the last selection and the hooks run.
    pub fn apply_global<H: Host + ?Sized>(
        &mut self,
        store: &PresetStore,
        host: &mut H,
        name: &str,
    ) -> Result<ResolvedAttributes, ApplyError> {
        let resolved = store.resolve(name)?;
        log::info!("Applying preset '{}' globally", name);

        host.clear_local_overrides();
        push_attributes(host, Scope::Global, &resolved);
        apply_color(host, resolved.cursor_color.as_ref());
        host.set_blink_mode(resolved.blink_mode);

        self.selection.record(PresetName::new(name));
        self.hooks.run(&self.selection);
        Ok(resolved)
    }

    /// Apply `name` to the current context only.
    ///
    /// Selection state and hooks are untouched. Color and blink mode still
    /// change globally.
    pub fn apply_scoped<H: Host + ?Sized>(
        &self,
        store: &PresetStore,
        host: &mut H,
        name: &str,
    ) -> Result<ResolvedAttributes, ApplyError> {
        let resolved = store.resolve(name)?;
        log::info!("Applying preset '{}' locally", name);

        push_attributes(host, Scope::Local, &resolved);
        apply_color(host, resolved.cursor_color.as_ref());
        host.set_blink_mode(resolved.blink_mode);
        Ok(resolved)
    }
}

fn push_attributes<H: Host + ?Sized>(host: &mut H, scope: Scope, resolved: &ResolvedAttributes) {
    host.set_cursor_type(scope, resolved.cursor_type);
    host.set_cursor_in_non_selected_windows(scope, resolved.cursor_in_non_selected_windows);
    host.set_blink_count(scope, resolved.blink_count);
    host.set_blink_interval(scope, resolved.blink_interval);
    host.set_blink_delay(scope, resolved.blink_delay);
}

/// Set the cursor color.
///
/// A face that cannot be resolved falls back to the default element's color.
/// `Unspecified` and absent colors leave the cursor color alone.
fn apply_color<H: FaceStyler + ?Sized>(host: &mut H, color: Option<&CursorColor>) {
    let color = match color {
        None | Some(CursorColor::Unspecified) => return,
        Some(CursorColor::Color(color)) => color.clone(),
        Some(CursorColor::Face(face)) => match host.face_foreground(face) {
            Some(color) => color,
            None => {
                log::warn!(
                    "Face '{}' has no foreground color, using the '{}' element color",
                    face,
                    DEFAULT_ELEMENT
                );
                match host.face_foreground(DEFAULT_ELEMENT) {
                    Some(color) => color,
                    None => {
                        log::warn!(
                            "No '{}' element color either, cursor color unchanged",
                            DEFAULT_ELEMENT
                        );
                        return;
                    }
                }
            }
        },
    };
    host.set_face_foreground(CURSOR_ELEMENT, &color);
}
