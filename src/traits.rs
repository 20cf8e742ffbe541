//! Collaborator traits between the preset engine and its host.
//!
//! The applicator never talks to a display directly. It pushes resolved
//! values through these traits, which lets the same engine drive a real
//! terminal ([`crate::terminal_host::TerminalHost`]) or a recording mock in
//! tests.
//!
//! # Absent versus explicit nil
//!
//! The two shape setters take an `Option`: they receive `None` only when the
//! preset explicitly set the shape to nothing. Blink count, interval and delay
//! always resolve to a value and take it directly.

use std::time::Duration;

use cursor_presets_config::{BlinkMode, CursorShape, PresetName};

/// Name of the cursor element passed to [`FaceStyler::set_face_foreground`]
pub const CURSOR_ELEMENT: &str = "cursor";

/// Name of the default visual element used when a face cannot be resolved
pub const DEFAULT_ELEMENT: &str = "default";

/// Target of an apply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The whole process
    Global,
    /// The current consumer context only (one window, buffer or pane)
    Local,
}

/// Live cursor attribute setters.
pub trait CursorHost {
    /// Drop every local override in the current context, so that global
    /// values show through again.
    fn clear_local_overrides(&mut self);

    fn set_cursor_type(&mut self, scope: Scope, shape: Option<CursorShape>);

    fn set_cursor_in_non_selected_windows(&mut self, scope: Scope, shape: Option<CursorShape>);

    fn set_blink_count(&mut self, scope: Scope, count: i32);

    fn set_blink_interval(&mut self, scope: Scope, interval: Duration);

    fn set_blink_delay(&mut self, scope: Scope, delay: Duration);
}

/// Access to named face colors.
///
/// There is no scoped variant: setting a face foreground is always global.
pub trait FaceStyler {
    /// Foreground color of `face`, or `None` if the face is unknown or has no
    /// foreground.
    fn face_foreground(&self, face: &str) -> Option<String>;

    /// Set the foreground color of a visual element
    fn set_face_foreground(&mut self, element: &str, color: &str);
}

/// Global blink on/off switch. Has no scoped variant.
pub trait BlinkToggle {
    fn set_blink_mode(&mut self, mode: BlinkMode);
}

/// Everything the applicator needs from a host
pub trait Host: CursorHost + FaceStyler + BlinkToggle {}

impl<T: CursorHost + FaceStyler + BlinkToggle> Host for T {}

/// Interactive "pick one of these names" capability.
pub trait Prompt {
    /// Ask the user to choose among `candidates`.
    ///
    /// `default` is offered as the pre-selected answer. Returns `None` when
    /// the user cancels.
    fn choose(
        &mut self,
        message: &str,
        candidates: &[PresetName],
        default: Option<&PresetName>,
    ) -> Option<PresetName>;
}
