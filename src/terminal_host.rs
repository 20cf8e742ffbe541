//! A host that drives a real terminal through escape sequences.
//!
//! Cursor shape and blink share one control sequence, DECSCUSR
//! (`CSI Ps SP q`), where odd values blink and even values are steady:
//!
//! | Ps  | Style               |
//! |-----|---------------------|
//! | 1/2 | block               |
//! | 3/4 | underline (`hbar`)  |
//! | 5/6 | bar                 |
//!
//! A hollow cursor has no DECSCUSR form and is shown as a block. `none` and
//! an explicit nil hide the cursor (`CSI ?25 l`). The cursor color is set
//! with OSC 12.
//!
//! A terminal has no notion of non-selected windows, blink count, interval
//! or delay; those values are kept on the host (see the accessors) and
//! logged at debug level.

use std::collections::BTreeMap;
use std::io::Write;
use std::time::Duration;

use cursor_presets_config::{BlinkMode, CursorShape};

use crate::traits::{BlinkToggle, CursorHost, FaceStyler, Scope};

/// Blink settings that have no escape sequence; `None` until first set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlinkTiming {
    pub count: Option<i32>,
    pub interval: Option<Duration>,
    pub delay: Option<Duration>,
}

pub struct TerminalHost<W: Write> {
    out: W,
    faces: BTreeMap<String, String>,
    /// Global cursor shape; outer `None` means never set
    global_shape: Option<Option<CursorShape>>,
    /// Local override of the shape for this terminal
    local_shape: Option<Option<CursorShape>>,
    non_selected_shape: Option<Option<CursorShape>>,
    blink_mode: BlinkMode,
    timing: BlinkTiming,
    cursor_color: Option<String>,
}

impl<W: Write> TerminalHost<W> {
    /// Create a host writing to `out`, resolving faces from `faces`
    pub fn new(out: W, faces: BTreeMap<String, String>) -> Self {
        Self {
            out,
            faces,
            global_shape: None,
            local_shape: None,
            non_selected_shape: None,
            blink_mode: BlinkMode::Enable,
            timing: BlinkTiming::default(),
            cursor_color: None,
        }
    }

    /// Shape currently shown: the local override if any, else the global one
    pub fn effective_shape(&self) -> Option<Option<CursorShape>> {
        self.local_shape.or(self.global_shape)
    }

    pub fn blink_mode(&self) -> BlinkMode {
        self.blink_mode
    }

    pub fn timing(&self) -> &BlinkTiming {
        &self.timing
    }

    pub fn cursor_color(&self) -> Option<&str> {
        self.cursor_color.as_deref()
    }

    pub fn non_selected_shape(&self) -> Option<Option<CursorShape>> {
        self.non_selected_shape
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, sequence: &str) {
        debug_log!("HOST", "Writing {:?}", sequence);
        if let Err(e) = self
            .out
            .write_all(sequence.as_bytes())
            .and_then(|()| self.out.flush())
        {
            log::warn!("Failed to write cursor sequence: {}", e);
        }
    }

    /// Re-emit the cursor style for the effective shape and blink mode
    fn refresh_cursor(&mut self) {
        let Some(shape) = self.effective_shape() else {
            return;
        };
        match shape.and_then(|shape| decscusr_base(&shape)) {
            Some(base) => {
                // Odd Ps blinks, the next even value is the steady variant
                let ps = if self.blink_mode.is_enabled() { base } else { base + 1 };
                self.emit(&format!("\x1b[?25h\x1b[{} q", ps));
            }
            None => self.emit("\x1b[?25l"),
        }
    }
}

/// Blinking DECSCUSR value for a shape, `None` if the cursor is hidden
fn decscusr_base(shape: &CursorShape) -> Option<u8> {
    match shape {
        CursorShape::Box | CursorShape::Hollow => Some(1),
        CursorShape::Hbar(_) => Some(3),
        CursorShape::Bar(_) => Some(5),
        CursorShape::Hidden => None,
    }
}

impl<W: Write> CursorHost for TerminalHost<W> {
    fn clear_local_overrides(&mut self) {
        if self.local_shape.take().is_some() {
            self.refresh_cursor();
        }
    }

    fn set_cursor_type(&mut self, scope: Scope, shape: Option<CursorShape>) {
        match scope {
            Scope::Global => self.global_shape = Some(shape),
            Scope::Local => self.local_shape = Some(shape),
        }
        if let Some(CursorShape::Hollow) = shape {
            log::debug!("Hollow cursor is shown as a block");
        }
        self.refresh_cursor();
    }

    fn set_cursor_in_non_selected_windows(&mut self, scope: Scope, shape: Option<CursorShape>) {
        log::debug!(
            "Non-selected cursor {:?} ({:?}) recorded; terminals have no equivalent",
            shape,
            scope
        );
        self.non_selected_shape = Some(shape);
    }

    fn set_blink_count(&mut self, _scope: Scope, count: i32) {
        log::debug!("Blink count {} recorded", count);
        self.timing.count = Some(count);
    }

    fn set_blink_interval(&mut self, _scope: Scope, interval: Duration) {
        log::debug!("Blink interval {:?} recorded", interval);
        self.timing.interval = Some(interval);
    }

    fn set_blink_delay(&mut self, _scope: Scope, delay: Duration) {
        log::debug!("Blink delay {:?} recorded", delay);
        self.timing.delay = Some(delay);
    }
}

impl<W: Write> FaceStyler for TerminalHost<W> {
    fn face_foreground(&self, face: &str) -> Option<String> {
        self.faces.get(face).cloned()
    }

    fn set_face_foreground(&mut self, element: &str, color: &str) {
        if element != crate::traits::CURSOR_ELEMENT {
            log::debug!("Only the cursor color can be set, ignoring '{}'", element);
            return;
        }
        self.cursor_color = Some(color.to_string());
        self.emit(&format!("\x1b]12;{}\x07", color));
    }
}

impl<W: Write> BlinkToggle for TerminalHost<W> {
    fn set_blink_mode(&mut self, mode: BlinkMode) {
        self.blink_mode = mode;
        self.refresh_cursor();
    }
}
