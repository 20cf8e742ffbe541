//! Shared integration test helpers for cursor-presets.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` attribute suppresses warnings when a file only uses
//! some of the helpers.

#![allow(dead_code)]

use std::collections::HashMap;
use std::time::Duration;

use cursor_presets::{
    BlinkMode, BlinkToggle, CursorHost, CursorShape, FaceStyler, PresetDefinition, PresetName,
    PresetStore, Prompt, Scope, Session, StateFile,
};
use tempfile::TempDir;

/// One observed call on the recording host
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ClearLocal,
    CursorType(Scope, Option<CursorShape>),
    NonSelected(Scope, Option<CursorShape>),
    BlinkCount(Scope, i32),
    BlinkInterval(Scope, Duration),
    BlinkDelay(Scope, Duration),
    FaceForeground(String, String),
    BlinkMode(BlinkMode),
}

/// Host that records every call in order
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub faces: HashMap<String, String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_face(mut self, face: &str, color: &str) -> Self {
        self.faces.insert(face.to_string(), color.to_string());
        self
    }

    /// Last cursor type pushed with `scope`
    pub fn cursor_type(&self, scope: Scope) -> Option<Option<CursorShape>> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::CursorType(s, shape) if *s == scope => Some(*shape),
            _ => None,
        })
    }

    pub fn cursor_color(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::FaceForeground(element, color) if element == "cursor" => {
                Some(color.as_str())
            }
            _ => None,
        })
    }

    pub fn blink_mode(&self) -> Option<BlinkMode> {
        self.calls.iter().rev().find_map(|call| match call {
            HostCall::BlinkMode(mode) => Some(*mode),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl CursorHost for RecordingHost {
    fn clear_local_overrides(&mut self) {
        self.calls.push(HostCall::ClearLocal);
    }

    fn set_cursor_type(&mut self, scope: Scope, shape: Option<CursorShape>) {
        self.calls.push(HostCall::CursorType(scope, shape));
    }

    fn set_cursor_in_non_selected_windows(&mut self, scope: Scope, shape: Option<CursorShape>) {
        self.calls.push(HostCall::NonSelected(scope, shape));
    }

    fn set_blink_count(&mut self, scope: Scope, count: i32) {
        self.calls.push(HostCall::BlinkCount(scope, count));
    }

    fn set_blink_interval(&mut self, scope: Scope, interval: Duration) {
        self.calls.push(HostCall::BlinkInterval(scope, interval));
    }

    fn set_blink_delay(&mut self, scope: Scope, delay: Duration) {
        self.calls.push(HostCall::BlinkDelay(scope, delay));
    }
}

impl FaceStyler for RecordingHost {
    fn face_foreground(&self, face: &str) -> Option<String> {
        self.faces.get(face).cloned()
    }

    fn set_face_foreground(&mut self, element: &str, color: &str) {
        self.calls
            .push(HostCall::FaceForeground(element.to_string(), color.to_string()));
    }
}

impl BlinkToggle for RecordingHost {
    fn set_blink_mode(&mut self, mode: BlinkMode) {
        self.calls.push(HostCall::BlinkMode(mode));
    }
}

/// Prompt that returns a scripted answer and remembers what it was offered
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub answer: Option<PresetName>,
    pub offered: Vec<PresetName>,
    pub offered_default: Option<PresetName>,
}

impl ScriptedPrompt {
    pub fn answering(name: &str) -> Self {
        Self {
            answer: Some(PresetName::new(name)),
            ..Default::default()
        }
    }

    pub fn cancelling() -> Self {
        Self::default()
    }
}

impl Prompt for ScriptedPrompt {
    fn choose(
        &mut self,
        _message: &str,
        candidates: &[PresetName],
        default: Option<&PresetName>,
    ) -> Option<PresetName> {
        self.offered = candidates.to_vec();
        self.offered_default = default.cloned();
        self.answer.clone()
    }
}

pub fn store(definitions: Vec<PresetDefinition>) -> PresetStore {
    PresetStore::from_definitions(definitions).expect("valid preset collection")
}

/// A session over `definitions` with its state file in a fresh temp dir.
///
/// Keep the `TempDir` alive until the test is done with the state file.
pub fn session(definitions: Vec<PresetDefinition>) -> (Session<RecordingHost>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let state_file = StateFile::new(temp_dir.path().join("latest-state.yaml"));
    let session = Session::new(store(definitions), RecordingHost::new(), state_file);
    (session, temp_dir)
}
