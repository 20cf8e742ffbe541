// Library exports for the binary and the integration tests
//
// # Locking
//
// The engine itself is single-threaded: one `Session` owns the store, the host
// and the selection state. `SharedSession` wraps it in a `parking_lot::Mutex`
// for callers on several threads; every entry point holds the lock for the
// whole apply-and-record step.

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod applicator;
pub mod cli;
pub mod hooks;
pub mod selection;
pub mod session;
pub mod terminal_host;
pub mod traits;

pub use applicator::{ApplyError, Applicator};
pub use hooks::{HookId, HookRegistry};
pub use selection::{HISTORY_LIMIT, SelectionState};
pub use session::{Session, SharedSession};
pub use terminal_host::TerminalHost;
pub use traits::{BlinkToggle, CursorHost, FaceStyler, Host, Prompt, Scope};

// Data layer re-exports, so callers need only one dependency
pub use cursor_presets_config::{
    BlinkMode, Config, CursorColor, CursorShape, PresetDefinition, PresetError, PresetName,
    PresetStore, PropertySet, ResolvedAttributes, StateError, StateFile,
};
