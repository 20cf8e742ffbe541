//! Preset definitions, the preset store and the resolver.
//!
//! ## Sub-modules
//!
//! - [`preset`]: `PropertySet` and `PresetDefinition`, the sparse user-authored side
//! - [`store`]: `PresetStore`, ordered storage with lookup by name
//! - [`resolve`]: three-tier resolution into `ResolvedAttributes`
//! - [`storage`]: standalone preset files (load/save)

pub mod preset;
pub mod resolve;
pub mod storage;
pub mod store;

pub use preset::{PresetDefinition, PropertySet, RECOGNIZED_KEYS};
pub use resolve::ResolvedAttributes;
pub use storage::{load_presets_from, parse_presets, save_presets_to};
pub use store::PresetStore;
