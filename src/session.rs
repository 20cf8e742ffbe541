//! Session entry points tying the store, the host and the state file together.
//!
//! A [`Session`] is the single logical actor: it owns the preset store, the
//! live host, the applicator with its selection state, and the state file.
//! [`SharedSession`] serializes access for callers on several threads.

use std::sync::Arc;

use cursor_presets_config::{
    BOX_NAME, Config, ConfigError, PresetName, PresetStore, ResolvedAttributes, StateError,
    StateFile,
};
use parking_lot::Mutex;

use crate::applicator::{ApplyError, Applicator};
use crate::hooks::HookId;
use crate::selection::SelectionState;
use crate::traits::{Host, Prompt};

const PROMPT_MESSAGE: &str = "Cursor preset";
const SCOPED_PROMPT_MESSAGE: &str = "Cursor preset (this context)";

pub struct Session<H> {
    store: PresetStore,
    host: H,
    applicator: Applicator,
    state_file: StateFile,
    /// Record every global apply in the state file
    persist: bool,
}

impl<H: Host> Session<H> {
    pub fn new(store: PresetStore, host: H, state_file: StateFile) -> Self {
        Self {
            store,
            host,
            applicator: Applicator::new(),
            state_file,
            persist: true,
        }
    }

    /// Build a session from a loaded config
    pub fn from_config(config: &Config, host: H) -> Result<Self, ConfigError> {
        let store = config.preset_store()?;
        Ok(Self::new(store, host, config.state_file()).with_persist(config.persist_state))
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn store(&self) -> &PresetStore {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn selection(&self) -> &SelectionState {
        self.applicator.selection()
    }

    pub fn state_file(&self) -> &StateFile {
        &self.state_file
    }

    pub fn persist(&self) -> bool {
        self.persist
    }

    pub fn register_hook(&mut self, hook: impl FnMut(&SelectionState) + Send + 'static) -> HookId {
        self.applicator.register_hook(hook)
    }

    pub fn unregister_hook(&mut self, id: HookId) -> bool {
        self.applicator.unregister_hook(id)
    }

    /// Apply `name` globally and, when persisting, record it.
    ///
    /// A failed state write is returned as `ApplyError::State`; the preset
    /// stays applied and selected.
    pub fn set_preset(&mut self, name: &str) -> Result<ResolvedAttributes, ApplyError> {
        let resolved = self.applicator.apply_global(&self.store, &mut self.host, name)?;
        if self.persist {
            self.store_latest()?;
        }
        Ok(resolved)
    }

    /// Ask for a name, then [`Session::set_preset`] it
    pub fn prompt_preset<P: Prompt + ?Sized>(
        &mut self,
        prompt: &mut P,
    ) -> Result<ResolvedAttributes, ApplyError> {
        let name = self.choose(prompt, PROMPT_MESSAGE)?;
        self.set_preset(&name)
    }

    /// Apply `name` to the current context only.
    ///
    /// Color and blink mode still change globally.
    pub fn set_scoped_preset(&mut self, name: &str) -> Result<ResolvedAttributes, ApplyError> {
        self.applicator.apply_scoped(&self.store, &mut self.host, name)
    }

    /// Ask for a name, then [`Session::set_scoped_preset`] it
    pub fn prompt_scoped_preset<P: Prompt + ?Sized>(
        &mut self,
        prompt: &mut P,
    ) -> Result<ResolvedAttributes, ApplyError> {
        let name = self.choose(prompt, SCOPED_PROMPT_MESSAGE)?;
        self.set_scoped_preset(&name)
    }

    fn choose<P: Prompt + ?Sized>(
        &self,
        prompt: &mut P,
        message: &str,
    ) -> Result<PresetName, ApplyError> {
        let candidates = self.store.candidates()?;
        let default = self.prompt_default();
        prompt
            .choose(message, candidates, default.as_ref())
            .ok_or(ApplyError::Cancelled)
    }

    /// Default answer offered by the prompts.
    ///
    /// The previous selection of this session, or the name recorded in the
    /// state file when nothing has been selected yet and it still exists.
    pub fn prompt_default(&self) -> Option<PresetName> {
        if let Some(name) = self.selection().prompt_default() {
            return Some(name.clone());
        }
        match self.restore_latest() {
            Ok(Some(name)) if self.store.all_names().contains(&name) => Some(name),
            Ok(_) => None,
            Err(e) => {
                log::warn!("Ignoring unreadable state file: {}", e);
                None
            }
        }
    }

    /// Startup entry point.
    ///
    /// Applies the recorded preset if it still exists, else `box` if the store
    /// has it, else the built-in fallback. An unreadable or corrupt state file
    /// is logged and treated as "nothing recorded".
    pub fn set_last_or_fallback(&mut self) -> Result<ResolvedAttributes, ApplyError> {
        let recorded = match self.restore_latest() {
            Ok(recorded) => recorded,
            Err(e) => {
                log::warn!("Ignoring unreadable state file: {}", e);
                None
            }
        };

        let name = match recorded {
            Some(name) if self.store.contains(&name) => name,
            other => {
                if let Some(name) = other {
                    log::info!("Recorded preset '{}' no longer exists", name);
                }
                if self.store.contains_user_preset(BOX_NAME) {
                    PresetName::new(BOX_NAME)
                } else {
                    PresetName::fallback()
                }
            }
        };

        self.set_preset(&name)
    }

    /// Write the last selection to the state file.
    ///
    /// Returns `Ok(false)` without touching the file when nothing has been
    /// selected yet.
    pub fn store_latest(&self) -> Result<bool, StateError> {
        let Some(name) = self.selection().last_selected() else {
            return Ok(false);
        };
        self.state_file.write(name)?;
        Ok(true)
    }

    /// Read the recorded name without applying it
    pub fn restore_latest(&self) -> Result<Option<PresetName>, StateError> {
        self.state_file.read()
    }

    /// Record the last selection once more before exit, when persisting
    pub fn shutdown(&self) -> Result<(), StateError> {
        if self.persist {
            self.store_latest()?;
        }
        Ok(())
    }
}

impl<H> std::fmt::Debug for Session<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("presets", &self.store.len())
            .field("state_file", &self.state_file.path())
            .field("persist", &self.persist)
            .finish_non_exhaustive()
    }
}

/// A [`Session`] shared between callers.
///
/// Each call holds the lock for its whole duration, so a global apply and
/// the state write that follows it are never interleaved with another
/// caller's.
pub struct SharedSession<H> {
    inner: Arc<Mutex<Session<H>>>,
}

impl<H> Clone for SharedSession<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: Host> SharedSession<H> {
    pub fn new(session: Session<H>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    /// Run `f` with exclusive access to the session
    pub fn with<R>(&self, f: impl FnOnce(&mut Session<H>) -> R) -> R {
        let mut session = self.inner.lock();
        f(&mut session)
    }

    pub fn set_preset(&self, name: &str) -> Result<ResolvedAttributes, ApplyError> {
        self.inner.lock().set_preset(name)
    }

    pub fn set_scoped_preset(&self, name: &str) -> Result<ResolvedAttributes, ApplyError> {
        self.inner.lock().set_scoped_preset(name)
    }

    pub fn set_last_or_fallback(&self) -> Result<ResolvedAttributes, ApplyError> {
        self.inner.lock().set_last_or_fallback()
    }

    pub fn store_latest(&self) -> Result<bool, StateError> {
        self.inner.lock().store_latest()
    }

    pub fn restore_latest(&self) -> Result<Option<PresetName>, StateError> {
        self.inner.lock().restore_latest()
    }

    pub fn last_selected(&self) -> Option<PresetName> {
        self.inner.lock().selection().last_selected().cloned()
    }
}
