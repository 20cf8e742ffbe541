//! Post-apply notification hooks.

use crate::selection::SelectionState;

/// Handle returned by [`HookRegistry::register`], used to unregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HookId(u64);

type Hook = Box<dyn FnMut(&SelectionState) + Send>;

/// Ordered list of callbacks run after every successful global apply
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<(HookId, Hook)>,
    next_id: u64,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook; hooks run in registration order
    pub fn register(&mut self, hook: impl FnMut(&SelectionState) + Send + 'static) -> HookId {
        let id = HookId(self.next_id);
        self.next_id += 1;
        self.hooks.push((id, Box::new(hook)));
        id
    }

    /// Remove a hook. Returns false if `id` was not registered.
    pub fn unregister(&mut self, id: HookId) -> bool {
        let before = self.hooks.len();
        self.hooks.retain(|(hook_id, _)| *hook_id != id);
        self.hooks.len() != before
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub(crate) fn run(&mut self, state: &SelectionState) {
        for (_, hook) in &mut self.hooks {
            hook(state);
        }
    }
}

impl std::fmt::Debug for HookRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookRegistry")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_hooks_run_in_registration_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry = HookRegistry::new();
        for tag in ["first", "second", "third"] {
            let calls = Arc::clone(&calls);
            registry.register(move |_| calls.lock().push(tag));
        }

        registry.run(&SelectionState::new());
        assert_eq!(*calls.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unregister_removes_only_that_hook() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut registry = HookRegistry::new();
        let a = {
            let calls = Arc::clone(&calls);
            registry.register(move |_| calls.lock().push("a"))
        };
        {
            let calls = Arc::clone(&calls);
            registry.register(move |_| calls.lock().push("b"));
        }

        assert!(registry.unregister(a));
        assert!(!registry.unregister(a));
        registry.run(&SelectionState::new());
        assert_eq!(*calls.lock(), vec!["b"]);
        assert_eq!(registry.len(), 1);
    }
}
