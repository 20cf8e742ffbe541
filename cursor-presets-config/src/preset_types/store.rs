//! Preset collection storage and lookup.
//!
//! `PresetStore` keeps the user's named definitions in their original order,
//! the optional wildcard default, and the built-in fallback preset, which is
//! always reachable by name even when the user supplied nothing.

use std::collections::HashMap;

use crate::defaults;
use crate::error::PresetError;
use crate::types::PresetName;

use super::preset::{PresetDefinition, PropertySet};

/// Holds preset definitions and answers lookups by name
#[derive(Debug, Clone)]
pub struct PresetStore {
    /// Named definitions indexed by name
    presets: HashMap<PresetName, PropertySet>,

    /// Names in the order they were supplied
    order: Vec<PresetName>,

    /// The wildcard default definition, if the collection has one
    wildcard: Option<PropertySet>,

    /// Built-in fallback, consulted when the user has not redefined it
    fallback: PropertySet,
}

impl Default for PresetStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetStore {
    /// Create a store holding only the built-in fallback
    pub fn new() -> Self {
        Self {
            presets: HashMap::new(),
            order: Vec::new(),
            wildcard: None,
            fallback: defaults::fallback_properties(),
        }
    }

    /// Build a store from an ordered collection.
    ///
    /// Fails with `DuplicatePreset` if a name (the wildcard included) occurs
    /// twice.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = PresetDefinition>,
    ) -> Result<Self, PresetError> {
        let mut store = Self::new();
        for definition in definitions {
            store.insert(definition)?;
        }
        log::debug!(
            "Preset store built with {} named presets (wildcard: {})",
            store.order.len(),
            store.wildcard.is_some()
        );
        Ok(store)
    }

    /// Add one definition, rejecting duplicates
    pub fn insert(&mut self, definition: PresetDefinition) -> Result<(), PresetError> {
        let PresetDefinition { name, properties } = definition;

        if name.is_wildcard() {
            if self.wildcard.is_some() {
                return Err(PresetError::DuplicatePreset(name));
            }
            self.wildcard = Some(properties);
            return Ok(());
        }

        if self.presets.contains_key(&name) {
            return Err(PresetError::DuplicatePreset(name));
        }
        if name.is_fallback() {
            log::info!("User preset '{}' replaces the built-in fallback", name);
        }
        self.order.push(name.clone());
        self.presets.insert(name, properties);
        Ok(())
    }

    /// Look up a named preset.
    ///
    /// The fallback name always resolves, to the user's definition when there
    /// is one and to the built-in otherwise. The wildcard is not a named preset
    /// and is only reachable through [`PresetStore::wildcard`].
    pub fn lookup(&self, name: &str) -> Option<&PropertySet> {
        if let Some(properties) = self.presets.get(name) {
            return Some(properties);
        }
        (name == crate::types::FALLBACK_NAME).then_some(&self.fallback)
    }

    /// True if `name` can be looked up
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// True if the user supplied a definition called `name`
    pub fn contains_user_preset(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    /// User-defined names in their original order.
    ///
    /// Excludes the wildcard default and the built-in fallback; a user preset
    /// named `fallback` is listed like any other.
    pub fn all_names(&self) -> &[PresetName] {
        &self.order
    }

    /// Like [`PresetStore::all_names`] but fails with `EmptyStore` when there
    /// is nothing to choose from
    pub fn candidates(&self) -> Result<&[PresetName], PresetError> {
        if self.order.is_empty() {
            return Err(PresetError::EmptyStore);
        }
        Ok(&self.order)
    }

    /// The wildcard default definition
    pub fn wildcard(&self) -> Option<&PropertySet> {
        self.wildcard.as_ref()
    }

    /// The built-in fallback values, regardless of any user redefinition
    pub fn builtin_fallback(&self) -> &PropertySet {
        &self.fallback
    }

    /// Number of user-defined named presets
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Definitions in order, wildcard last (for serialization)
    pub fn to_vec(&self) -> Vec<PresetDefinition> {
        let mut out: Vec<PresetDefinition> = self
            .order
            .iter()
            .filter_map(|name| {
                self.presets
                    .get(name)
                    .map(|props| PresetDefinition::new(name.clone(), props.clone()))
            })
            .collect();
        if let Some(wildcard) = &self.wildcard {
            out.push(PresetDefinition::wildcard(wildcard.clone()));
        }
        out
    }
}
