//! Loading and saving standalone preset files.
//!
//! A preset file is a YAML list of definitions. Unrecognized property keys are
//! reported and dropped; value shapes are otherwise trusted.

use std::path::Path;

use anyhow::{Context, Result};
use serde_yaml_ng::Value;

use super::preset::{PresetDefinition, RECOGNIZED_KEYS};

/// Parse a list of definitions from YAML text, warning about unknown keys
pub fn parse_presets(contents: &str) -> Result<Vec<PresetDefinition>> {
    let raw: Value = serde_yaml_ng::from_str(contents).context("Failed to parse preset YAML")?;
    let Value::Sequence(entries) = raw else {
        anyhow::bail!("Preset collection must be a YAML list");
    };
    definitions_from_values(entries)
}

/// Log every key of every entry that is not a recognized property
pub(crate) fn warn_unrecognized_keys(entries: &[Value]) {
    for (index, entry) in entries.iter().enumerate() {
        let Value::Mapping(map) = entry else {
            continue;
        };
        for key in map.keys() {
            let key = key.as_str().unwrap_or_default();
            if key != "name" && !RECOGNIZED_KEYS.contains(&key) {
                log::warn!("Ignoring unrecognized key '{}' in preset #{}", key, index);
            }
        }
    }
}

/// Convert raw YAML entries into definitions, warning about unknown keys
fn definitions_from_values(entries: Vec<Value>) -> Result<Vec<PresetDefinition>> {
    warn_unrecognized_keys(&entries);
    let mut definitions = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let definition: PresetDefinition = serde_yaml_ng::from_value(entry)
            .with_context(|| format!("Invalid preset definition #{}", index))?;
        definitions.push(definition);
    }
    Ok(definitions)
}

/// Load definitions from a file.
///
/// A missing or empty file yields an empty collection; a file that cannot be
/// parsed is an error.
pub fn load_presets_from(path: &Path) -> Result<Vec<PresetDefinition>> {
    log::info!("Loading presets from {:?}", path);
    if !path.exists() {
        log::info!("No presets file found at {:?}, starting with no presets", path);
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read presets from {:?}", path))?;

    if contents.trim().is_empty() {
        log::info!("Presets file {:?} is empty", path);
        return Ok(Vec::new());
    }

    let definitions = parse_presets(&contents)
        .with_context(|| format!("Failed to parse presets from {:?}", path))?;
    log::info!("Parsed {} presets from {:?}", definitions.len(), path);
    Ok(definitions)
}

/// Save definitions to a file, creating parent directories as needed
pub fn save_presets_to(definitions: &[PresetDefinition], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {:?}", parent))?;
    }

    let contents = serde_yaml_ng::to_string(definitions).context("Failed to serialize presets")?;

    let temp_path = path.with_extension("yaml.tmp");
    std::fs::write(&temp_path, contents)
        .with_context(|| format!("Failed to write presets to {:?}", temp_path))?;
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to move presets into place at {:?}", path))?;

    log::info!("Saved {} presets to {:?}", definitions.len(), path);
    Ok(())
}
