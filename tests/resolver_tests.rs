mod common;

use std::time::Duration;

use common::store;
use cursor_presets::{
    BlinkMode, CursorColor, CursorShape, PresetDefinition, PresetError, PresetName, PropertySet,
};
use cursor_presets_config::defaults;

#[test]
fn test_own_values_then_fallback_without_inherit_or_wildcard() {
    let store = store(vec![PresetDefinition::new(
        "thin",
        PropertySet::new()
            .cursor_type(Some(CursorShape::Bar(Some(1))))
            .blink_count(3),
    )]);

    let resolved = store.resolve("thin").unwrap();
    let fallback = defaults::fallback_properties();

    assert_eq!(resolved.cursor_type, Some(CursorShape::Bar(Some(1))));
    assert_eq!(resolved.blink_count, 3);
    assert_eq!(
        Some(resolved.cursor_in_non_selected_windows),
        fallback.cursor_in_non_selected_windows
    );
    assert_eq!(Some(resolved.blink_mode), fallback.blink_mode);
    assert_eq!(Some(resolved.blink_interval), fallback.blink_interval);
    assert_eq!(Some(resolved.blink_delay), fallback.blink_delay);
    assert_eq!(resolved.cursor_color, None);
}

#[test]
fn test_resolution_is_idempotent() {
    let store = store(defaults::builtin_presets());
    for name in store.all_names() {
        assert_eq!(store.resolve(name).unwrap(), store.resolve(name).unwrap());
    }
}

#[test]
fn test_own_beats_inherited_beats_default() {
    let store = store(vec![
        PresetDefinition::new("A", PropertySet::new().blink_count(1)),
        PresetDefinition::new("B", PropertySet::new().inherit("A").blink_count(2)),
        PresetDefinition::wildcard(
            PropertySet::new()
                .blink_count(3)
                .blink_delay(Duration::from_secs(4)),
        ),
    ]);

    let resolved = store.resolve("B").unwrap();
    assert_eq!(resolved.blink_count, 2);
    assert_eq!(resolved.blink_delay, Duration::from_secs(4));
}

#[test]
fn test_inherited_value_fills_gap_before_default() {
    let store = store(vec![
        PresetDefinition::new("A", PropertySet::new().blink_count(1)),
        PresetDefinition::new("B", PropertySet::new().inherit("A")),
        PresetDefinition::wildcard(PropertySet::new().blink_count(3)),
    ]);
    assert_eq!(store.resolve("B").unwrap().blink_count, 1);
}

#[test]
fn test_explicit_nil_is_preserved_over_default() {
    let store = store(vec![
        PresetDefinition::new("C", PropertySet::new().cursor_in_non_selected_windows(None)),
        PresetDefinition::wildcard(
            PropertySet::new().cursor_in_non_selected_windows(Some(CursorShape::Hollow)),
        ),
    ]);

    let resolved = store.resolve("C").unwrap();
    assert_eq!(resolved.cursor_in_non_selected_windows, None);
    assert_eq!(resolved.cursor_type, Some(CursorShape::Box));
}

#[test]
fn test_explicit_nil_parsed_from_yaml() {
    let definitions = cursor_presets_config::parse_presets(
        r#"
- name: C
  cursor-type: null
- name: D
  blink-count: 4
- name: "*"
  cursor-type: hbar
"#,
    )
    .unwrap();
    let store = store(definitions);

    assert_eq!(store.resolve("C").unwrap().cursor_type, None);
    assert_eq!(store.resolve("D").unwrap().cursor_type, Some(CursorShape::Hbar(None)));
}

#[test]
fn test_second_level_inherit_is_not_followed() {
    let store = store(vec![
        PresetDefinition::new("root", PropertySet::new().blink_count(7)),
        PresetDefinition::new("middle", PropertySet::new().inherit("root")),
        PresetDefinition::new("leaf", PropertySet::new().inherit("middle")),
    ]);

    assert_eq!(store.resolve("middle").unwrap().blink_count, 7);
    assert_eq!(store.resolve("leaf").unwrap().blink_count, 10);
}

#[test]
fn test_unknown_name_fails() {
    let store = store(defaults::builtin_presets());
    assert_eq!(
        store.resolve("nonexistent"),
        Err(PresetError::UnknownPreset(PresetName::new("nonexistent")))
    );
    assert!(store.resolve("*").is_err());
}

#[test]
fn test_fallback_resolves_in_an_empty_store() {
    let store = store(vec![]);
    let resolved = store.resolve("fallback").unwrap();
    assert_eq!(resolved.cursor_type, Some(CursorShape::Box));
    assert_eq!(resolved.cursor_in_non_selected_windows, Some(CursorShape::Hollow));
    assert_eq!(resolved.blink_mode, BlinkMode::Enable);
    assert_eq!(resolved.blink_interval, Duration::from_millis(500));
    assert_eq!(store.candidates(), Err(PresetError::EmptyStore));
}

#[test]
fn test_unspecified_color_blocks_lower_tiers() {
    let store = store(vec![
        PresetDefinition::new("keep", PropertySet::new().cursor_color(CursorColor::Unspecified)),
        PresetDefinition::wildcard(
            PropertySet::new().cursor_color(CursorColor::Color("#ff0000".into())),
        ),
    ]);
    assert_eq!(
        store.resolve("keep").unwrap().cursor_color,
        Some(CursorColor::Unspecified)
    );
}

#[test]
fn test_builtin_underscore_thin_other_window() {
    let store = store(defaults::builtin_presets());
    let resolved = store.resolve("underscore-thin-other-window").unwrap();
    assert_eq!(resolved.cursor_type, Some(CursorShape::Hbar(Some(3))));
    assert_eq!(resolved.cursor_in_non_selected_windows, Some(CursorShape::Hbar(Some(1))));
    assert_eq!(resolved.blink_count, 50);
    // interval comes from the wildcard, not the fallback
    assert_eq!(resolved.blink_interval, Duration::from_millis(200));
}
