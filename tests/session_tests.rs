mod common;

use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use common::{HostCall, ScriptedPrompt, session};
use cursor_presets::{
    ApplyError, BlinkMode, CursorColor, CursorShape, PresetDefinition, PresetError, PresetName,
    PropertySet, Scope, SharedSession,
};
use cursor_presets_config::defaults;
use parking_lot::Mutex;

fn write_state(session: &cursor_presets::Session<common::RecordingHost>, name: &str) {
    session.state_file().write(&PresetName::new(name)).unwrap();
}

#[test]
fn test_global_apply_pushes_everything_in_order() {
    let (mut session, _temp) = session(vec![PresetDefinition::new(
        "red-bar",
        PropertySet::new()
            .cursor_type(Some(CursorShape::Bar(Some(2))))
            .cursor_color(CursorColor::Color("#ff0000".into()))
            .blink_mode(BlinkMode::Disable),
    )]);

    session.set_preset("red-bar").unwrap();

    let calls = &session.host().calls;
    assert_eq!(calls[0], HostCall::ClearLocal);
    assert_eq!(
        calls[1],
        HostCall::CursorType(Scope::Global, Some(CursorShape::Bar(Some(2))))
    );
    let interval = HostCall::BlinkInterval(Scope::Global, Duration::from_millis(500));
    assert!(calls.contains(&interval));
    assert_eq!(
        calls[calls.len() - 2],
        HostCall::FaceForeground("cursor".into(), "#ff0000".into())
    );
    assert_eq!(calls[calls.len() - 1], HostCall::BlinkMode(BlinkMode::Disable));
}

#[test]
fn test_unknown_name_fails_without_mutating_state() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    session.set_preset("box").unwrap();
    session.host_mut().clear();

    let err = session.set_preset("nonexistent").unwrap_err();
    assert!(matches!(
        err,
        ApplyError::UnresolvedPreset(PresetError::UnknownPreset(_))
    ));
    assert_eq!(
        session.selection().last_selected(),
        Some(&PresetName::new("box"))
    );
    assert_eq!(session.selection().history().len(), 1);
    assert!(session.host().calls.is_empty());
    assert_eq!(session.restore_latest().unwrap(), Some(PresetName::new("box")));
}

#[test]
fn test_scoped_apply_leaves_selection_alone_but_sets_color_and_blink() {
    let (mut session, _temp) = session(vec![PresetDefinition::new(
        "local",
        PropertySet::new()
            .cursor_type(Some(CursorShape::Hbar(None)))
            .cursor_color(CursorColor::Face("warning".into()))
            .blink_mode(BlinkMode::Disable),
    )]);
    *session.host_mut() = common::RecordingHost::new().with_face("warning", "#ffff00");

    session.set_scoped_preset("local").unwrap();

    let host = session.host();
    assert!(!host.calls.contains(&HostCall::ClearLocal));
    assert_eq!(host.cursor_type(Scope::Local), Some(Some(CursorShape::Hbar(None))));
    assert_eq!(host.cursor_type(Scope::Global), None);
    assert_eq!(host.cursor_color(), Some("#ffff00"));
    assert_eq!(host.blink_mode(), Some(BlinkMode::Disable));
    assert!(session.selection().last_selected().is_none());
    assert!(!session.state_file().path().exists());
}

#[test]
fn test_scoped_unknown_name_fails() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    assert!(matches!(
        session.set_scoped_preset("nope"),
        Err(ApplyError::UnresolvedPreset(_))
    ));
}

#[test]
fn test_hooks_run_after_global_apply_only() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    let seen = Arc::new(Mutex::new(Vec::new()));

    for tag in ["first", "second"] {
        let seen = Arc::clone(&seen);
        session.register_hook(move |state| {
            let name = state.last_selected().map(|n| n.to_string()).unwrap_or_default();
            seen.lock().push(format!("{tag}:{name}"));
        });
    }

    session.set_preset("bar").unwrap();
    session.set_scoped_preset("box").unwrap();
    let _ = session.set_preset("missing");

    assert_eq!(*seen.lock(), vec!["first:bar", "second:bar"]);
}

#[test]
fn test_unregistered_hook_is_not_called() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    let count = Arc::new(Mutex::new(0));
    let id = {
        let count = Arc::clone(&count);
        session.register_hook(move |_| *count.lock() += 1)
    };

    session.set_preset("box").unwrap();
    assert!(session.unregister_hook(id));
    session.set_preset("bar").unwrap();
    assert_eq!(*count.lock(), 1);
}

#[test]
fn test_startup_applies_recorded_preset() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    write_state(&session, "underscore");

    let resolved = session.set_last_or_fallback().unwrap();
    assert_eq!(resolved.name, "underscore");
    assert_eq!(
        session.selection().last_selected(),
        Some(&PresetName::new("underscore"))
    );
}

#[test]
fn test_startup_with_stale_name_falls_back_to_box() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    write_state(&session, "deleted-preset");

    let resolved = session.set_last_or_fallback().unwrap();
    assert_eq!(resolved.name, "box");
}

#[test]
fn test_startup_with_stale_name_and_no_box_uses_fallback() {
    let (mut session, _temp) = session(vec![PresetDefinition::new(
        "bar",
        PropertySet::new().cursor_type(Some(CursorShape::Bar(None))),
    )]);
    write_state(&session, "deleted-preset");

    let resolved = session.set_last_or_fallback().unwrap();
    assert_eq!(resolved.name, "fallback");
    assert_eq!(resolved.cursor_type, Some(CursorShape::Box));
}

#[test]
fn test_startup_on_fresh_install_with_empty_store() {
    let (mut session, _temp) = session(vec![]);
    let resolved = session.set_last_or_fallback().unwrap();
    assert_eq!(resolved.name, "fallback");
    assert_eq!(
        session.restore_latest().unwrap(),
        Some(PresetName::fallback())
    );
}

#[test]
fn test_startup_recovers_from_corrupt_state_file() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    fs::write(session.state_file().path(), "[[[ not yaml").unwrap();

    let resolved = session.set_last_or_fallback().unwrap();
    assert_eq!(resolved.name, "box");
    // the corrupt record is replaced by the applied one
    assert_eq!(session.restore_latest().unwrap(), Some(PresetName::new("box")));
}

#[test]
fn test_prompt_offers_names_and_previous_selection() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    session.set_preset("box").unwrap();
    session.set_preset("bar").unwrap();

    let mut prompt = ScriptedPrompt::answering("underscore");
    session.prompt_preset(&mut prompt).unwrap();

    assert_eq!(prompt.offered, session.store().all_names().to_vec());
    assert!(!prompt.offered.iter().any(|n| n.is_wildcard()));
    assert_eq!(prompt.offered_default, Some(PresetName::new("box")));
    assert_eq!(
        session.selection().last_selected(),
        Some(&PresetName::new("underscore"))
    );
}

#[test]
fn test_fresh_session_offers_recorded_preset_as_default() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    write_state(&session, "bar");

    let mut prompt = ScriptedPrompt::answering("box");
    session.prompt_preset(&mut prompt).unwrap();
    assert_eq!(prompt.offered_default, Some(PresetName::new("bar")));

    // once something is selected the history takes over
    let mut prompt = ScriptedPrompt::answering("box");
    session.prompt_preset(&mut prompt).unwrap();
    assert_eq!(prompt.offered_default, Some(PresetName::new("box")));
}

#[test]
fn test_recorded_preset_missing_from_store_is_not_offered() {
    let (session, _temp) = session(defaults::builtin_presets());
    write_state(&session, "gone");
    assert_eq!(session.prompt_default(), None);
}

#[test]
fn test_blink_values_are_pushed_as_resolved() {
    let (mut session, _temp) = session(vec![PresetDefinition::new(
        "slow",
        PropertySet::new()
            .blink_count(7)
            .blink_delay(Duration::from_secs(2)),
    )]);

    session.set_scoped_preset("slow").unwrap();

    let calls = &session.host().calls;
    assert!(calls.contains(&HostCall::BlinkCount(Scope::Local, 7)));
    assert!(calls.contains(&HostCall::BlinkDelay(Scope::Local, Duration::from_secs(2))));
}

#[test]
fn test_cancelled_prompt_changes_nothing() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    session.set_preset("box").unwrap();
    session.host_mut().clear();

    let err = session
        .prompt_preset(&mut ScriptedPrompt::cancelling())
        .unwrap_err();
    assert!(matches!(err, ApplyError::Cancelled));
    assert!(session.host().calls.is_empty());
    assert_eq!(session.selection().history(), &[PresetName::new("box")]);
}

#[test]
fn test_prompt_on_empty_store_fails() {
    let (mut session, _temp) = session(vec![PresetDefinition::wildcard(
        PropertySet::new().blink_count(1),
    )]);
    let mut prompt = ScriptedPrompt::answering("anything");
    assert!(matches!(
        session.prompt_preset(&mut prompt),
        Err(ApplyError::EmptyStore)
    ));
    assert!(prompt.offered.is_empty());
}

#[test]
fn test_scoped_prompt_does_not_record() {
    let (mut session, _temp) = session(defaults::builtin_presets());
    session
        .prompt_scoped_preset(&mut ScriptedPrompt::answering("bar"))
        .unwrap();
    assert!(session.selection().last_selected().is_none());
}

#[test]
fn test_shared_session_serializes_apply_and_store() {
    let (session, _temp) = session(defaults::builtin_presets());
    let shared = SharedSession::new(session);
    let names: Vec<PresetName> = shared.with(|s| s.store().all_names().to_vec());

    let handles: Vec<_> = names
        .iter()
        .cloned()
        .map(|name| {
            let shared = shared.clone();
            thread::spawn(move || shared.set_preset(&name).map(|_| ()))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    // whichever apply ran last, the state file agrees with the selection
    let last = shared.last_selected().unwrap();
    assert_eq!(shared.restore_latest().unwrap(), Some(last));
    assert_eq!(shared.with(|s| s.selection().history().len()), names.len());
}
