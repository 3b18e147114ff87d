//! End-to-end bridge tests
//!
//! Drive the bridge with a scripted host and real (temp-file) preferences,
//! checking the documented button sets and the default-path read-after-write
//! contract.

use std::path::PathBuf;

use modeler_dialogs::{
    DialogBridge, DialogError, DialogHost, DialogOptions, DialogOutcome, DialogSpec,
    FilePreferences,
};
use modeler_dialogs::spec::{MessageBoxSpec, OpenFileSpec, SaveFileSpec};

/// Host that replays canned answers.
#[derive(Default)]
struct ScriptedHost {
    button_index: usize,
    open_result: Option<Vec<PathBuf>>,
    save_result: Option<PathBuf>,
}

impl DialogHost for ScriptedHost {
    fn show_message_box(&self, _spec: &MessageBoxSpec) -> usize {
        self.button_index
    }

    fn show_open_dialog(&self, _spec: &OpenFileSpec) -> Option<Vec<PathBuf>> {
        self.open_result.clone()
    }

    fn show_save_dialog(&self, _spec: &SaveFileSpec) -> Option<PathBuf> {
        self.save_result.clone()
    }
}

fn save_options() -> DialogOptions {
    serde_json::from_str(r#"{"name":"foo.bpmn","fileType":"bpmn"}"#).unwrap()
}

#[test]
fn save_then_open_reuses_the_chosen_directory() {
    let dir = tempfile::tempdir().unwrap();
    let prefs_path = dir.path().join("preferences.toml");

    let host = ScriptedHost {
        save_result: Some(PathBuf::from("/home/user/foo.bpmn")),
        ..ScriptedHost::default()
    };
    let mut bridge = DialogBridge::new(host, FilePreferences::open(prefs_path.clone()));

    let outcome = bridge.invoke("save", &save_options()).unwrap();
    assert_eq!(
        outcome,
        DialogOutcome::File {
            path: PathBuf::from("/home/user/foo.bpmn")
        }
    );

    // Same bridge: open picker starts where the save landed
    match bridge.build_spec("open", &DialogOptions::default()).unwrap() {
        DialogSpec::OpenFile(open) => {
            assert_eq!(open.default_directory, Some(PathBuf::from("/home/user")));
        }
        other => panic!("expected open spec, got {other:?}"),
    }

    // Fresh bridge over the same preferences file: still remembered
    let bridge = DialogBridge::new(ScriptedHost::default(), FilePreferences::open(prefs_path));
    match bridge.build_spec("save", &save_options()).unwrap() {
        DialogSpec::SaveFile(save) => {
            assert_eq!(save.default_path, PathBuf::from("/home/user/foo.bpmn"));
        }
        other => panic!("expected save spec, got {other:?}"),
    }
}

#[test]
fn multi_open_records_directory_of_first_selection() {
    let dir = tempfile::tempdir().unwrap();
    let prefs_path = dir.path().join("preferences.toml");

    let host = ScriptedHost {
        open_result: Some(vec![
            PathBuf::from("/projects/a.bpmn"),
            PathBuf::from("/projects/b.dmn"),
        ]),
        ..ScriptedHost::default()
    };
    let mut bridge = DialogBridge::new(host, FilePreferences::open(prefs_path));

    let outcome = bridge.invoke("open", &DialogOptions::default()).unwrap();
    assert_eq!(
        outcome,
        DialogOutcome::Files {
            paths: vec![
                PathBuf::from("/projects/a.bpmn"),
                PathBuf::from("/projects/b.dmn"),
            ]
        }
    );

    match bridge.build_spec("open", &DialogOptions::default()).unwrap() {
        DialogSpec::OpenFile(open) => {
            assert_eq!(open.default_directory, Some(PathBuf::from("/projects")));
        }
        other => panic!("expected open spec, got {other:?}"),
    }
}

#[test]
fn message_box_outcomes_use_stable_button_ids() {
    let dir = tempfile::tempdir().unwrap();

    // close: buttons are cancel / save / discard in that order
    for (index, expected) in [(0, "cancel"), (1, "save"), (2, "discard")] {
        let host = ScriptedHost {
            button_index: index,
            ..ScriptedHost::default()
        };
        let prefs = FilePreferences::open(dir.path().join("preferences.toml"));
        let mut bridge = DialogBridge::new(host, prefs);

        let outcome = bridge
            .invoke("close", &DialogOptions::named("diagram.bpmn"))
            .unwrap();
        assert_eq!(
            outcome,
            DialogOutcome::Button {
                choice: expected.to_string()
            },
            "index {index}"
        );
    }
}

#[test]
fn validation_happens_before_the_host_is_called() {
    /// Host that panics if anything reaches the screen.
    struct UnreachableHost;

    impl DialogHost for UnreachableHost {
        fn show_message_box(&self, _spec: &MessageBoxSpec) -> usize {
            panic!("message box shown for an invalid request");
        }
        fn show_open_dialog(&self, _spec: &OpenFileSpec) -> Option<Vec<PathBuf>> {
            panic!("open dialog shown for an invalid request");
        }
        fn show_save_dialog(&self, _spec: &SaveFileSpec) -> Option<PathBuf> {
            panic!("save dialog shown for an invalid request");
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let prefs = FilePreferences::open(dir.path().join("preferences.toml"));
    let mut bridge = DialogBridge::new(UnreachableHost, prefs);

    // Missing fileType
    let err = bridge
        .invoke("save", &DialogOptions::named("diagram.bpmn"))
        .unwrap_err();
    assert!(matches!(err, DialogError::MissingOption { field: "fileType", .. }));

    // Unknown type tag
    let err = bridge
        .invoke("unknown-kind", &DialogOptions::default())
        .unwrap_err();
    assert!(matches!(err, DialogError::UnknownRequestType(_)));
}
