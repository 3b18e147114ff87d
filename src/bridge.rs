//! Dialog bridge
//!
//! Glues the pieces together: parse the symbolic request type, resolve the
//! spec, run it through the platform host, map the raw result back to a
//! stable outcome, and remember the directory of successful file choices.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::Result;
use crate::host::DialogHost;
use crate::preferences::PreferenceStore;
use crate::request::{DialogKind, DialogOptions};
use crate::spec::{build_spec, DialogSpec};

/// Terminal outcome of a dialog invocation.
///
/// Cancellation is a valid outcome, not an error; only malformed requests
/// fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DialogOutcome {
    /// Stable id of the chosen message-box button
    Button { choice: String },
    /// Path chosen in the save picker
    File { path: PathBuf },
    /// Paths chosen in the open picker
    Files { paths: Vec<PathBuf> },
    /// Dialog dismissed without a choice
    Cancelled,
}

/// The dialog bridge: one host, one preference store, no global state.
pub struct DialogBridge<H, S> {
    host: H,
    prefs: S,
}

impl<H: DialogHost, S: PreferenceStore> DialogBridge<H, S> {
    pub fn new(host: H, prefs: S) -> Self {
        Self { host, prefs }
    }

    /// Resolve a request into its concrete spec without showing anything.
    ///
    /// Reads the preference store to seed open/save pickers; no side effects.
    pub fn build_spec(&self, request_type: &str, options: &DialogOptions) -> Result<DialogSpec> {
        let kind: DialogKind = request_type.parse()?;
        let default_dir = self.prefs.default_path();
        build_spec(kind, options, default_dir.as_deref())
    }

    /// Resolve, show, and interpret a dialog. Blocks until the user
    /// dismisses it.
    ///
    /// On a non-cancelled open/save, the directory of the chosen path is
    /// written through to the preference store before returning.
    pub fn invoke(&mut self, request_type: &str, options: &DialogOptions) -> Result<DialogOutcome> {
        let kind: DialogKind = request_type.parse()?;
        let id = Uuid::new_v4();
        info!(%id, %kind, "dialog requested");

        let default_dir = self.prefs.default_path();
        let spec = build_spec(kind, options, default_dir.as_deref())?;

        let outcome = match &spec {
            DialogSpec::MessageBox(msg) => {
                let raw = self.host.show_message_box(msg);
                let index = if raw < msg.buttons.len() {
                    raw
                } else {
                    warn!(%id, raw, "host returned out-of-range button index");
                    msg.cancel_index
                };
                DialogOutcome::Button {
                    choice: msg.buttons[index].id.clone(),
                }
            }
            DialogSpec::OpenFile(open) => match self.host.show_open_dialog(open) {
                Some(paths) if !paths.is_empty() => {
                    self.remember_directory(&paths[0]);
                    DialogOutcome::Files { paths }
                }
                _ => DialogOutcome::Cancelled,
            },
            DialogSpec::SaveFile(save) => match self.host.show_save_dialog(save) {
                Some(path) => {
                    self.remember_directory(&path);
                    DialogOutcome::File { path }
                }
                None => DialogOutcome::Cancelled,
            },
        };

        debug!(%id, %kind, ?outcome, "dialog resolved");
        Ok(outcome)
    }

    /// Access the injected preference store.
    pub fn preferences(&self) -> &S {
        &self.prefs
    }

    fn remember_directory(&mut self, chosen: &Path) {
        let Some(dir) = chosen.parent() else {
            return;
        };
        // A failed write-through must not fail the interaction itself
        if let Err(e) = self.prefs.set_default_path(dir) {
            warn!(dir = %dir.display(), "failed to persist default path: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DialogError;
    use crate::preferences::MemoryPreferences;
    use crate::spec::{MessageBoxSpec, OpenFileSpec, SaveFileSpec};

    /// Host that answers from a fixed script instead of showing anything.
    struct ScriptedHost {
        button_index: usize,
        open_result: Option<Vec<PathBuf>>,
        save_result: Option<PathBuf>,
    }

    impl ScriptedHost {
        fn buttons(index: usize) -> Self {
            Self {
                button_index: index,
                open_result: None,
                save_result: None,
            }
        }
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

    fn close_options() -> DialogOptions {
        DialogOptions::named("diagram.bpmn")
    }

    #[test]
    fn close_index_one_resolves_to_save() {
        let mut bridge = DialogBridge::new(ScriptedHost::buttons(1), MemoryPreferences::new());
        let outcome = bridge.invoke("close", &close_options()).unwrap();
        assert_eq!(
            outcome,
            DialogOutcome::Button {
                choice: "save".to_string()
            }
        );
    }

    #[test]
    fn close_index_zero_is_the_cancel_choice() {
        let mut bridge = DialogBridge::new(ScriptedHost::buttons(0), MemoryPreferences::new());
        let outcome = bridge.invoke("close", &close_options()).unwrap();
        assert_eq!(
            outcome,
            DialogOutcome::Button {
                choice: "cancel".to_string()
            }
        );
    }

    #[test]
    fn out_of_range_index_falls_back_to_cancel() {
        let mut bridge = DialogBridge::new(ScriptedHost::buttons(7), MemoryPreferences::new());
        let outcome = bridge.invoke("close", &close_options()).unwrap();
        assert_eq!(
            outcome,
            DialogOutcome::Button {
                choice: "cancel".to_string()
            }
        );
    }

    #[test]
    fn unknown_request_type_fails() {
        let mut bridge = DialogBridge::new(ScriptedHost::buttons(0), MemoryPreferences::new());
        let err = bridge.invoke("unknown-kind", &DialogOptions::default()).unwrap_err();
        assert!(matches!(err, DialogError::UnknownRequestType(_)));
    }

    #[test]
    fn successful_save_updates_default_path() {
        let host = ScriptedHost {
            button_index: 0,
            open_result: None,
            save_result: Some(PathBuf::from("/home/user/foo.bpmn")),
        };
        let mut bridge = DialogBridge::new(host, MemoryPreferences::new());

        let options = DialogOptions {
            name: Some("foo.bpmn".to_string()),
            file_type: Some("bpmn".to_string()),
            error_details: None,
        };
        let outcome = bridge.invoke("save", &options).unwrap();
        assert_eq!(
            outcome,
            DialogOutcome::File {
                path: PathBuf::from("/home/user/foo.bpmn")
            }
        );

        // The next open picker starts in the saved file's directory
        let spec = bridge.build_spec("open", &DialogOptions::default()).unwrap();
        match spec {
            DialogSpec::OpenFile(open) => {
                assert_eq!(open.default_directory, Some(PathBuf::from("/home/user")));
            }
            other => panic!("expected open spec, got {other:?}"),
        }
    }

    #[test]
    fn cancelled_open_leaves_default_path_alone() {
        let host = ScriptedHost {
            button_index: 0,
            open_result: None,
            save_result: None,
        };
        let mut bridge =
            DialogBridge::new(host, MemoryPreferences::with_default_path("/existing"));

        let outcome = bridge.invoke("open", &DialogOptions::default()).unwrap();
        assert_eq!(outcome, DialogOutcome::Cancelled);
        assert_eq!(
            bridge.preferences().default_path(),
            Some(PathBuf::from("/existing"))
        );
    }
}
