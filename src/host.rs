//! Platform dialog host
//!
//! [`DialogHost`] is the seam between the bridge and the OS: a message box
//! that yields a button index, and blocking open/save pickers that yield
//! paths. [`NativeHost`] implements it with rfd; tests drive the bridge with
//! scripted hosts instead.

use std::path::PathBuf;

use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::warn;

use crate::spec::{MessageBoxSpec, MessageKind, OpenFileSpec, SaveFileSpec};

/// Platform dialog primitives. Every call blocks until the user dismisses
/// the dialog; `None` means cancellation, which is not an error.
pub trait DialogHost {
    /// Show a message box; returns the index of the chosen button.
    /// Dismissing the window counts as choosing `spec.cancel_index`.
    fn show_message_box(&self, spec: &MessageBoxSpec) -> usize;

    /// Show a multi-select open picker; `None` when cancelled.
    fn show_open_dialog(&self, spec: &OpenFileSpec) -> Option<Vec<PathBuf>>;

    /// Show a save picker; `None` when cancelled.
    fn show_save_dialog(&self, spec: &SaveFileSpec) -> Option<PathBuf>;
}

/// Native dialogs via rfd.
///
/// rfd message boxes carry at most three custom buttons; every message-box
/// kind the bridge produces fits. `no_link` has no rfd counterpart and is
/// ignored here (it only matters to hosts with link-style buttons).
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeHost;

impl NativeHost {
    pub fn new() -> Self {
        Self
    }
}

impl DialogHost for NativeHost {
    fn show_message_box(&self, spec: &MessageBoxSpec) -> usize {
        let level = match spec.kind {
            MessageKind::Question => MessageLevel::Info,
            MessageKind::Warning => MessageLevel::Warning,
            MessageKind::Error => MessageLevel::Error,
            MessageKind::None => MessageLevel::Info,
        };

        let labels: Vec<&str> = spec.buttons.iter().map(|b| b.label.as_str()).collect();
        let buttons = match labels.as_slice() {
            [a] => MessageButtons::OkCustom(a.to_string()),
            [a, b] => MessageButtons::OkCancelCustom(a.to_string(), b.to_string()),
            [a, b, c] => {
                MessageButtons::YesNoCancelCustom(a.to_string(), b.to_string(), c.to_string())
            }
            _ => {
                warn!(
                    buttons = labels.len(),
                    "message box exceeds native button capacity, truncating to three"
                );
                MessageButtons::YesNoCancelCustom(
                    labels[0].to_string(),
                    labels[1].to_string(),
                    labels[2].to_string(),
                )
            }
        };

        let mut body = spec.message.clone();
        if let Some(detail) = &spec.detail {
            body.push_str("\n\n");
            body.push_str(detail);
        }

        let result = MessageDialog::new()
            .set_title(spec.title.as_str())
            .set_description(body.as_str())
            .set_level(level)
            .set_buttons(buttons)
            .show();

        match result {
            MessageDialogResult::Custom(label) => spec
                .buttons
                .iter()
                .position(|b| b.label == label)
                .unwrap_or(spec.cancel_index),
            // Window dismissed or non-custom result: treat as cancel
            _ => spec.cancel_index,
        }
    }

    fn show_open_dialog(&self, spec: &OpenFileSpec) -> Option<Vec<PathBuf>> {
        let mut dialog = FileDialog::new();

        if let Some(dir) = &spec.default_directory {
            dialog = dialog.set_directory(dir);
        }

        for filter in &spec.filters {
            let exts: Vec<&str> = filter.extensions.iter().map(|s| s.as_str()).collect();
            dialog = dialog.add_filter(&filter.name, &exts);
        }

        if spec.multiple {
            dialog.pick_files()
        } else {
            dialog.pick_file().map(|p| vec![p])
        }
    }

    fn show_save_dialog(&self, spec: &SaveFileSpec) -> Option<PathBuf> {
        let mut dialog = FileDialog::new();

        if let Some(dir) = spec.default_path.parent() {
            dialog = dialog.set_directory(dir);
        }
        if let Some(name) = spec.default_path.file_name() {
            dialog = dialog.set_file_name(name.to_string_lossy());
        }

        for filter in &spec.filters {
            let exts: Vec<&str> = filter.extensions.iter().map(|s| s.as_str()).collect();
            dialog = dialog.add_filter(&filter.name, &exts);
        }

        dialog.save_file()
    }
}
