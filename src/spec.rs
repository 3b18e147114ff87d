//! Resolved dialog specifications
//!
//! Each symbolic [`DialogKind`] maps to a fixed, presentation-ready
//! [`DialogSpec`]: either a message box with an ordered button set or a file
//! picker with filters and a starting directory. Resolution is pure; the
//! host call happens later in the bridge.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::request::{DialogKind, DialogOptions};

/// Extensions the modeler knows how to import, used for the open picker.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["bpmn", "dmn", "cmmn", "xml"];

/// Severity/appearance of a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Question,
    Warning,
    Error,
    None,
}

/// A selectable message-box button: stable id plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogButton {
    /// Internal value (returned in the outcome)
    pub id: String,
    /// Display label
    pub label: String,
}

impl DialogButton {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }
}

/// File filter for file picker dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    /// Filter name (e.g. "BPMN diagram")
    pub name: String,
    /// Extensions without dots (e.g. ["bpmn"])
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: &str, extensions: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.iter().map(|e| e.to_string()).collect(),
        }
    }

    /// The "all files" fallback every picker carries last.
    pub fn all_files() -> Self {
        Self::new("All Files", &["*"])
    }
}

/// Resolved message-box description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageBoxSpec {
    pub title: String,
    pub message: String,
    /// Secondary body text below the message, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    pub kind: MessageKind,
    /// Ordered button set; never empty
    pub buttons: Vec<DialogButton>,
    /// Index of the primary (default) button
    pub default_index: usize,
    /// Index the host reports when the window is dismissed
    pub cancel_index: usize,
    /// Windows: suppress command-link style buttons
    pub no_link: bool,
}

impl MessageBoxSpec {
    fn new(title: &str, message: String, kind: MessageKind, buttons: Vec<DialogButton>) -> Self {
        debug_assert!(!buttons.is_empty());
        let cancel_index = buttons.iter().position(|b| b.id == "cancel").unwrap_or(0);
        // Primary action is the last non-cancel button
        let default_index = buttons
            .iter()
            .rposition(|b| b.id != "cancel")
            .unwrap_or(buttons.len() - 1);
        Self {
            title: title.to_string(),
            message,
            detail: None,
            kind,
            default_index,
            cancel_index,
            no_link: cfg!(windows),
            buttons,
        }
    }

    fn with_detail(mut self, detail: String) -> Self {
        self.detail = Some(detail);
        self
    }

    /// Stable ids of the buttons, in presentation order.
    pub fn button_ids(&self) -> Vec<&str> {
        self.buttons.iter().map(|b| b.id.as_str()).collect()
    }
}

/// Resolved open-file picker description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenFileSpec {
    /// Starting directory (last used, if known)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_directory: Option<PathBuf>,
    pub filters: Vec<FileFilter>,
    /// Allow selecting several files at once
    pub multiple: bool,
    /// Only existing files are selectable (no directories)
    pub files_only: bool,
}

/// Resolved save-file picker description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFileSpec {
    /// Suggested full path: default directory joined with the file name
    pub default_path: PathBuf,
    pub filters: Vec<FileFilter>,
}

/// The concrete dialog derived from a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogSpec {
    MessageBox(MessageBoxSpec),
    OpenFile(OpenFileSpec),
    SaveFile(SaveFileSpec),
}

impl DialogSpec {
    /// The message-box spec, if this is one.
    pub fn as_message_box(&self) -> Option<&MessageBoxSpec> {
        match self {
            DialogSpec::MessageBox(spec) => Some(spec),
            _ => None,
        }
    }
}

/// Resolve a request into its concrete spec.
///
/// `default_dir` seeds the open/save pickers; it comes from the preference
/// store and is ignored for message-box kinds. Fails when a required option
/// is absent, before any host interaction.
pub fn build_spec(
    kind: DialogKind,
    options: &DialogOptions,
    default_dir: Option<&Path>,
) -> Result<DialogSpec> {
    let spec = match kind {
        DialogKind::Open => DialogSpec::OpenFile(open_spec(default_dir)),
        DialogKind::Save => DialogSpec::SaveFile(save_spec(kind, options, default_dir)?),
        _ => DialogSpec::MessageBox(message_box_spec(kind, options)?),
    };
    Ok(spec)
}

fn open_spec(default_dir: Option<&Path>) -> OpenFileSpec {
    OpenFileSpec {
        default_directory: default_dir.map(Path::to_path_buf),
        filters: vec![
            FileFilter::new("Diagram files", &SUPPORTED_EXTENSIONS),
            FileFilter::all_files(),
        ],
        multiple: true,
        files_only: true,
    }
}

fn save_spec(
    kind: DialogKind,
    options: &DialogOptions,
    default_dir: Option<&Path>,
) -> Result<SaveFileSpec> {
    let name = options.require(kind, "name")?;
    let file_type = options.require(kind, "fileType")?;

    let default_path = match default_dir {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    };

    Ok(SaveFileSpec {
        default_path,
        filters: vec![
            FileFilter::new(&format!("{} file", file_type.to_uppercase()), &[file_type]),
            FileFilter::all_files(),
        ],
    })
}

fn message_box_spec(kind: DialogKind, options: &DialogOptions) -> Result<MessageBoxSpec> {
    let spec = match kind {
        DialogKind::ContentChanged => MessageBoxSpec::new(
            "File changed",
            "The file has been changed externally.\nWould you like to reload it?".to_string(),
            MessageKind::Question,
            vec![
                DialogButton::new("ok", "Reload"),
                DialogButton::new("cancel", "Cancel"),
            ],
        ),
        DialogKind::Close => {
            let name = options.require(kind, "name")?;
            MessageBoxSpec::new(
                "Close diagram",
                format!("Save changes to \"{name}\" before closing?"),
                MessageKind::Question,
                vec![
                    DialogButton::new("cancel", "Cancel"),
                    DialogButton::new("save", "Save"),
                    DialogButton::new("discard", "Don't Save"),
                ],
            )
        }
        DialogKind::ImportError => {
            let name = options.require(kind, "name")?;
            let details = options.require(kind, "errorDetails")?;
            MessageBoxSpec::new(
                "Importing Error",
                format!("Ooops, we could not display \"{name}\"."),
                MessageKind::Error,
                vec![
                    DialogButton::new("close", "Close"),
                    DialogButton::new("ask-forum", "Ask in Forum"),
                ],
            )
            .with_detail(details.to_string())
        }
        DialogKind::UnrecognizedFile => {
            let name = options.require(kind, "name")?;
            MessageBoxSpec::new(
                "Unrecognized file format",
                format!("The file \"{name}\" is not a recognized diagram file."),
                MessageKind::Warning,
                vec![DialogButton::new("close", "Close")],
            )
        }
        DialogKind::ExistingFile => {
            let name = options.require(kind, "name")?;
            MessageBoxSpec::new(
                "Existing file",
                format!("The file \"{name}\" already exists. Do you want to overwrite it?"),
                MessageKind::Warning,
                vec![
                    DialogButton::new("cancel", "Cancel"),
                    DialogButton::new("overwrite", "Overwrite"),
                ],
            )
        }
        DialogKind::ReimportWarning => MessageBoxSpec::new(
            "Re-import file?",
            "Re-importing will discard the unsaved changes in the open diagram.\nContinue?"
                .to_string(),
            MessageKind::Warning,
            vec![
                DialogButton::new("cancel", "Cancel"),
                DialogButton::new("ok", "Reimport"),
            ],
        ),
        DialogKind::NamespaceConversion => MessageBoxSpec::new(
            "Deprecated namespace detected",
            "This diagram uses a deprecated namespace.\nWould you like to convert it?"
                .to_string(),
            MessageKind::Question,
            vec![
                DialogButton::new("cancel", "Cancel"),
                DialogButton::new("no", "No"),
                DialogButton::new("yes", "Yes"),
            ],
        ),
        DialogKind::SavingDenied => MessageBoxSpec::new(
            "Saving denied",
            "Write permission denied.\nSave the file to another location?".to_string(),
            MessageKind::Warning,
            vec![
                DialogButton::new("cancel", "Cancel"),
                DialogButton::new("save-as", "Save File as.."),
            ],
        ),
        DialogKind::Open | DialogKind::Save => {
            unreachable!("file picker kinds are handled in build_spec")
        }
    };
    Ok(spec)
}
