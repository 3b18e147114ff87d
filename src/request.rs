//! Symbolic dialog requests
//!
//! A request names a dialog by its symbolic kind and carries the kind-specific
//! options. Validation of required options happens here, before anything is
//! shown on screen.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DialogError;

/// Symbolic dialog kinds understood by the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DialogKind {
    /// File changed on disk behind the editor's back
    ContentChanged,
    /// Open-file picker
    Open,
    /// Save-file picker
    Save,
    /// Close a dirty diagram tab
    Close,
    /// Diagram import failed
    ImportError,
    /// File is not a recognized diagram format
    UnrecognizedFile,
    /// Target file already exists
    ExistingFile,
    /// Re-importing would drop unsaved changes
    ReimportWarning,
    /// Legacy namespace found, offer conversion
    NamespaceConversion,
    /// Write permission denied on save
    SavingDenied,
}

impl DialogKind {
    pub const ALL: [DialogKind; 10] = [
        DialogKind::ContentChanged,
        DialogKind::Open,
        DialogKind::Save,
        DialogKind::Close,
        DialogKind::ImportError,
        DialogKind::UnrecognizedFile,
        DialogKind::ExistingFile,
        DialogKind::ReimportWarning,
        DialogKind::NamespaceConversion,
        DialogKind::SavingDenied,
    ];

    /// The kebab-case tag used on the wire and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogKind::ContentChanged => "content-changed",
            DialogKind::Open => "open",
            DialogKind::Save => "save",
            DialogKind::Close => "close",
            DialogKind::ImportError => "import-error",
            DialogKind::UnrecognizedFile => "unrecognized-file",
            DialogKind::ExistingFile => "existing-file",
            DialogKind::ReimportWarning => "reimport-warning",
            DialogKind::NamespaceConversion => "namespace-conversion",
            DialogKind::SavingDenied => "saving-denied",
        }
    }

    /// Whether this kind resolves to a file picker rather than a message box.
    pub fn is_file_picker(&self) -> bool {
        matches!(self, DialogKind::Open | DialogKind::Save)
    }
}

impl fmt::Display for DialogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialogKind {
    type Err = DialogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DialogKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DialogError::UnknownRequestType(s.to_string()))
    }
}

/// Kind-specific options accompanying a dialog request.
///
/// All fields are optional at the type level; which ones must be present is a
/// property of the [`DialogKind`] and is checked by [`DialogOptions::require`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogOptions {
    /// Display name of the diagram file (e.g. "diagram.bpmn")
    pub name: Option<String>,
    /// Diagram file extension without the dot (e.g. "bpmn")
    pub file_type: Option<String>,
    /// Human-readable import error details
    pub error_details: Option<String>,
}

impl DialogOptions {
    /// Options carrying only a file name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Fetch a required field, failing with [`DialogError::MissingOption`]
    /// if it was not supplied.
    pub fn require(&self, kind: DialogKind, field: &'static str) -> crate::Result<&str> {
        let value = match field {
            "name" => self.name.as_deref(),
            "fileType" => self.file_type.as_deref(),
            "errorDetails" => self.error_details.as_deref(),
            _ => None,
        };
        value.ok_or(DialogError::MissingOption { kind, field })
    }
}
