//! Error types for modeler-dialogs

use thiserror::Error;

use crate::request::DialogKind;

#[derive(Error, Debug)]
pub enum DialogError {
    #[error("missing required option `{field}` for {kind} dialog")]
    MissingOption {
        kind: DialogKind,
        field: &'static str,
    },

    #[error("unknown dialog request type: {0:?}")]
    UnknownRequestType(String),

    #[error("preferences I/O error: {0}")]
    PreferencesIo(#[from] std::io::Error),

    #[error("preferences serialization error: {0}")]
    PreferencesFormat(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, DialogError>;
