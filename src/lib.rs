//! Modeler Dialogs Library
//!
//! Native dialog bridge for the diagram modeler: symbolic dialog requests
//! are resolved into concrete message-box or file-picker specs, shown via a
//! pluggable platform host, and mapped back to stable button choices or
//! chosen paths. The directory of the last successful open/save is persisted
//! and seeds the next picker.

pub mod bridge;
pub mod error;
pub mod host;
pub mod preferences;
pub mod request;
pub mod spec;

pub use bridge::{DialogBridge, DialogOutcome};
pub use error::{DialogError, Result};
pub use host::{DialogHost, NativeHost};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore, Preferences};
pub use request::{DialogKind, DialogOptions};
pub use spec::{DialogButton, DialogSpec, FileFilter, MessageBoxSpec, MessageKind};
