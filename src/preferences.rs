//! Default-path preferences
//!
//! The bridge remembers the directory of the last successful open/save and
//! seeds the next picker with it. Persistence is a small TOML file in the
//! platform config dir (~/.config/modeler-dialogs/preferences.toml).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Persisted preference data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Directory of the last successful open/save interaction
    pub default_path: Option<PathBuf>,
}

impl Preferences {
    /// Default location of the preferences file.
    pub fn default_file() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("modeler-dialogs/preferences.toml"))
            .unwrap_or_else(|| PathBuf::from("preferences.toml"))
    }

    /// Load preferences from a file, falling back to defaults on a missing
    /// or unreadable file.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            if let Ok(content) = std::fs::read_to_string(path) {
                if let Ok(prefs) = toml::from_str(&content) {
                    return prefs;
                }
            }
        }
        Self::default()
    }

    /// Save preferences to a file, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Where the bridge reads and writes the last-used directory.
///
/// Injected into the bridge so tests (and embedders with their own settings
/// machinery) can supply their own storage.
pub trait PreferenceStore {
    fn default_path(&self) -> Option<PathBuf>;

    /// Record a new last-used directory. Persistence failures are reported
    /// so callers can decide whether they matter.
    fn set_default_path(&mut self, dir: &Path) -> Result<()>;
}

/// TOML-file-backed store; writes through on every update.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    prefs: Preferences,
}

impl FilePreferences {
    /// Open the store at the platform default location.
    pub fn open_default() -> Self {
        Self::open(Preferences::default_file())
    }

    pub fn open(path: PathBuf) -> Self {
        let prefs = Preferences::load_from(&path);
        debug!(path = %path.display(), default_path = ?prefs.default_path, "loaded preferences");
        Self { path, prefs }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferences {
    fn default_path(&self) -> Option<PathBuf> {
        self.prefs.default_path.clone()
    }

    fn set_default_path(&mut self, dir: &Path) -> Result<()> {
        self.prefs.default_path = Some(dir.to_path_buf());
        self.prefs.save_to(&self.path)
    }
}

/// In-memory store for tests and embedders without persistence.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    default_path: Option<PathBuf>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_path(dir: impl Into<PathBuf>) -> Self {
        Self {
            default_path: Some(dir.into()),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn default_path(&self) -> Option<PathBuf> {
        self.default_path.clone()
    }

    fn set_default_path(&mut self, dir: &Path) -> Result<()> {
        self.default_path = Some(dir.to_path_buf());
        Ok(())
    }
}
