//! Session preferences: the small persisted key/value state kept apart
//! from the notes database.
//!
//! # Responsibility
//! - Remember the last-opened note title and the two list column widths
//!   between launches.
//!
//! # Invariants
//! - A missing preferences file yields defaults, never an error.
//! - The last-open title is cleared whenever no note is open; restoring
//!   it is the frontend's job and only applies if the title still exists.

use crate::paths;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_TITLE_COLUMN_WIDTH: u32 = 250;
pub const DEFAULT_MODIFIED_COLUMN_WIDTH: u32 = 200;

/// Persisted per-user session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionPrefs {
    /// Title of the note open when the app last closed, if any.
    pub last_open_note: Option<String>,
    pub title_column_width: u32,
    pub modified_column_width: u32,
}

impl Default for SessionPrefs {
    fn default() -> Self {
        Self {
            last_open_note: None,
            title_column_width: DEFAULT_TITLE_COLUMN_WIDTH,
            modified_column_width: DEFAULT_MODIFIED_COLUMN_WIDTH,
        }
    }
}

impl SessionPrefs {
    /// Records the currently open note.
    pub fn note_opened(&mut self, title: &str) {
        self.last_open_note = Some(title.to_string());
    }

    /// Records that no note is open.
    pub fn note_closed(&mut self) {
        self.last_open_note = None;
    }
}

/// Preferences persistence failure.
#[derive(Debug)]
pub enum PrefsError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    /// No per-user directory could be determined for the default store.
    ProjectDir,
}

impl Display for PrefsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
            Self::ProjectDir => write!(f, "no application directory available"),
        }
    }
}

impl Error for PrefsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::ProjectDir => None,
        }
    }
}

impl From<std::io::Error> for PrefsError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PrefsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err)
    }
}

/// JSON-file-backed store for [`SessionPrefs`].
pub struct PrefsStore {
    prefs_path: PathBuf,
}

impl PrefsStore {
    pub fn new(prefs_path: PathBuf) -> Self {
        Self { prefs_path }
    }

    /// Store at the platform default location.
    pub fn default_store() -> Result<Self, PrefsError> {
        let path = paths::default_prefs_path().ok_or(PrefsError::ProjectDir)?;
        Ok(Self::new(path))
    }

    /// Loads preferences, falling back to defaults when nothing has been
    /// saved yet.
    pub fn load(&self) -> Result<SessionPrefs, PrefsError> {
        if !self.prefs_path.exists() {
            return Ok(SessionPrefs::default());
        }
        let raw = fs::read_to_string(&self.prefs_path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Writes preferences, creating parent directories as needed.
    pub fn save(&self, prefs: &SessionPrefs) -> Result<(), PrefsError> {
        if let Some(parent) = self.prefs_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(prefs)?;
        fs::write(&self.prefs_path, data)?;
        Ok(())
    }
}
