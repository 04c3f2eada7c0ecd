//! Per-user application directory resolution.
//!
//! All persisted state (notes database, session preferences, logs) lives
//! under the platform application directories for "Celerity". Callers that
//! want a different location pass explicit paths instead.

use directories::ProjectDirs;
use std::path::PathBuf;

const NOTES_DB_FILENAME: &str = "notes.db";
const SESSION_PREFS_FILENAME: &str = "session.json";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("app", "celerity", "Celerity")
}

/// Default location of the notes database file.
///
/// Returns `None` when no home directory can be determined.
pub fn default_db_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join(NOTES_DB_FILENAME))
}

/// Default location of the session preferences file.
pub fn default_prefs_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(SESSION_PREFS_FILENAME))
}

/// Default directory for rolling log files.
pub fn default_log_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}
