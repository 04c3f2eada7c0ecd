//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `celerity_core` wiring
//!   independently of any graphical frontend.
//! - Open the default database and print a deterministic note summary.

use celerity_core::db::open_db;
use celerity_core::{
    core_version, default_log_level, init_logging, paths, NoteIndex, SqliteNoteRepository,
};
use std::error::Error;
use std::fs;

fn main() {
    if let Err(err) = run() {
        eprintln!("celerity: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    if let Some(log_dir) = paths::default_log_dir() {
        init_logging(default_log_level(), log_dir)?;
    }

    let db_path = paths::default_db_path().ok_or("no application directory available")?;
    if let Some(parent) = db_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let conn = open_db(&db_path)?;
    let repo = SqliteNoteRepository::new(&conn);
    let mut index = NoteIndex::new(repo);
    index.load()?;

    println!("celerity_core version={}", core_version());
    println!("database={}", db_path.display());
    println!("notes={}", index.len());
    for note in index.notes() {
        println!("{}  {}", note.format_modified(), note.title);
    }

    Ok(())
}
