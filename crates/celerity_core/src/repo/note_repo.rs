//! Note store contract and SQLite implementation.
//!
//! # Responsibility
//! - Durable persistence of notes in the single `notes` relation.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - `load_all` returns newest-first (`modified DESC, id DESC`).
//! - `delete_by_title` on an absent title is a no-op, not an error.
//! - Rows whose `modified` text does not parse are rejected as corrupt.

use crate::db::DbError;
use crate::model::note::{format_modified, parse_modified, Note, NoteId};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT id, title, content, modified FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for note persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Store interface for note persistence.
///
/// Timestamps are decided by the caller so that the index layer owns the
/// "refresh `modified` on every mutation" invariant in one place.
pub trait NoteRepository {
    /// Loads every note, newest first.
    fn load_all(&self) -> RepoResult<Vec<Note>>;
    /// Inserts a new row and returns its stable id.
    fn insert(&self, title: &str, content: &str, modified: NaiveDateTime) -> RepoResult<NoteId>;
    /// Overwrites content and timestamp when a row with this exact title
    /// exists, otherwise inserts. Returns the affected row's id.
    fn upsert(&self, title: &str, content: &str, modified: NaiveDateTime) -> RepoResult<NoteId>;
    /// Replaces one note's content and timestamp.
    fn update_content(
        &self,
        id: NoteId,
        content: &str,
        modified: NaiveDateTime,
    ) -> RepoResult<()>;
    /// Retitles one note in place. Callers are responsible for collision
    /// checks; storage accepts any title.
    fn rename(&self, id: NoteId, new_title: &str, modified: NaiveDateTime) -> RepoResult<()>;
    /// Removes the row with the given exact title, if present. Returns
    /// whether a row was removed.
    fn delete_by_title(&self, title: &str) -> RepoResult<bool>;
}

/// SQLite-backed note store.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn load_all(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY modified DESC, id DESC;"))?;

        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }

        Ok(notes)
    }

    fn insert(&self, title: &str, content: &str, modified: NaiveDateTime) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (title, content, modified) VALUES (?1, ?2, ?3);",
            params![title, content, format_modified(modified)],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn upsert(&self, title: &str, content: &str, modified: NaiveDateTime) -> RepoResult<NoteId> {
        let existing: Option<NoteId> = self
            .conn
            .query_row(
                "SELECT id FROM notes WHERE title = ?1;",
                [title],
                |row| row.get(0),
            )
            .optional()?;

        match existing {
            Some(id) => {
                self.update_content(id, content, modified)?;
                Ok(id)
            }
            None => self.insert(title, content, modified),
        }
    }

    fn update_content(
        &self,
        id: NoteId,
        content: &str,
        modified: NaiveDateTime,
    ) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes SET content = ?2, modified = ?3 WHERE id = ?1;",
            params![id, content, format_modified(modified)],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn rename(&self, id: NoteId, new_title: &str, modified: NaiveDateTime) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE notes SET title = ?2, modified = ?3 WHERE id = ?1;",
            params![id, new_title, format_modified(modified)],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(id));
        }

        Ok(())
    }

    fn delete_by_title(&self, title: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM notes WHERE title = ?1;", [title])?;
        Ok(changed > 0)
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let modified_text: String = row.get("modified")?;
    let modified = parse_modified(&modified_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid modified timestamp `{modified_text}` in notes.modified"
        ))
    })?;

    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        content: row.get("content")?,
        modified,
    })
}
