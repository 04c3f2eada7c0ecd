//! Note index: the in-memory working set plus every title-level rule.
//!
//! # Responsibility
//! - Mirror all notes loaded from the store; keep both in sync on every
//!   create/rename/edit/delete.
//! - Provide the filter and sort logic behind the note list.
//!
//! # Invariants
//! - Mutations persist first and touch the mirror second, so a failed
//!   store call leaves in-memory state exactly as it was.
//! - Case-insensitive title uniqueness is checked here, never in SQL.
//! - `modified` is refreshed to "now" on every persisted mutation.

use crate::index::view::{NoteView, SortKey, SortOrder};
use crate::model::note::{modified_now, Note};
use crate::repo::note_repo::{NoteRepository, RepoError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Title of the built-in tutorial note.
pub const TUTORIAL_TITLE: &str = "How to Use Celerity";

const TUTORIAL_CONTENT: &str = include_str!("tutorial.html");

/// Index-level error for user-triggered note operations.
///
/// `EmptyTitle` and `DuplicateTitle` mean the action was silently rejected
/// and prior state is unchanged; callers revert any speculative UI state.
#[derive(Debug)]
pub enum IndexError {
    /// Create/rename input was blank after trimming.
    EmptyTitle,
    /// Another note already holds this title, case-insensitively.
    DuplicateTitle(String),
    /// The referenced row position is not in the canonical list.
    NoSuchNote(usize),
    /// Persistence-layer failure; in-memory state was left untouched.
    Repo(RepoError),
}

impl Display for IndexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title cannot be empty"),
            Self::DuplicateTitle(title) => {
                write!(f, "a note titled `{title}` already exists")
            }
            Self::NoSuchNote(idx) => write!(f, "no note at position {idx}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for IndexError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for IndexError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// In-memory mirror of the store plus filter/sort/mutation entry points.
///
/// The canonical list order is newest-first on load; newly created notes
/// go to the head. Views hold indices into this list.
pub struct NoteIndex<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteIndex<R> {
    /// Creates an empty index over the given store. Call [`load`] before
    /// serving views.
    ///
    /// [`load`]: NoteIndex::load
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            notes: Vec::new(),
        }
    }

    /// Replaces the mirror with the store's current contents.
    pub fn load(&mut self) -> Result<(), IndexError> {
        self.notes = self.repo.load_all()?;
        info!(
            "event=index_load module=index status=ok count={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Canonical note list, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Note> {
        self.notes.get(idx)
    }

    /// Position of the note with this exact title, if any.
    ///
    /// Exact matching is what link navigation and session restore use;
    /// user-facing collision checks go through [`position_by_title_ci`].
    ///
    /// [`position_by_title_ci`]: NoteIndex::position_by_title_ci
    pub fn position_of_title(&self, title: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.title == title)
    }

    /// Position of the note matching this title case-insensitively,
    /// ignoring surrounding whitespace.
    pub fn position_by_title_ci(&self, title: &str) -> Option<usize> {
        let needle = title.trim().to_lowercase();
        self.notes
            .iter()
            .position(|note| note.title.trim().to_lowercase() == needle)
    }

    /// Whether a note with this exact title exists. Existence check used
    /// by the link resolver.
    pub fn contains_title(&self, title: &str) -> bool {
        self.position_of_title(title).is_some()
    }

    /// Indices of notes whose title or content contains `query`,
    /// case-insensitively. An empty query matches all notes. No ranking:
    /// matches retain canonical order until sorted.
    pub fn filter(&self, query: &str) -> Vec<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return (0..self.notes.len()).collect();
        }

        self.notes
            .iter()
            .enumerate()
            .filter(|(_, note)| {
                note.title.to_lowercase().contains(&needle)
                    || note.content.to_lowercase().contains(&needle)
            })
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Stable sort of a filtered view. The canonical list is untouched.
    pub fn sort_rows(&self, rows: &mut [usize], key: SortKey, order: SortOrder) {
        rows.sort_by(|&a, &b| {
            let ordering = match key {
                SortKey::Title => self.notes[a]
                    .title
                    .to_lowercase()
                    .cmp(&self.notes[b].title.to_lowercase()),
                SortKey::Modified => self.notes[a].modified.cmp(&self.notes[b].modified),
            };
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }

    /// Recomputes a view's rows from its query, then sorts them.
    pub fn refresh_view(&self, view: &mut NoteView) {
        view.rows = self.filter(&view.query);
        let (key, order) = (view.sort_key, view.sort_order);
        self.sort_rows(&mut view.rows, key, order);
    }

    /// Applies header-click semantics to the view and re-sorts it.
    pub fn select_column(&self, view: &mut NoteView, key: SortKey) {
        view.select_column(key);
        self.refresh_view(view);
    }

    /// Creates a note with empty content at the head of the canonical
    /// list and persists it immediately.
    ///
    /// Rejected with `DuplicateTitle` when a note with this title already
    /// exists case-insensitively; callers should open the existing note
    /// instead (see [`position_by_title_ci`]).
    ///
    /// [`position_by_title_ci`]: NoteIndex::position_by_title_ci
    pub fn create(&mut self, raw_title: &str) -> Result<usize, IndexError> {
        let title = raw_title.trim();
        if title.is_empty() {
            return Err(IndexError::EmptyTitle);
        }
        if self.position_by_title_ci(title).is_some() {
            return Err(IndexError::DuplicateTitle(title.to_string()));
        }

        let modified = modified_now();
        let id = self.repo.insert(title, "", modified)?;
        self.notes.insert(
            0,
            Note {
                id,
                title: title.to_string(),
                content: String::new(),
                modified,
            },
        );
        info!("event=note_create module=index status=ok id={id}");
        Ok(0)
    }

    /// Retitles the note at `idx`.
    ///
    /// Rejected when the new title is blank or collides case-insensitively
    /// with a different note; a rename to the identical title is a no-op.
    pub fn rename(&mut self, idx: usize, raw_new_title: &str) -> Result<(), IndexError> {
        let note = self.notes.get(idx).ok_or(IndexError::NoSuchNote(idx))?;

        let new_title = raw_new_title.trim();
        if new_title.is_empty() {
            return Err(IndexError::EmptyTitle);
        }
        if note.title == new_title {
            return Ok(());
        }
        if let Some(other) = self.position_by_title_ci(new_title) {
            if other != idx {
                return Err(IndexError::DuplicateTitle(new_title.to_string()));
            }
        }

        let modified = modified_now();
        self.repo.rename(note.id, new_title, modified)?;

        let note = &mut self.notes[idx];
        note.title = new_title.to_string();
        note.modified = modified;
        info!("event=note_rename module=index status=ok id={}", note.id);
        Ok(())
    }

    /// Auto-save entry point: persists new content for the note at `idx`.
    ///
    /// Returns whether a write happened; unchanged content is skipped
    /// without touching `modified`.
    pub fn update_content(&mut self, idx: usize, content: &str) -> Result<bool, IndexError> {
        let note = self.notes.get(idx).ok_or(IndexError::NoSuchNote(idx))?;
        if note.content == content {
            return Ok(false);
        }

        let modified = modified_now();
        self.repo.update_content(note.id, content, modified)?;

        let note = &mut self.notes[idx];
        note.content = content.to_string();
        note.modified = modified;
        Ok(true)
    }

    /// Deletes the note at `idx` from the store and the mirror.
    /// Immediate and not reversible.
    pub fn delete(&mut self, idx: usize) -> Result<(), IndexError> {
        let note = self.notes.get(idx).ok_or(IndexError::NoSuchNote(idx))?;
        let id = note.id;

        self.repo.delete_by_title(&note.title)?;
        self.notes.remove(idx);
        info!("event=note_delete module=index status=ok id={id}");
        Ok(())
    }

    /// Creates or refreshes the built-in tutorial note and returns its
    /// position. Idempotent: re-invoking updates the existing note in
    /// place instead of duplicating it.
    pub fn create_tutorial(&mut self) -> Result<usize, IndexError> {
        let modified = modified_now();
        let id = self.repo.upsert(TUTORIAL_TITLE, TUTORIAL_CONTENT, modified)?;

        match self.position_of_title(TUTORIAL_TITLE) {
            Some(idx) => {
                let note = &mut self.notes[idx];
                note.content = TUTORIAL_CONTENT.to_string();
                note.modified = modified;
                Ok(idx)
            }
            None => {
                self.notes.insert(
                    0,
                    Note {
                        id,
                        title: TUTORIAL_TITLE.to_string(),
                        content: TUTORIAL_CONTENT.to_string(),
                        modified,
                    },
                );
                Ok(0)
            }
        }
    }
}
