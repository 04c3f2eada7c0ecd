//! Explicit view/session state for the note list.
//!
//! Sort column and order are passed in and out of index calls rather than
//! living as ambient fields, so frontends only own rendering concerns.

/// Column the filtered view is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Modified,
}

impl SortKey {
    /// Order applied when this column is freshly selected: alphabetical
    /// for titles, newest-first for timestamps.
    pub fn default_order(self) -> SortOrder {
        match self {
            Self::Title => SortOrder::Ascending,
            Self::Modified => SortOrder::Descending,
        }
    }
}

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Search query, active sort, and the resulting filtered rows.
///
/// `rows` holds indices into the canonical note list; the canonical order
/// itself is never touched by view operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteView {
    pub query: String,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub rows: Vec<usize>,
}

impl Default for NoteView {
    fn default() -> Self {
        Self {
            query: String::new(),
            sort_key: SortKey::Modified,
            sort_order: SortOrder::Descending,
            rows: Vec::new(),
        }
    }
}

impl NoteView {
    /// Header-click semantics: selecting the active column flips the
    /// order, selecting the other column resets to its default order.
    pub fn select_column(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_key = key;
            self.sort_order = key.default_order();
        }
    }
}
