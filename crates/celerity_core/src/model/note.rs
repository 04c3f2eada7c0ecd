//! Note record and timestamp helpers.
//!
//! # Responsibility
//! - Define the sole domain entity: a titled rich-text document.
//! - Keep the persisted timestamp format in one place.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - Title uniqueness (case-insensitive) is enforced by the index layer,
//!   not by this type or by storage.

use chrono::{Local, NaiveDateTime, Timelike};

/// Stable identifier assigned by storage on insert.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Fixed persisted form of `Note::modified` (`yyyy-MM-dd HH:mm:ss`).
pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A titled rich-text document with a last-modified timestamp.
///
/// `content` is serialized markup text and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    /// Stable storage-assigned row id. All caller-facing lookups go by
    /// title; the id exists so rename is a single in-place update.
    pub id: NoteId,
    /// Non-empty display title, unique among all notes case-insensitively.
    pub title: String,
    /// Markup body. Empty for freshly created notes.
    pub content: String,
    /// Refreshed to "now" on every persisted mutation.
    pub modified: NaiveDateTime,
}

impl Note {
    /// Renders `modified` in the persisted text form.
    pub fn format_modified(&self) -> String {
        format_modified(self.modified)
    }
}

/// Formats a timestamp in the fixed persisted form.
pub fn format_modified(timestamp: NaiveDateTime) -> String {
    timestamp.format(MODIFIED_FORMAT).to_string()
}

/// Parses the persisted timestamp text.
pub fn parse_modified(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, MODIFIED_FORMAT)
}

/// Current local time, truncated to whole seconds so the value survives a
/// format/parse round trip unchanged.
pub fn modified_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::{format_modified, modified_now, parse_modified};

    #[test]
    fn modified_round_trips_through_text_form() {
        let stamp = modified_now();
        let text = format_modified(stamp);
        assert_eq!(parse_modified(&text).unwrap(), stamp);
    }

    #[test]
    fn parse_rejects_unexpected_layout() {
        assert!(parse_modified("2024/01/02 03:04:05").is_err());
        assert!(parse_modified("not a timestamp").is_err());
    }

    #[test]
    fn format_uses_fixed_width_fields() {
        let stamp = parse_modified("2024-03-07 09:05:01").unwrap();
        assert_eq!(format_modified(stamp), "2024-03-07 09:05:01");
    }
}
