//! Domain model for the note collection.
//!
//! # Responsibility
//! - Define the canonical note record shared by storage and index layers.
//! - Own the fixed on-disk timestamp format.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId` assigned by storage.
//! - `modified` text round-trips exactly through format/parse.

pub mod note;
