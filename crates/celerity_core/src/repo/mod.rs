//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the note store contract consumed by the index layer.
//! - Isolate SQLite query details from index/view orchestration.
//!
//! # Invariants
//! - Every write is one synchronous durable statement; there is no
//!   batching and no transaction spanning multiple notes.
//! - Read paths reject invalid persisted state instead of masking it.

pub mod note_repo;
