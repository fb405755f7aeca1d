//! Result history for mediascribe.
//!
//! Persists transcripts and transform results so earlier work can be
//! reviewed and reused.

pub mod storage;

pub use storage::{EntryKind, HistoryEntry, HistoryManager};
