//! History storage and retrieval using SQLite.
//!
//! Manages persistent storage of transcripts, corrections, and rewrites with
//! timestamps, and provides querying for the history command.

use anyhow::Result;
use chrono::{DateTime, Local};
use rusqlite::OptionalExtension;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// What kind of result an entry holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Transcript,
    Correction,
    Rewrite,
}

impl EntryKind {
    pub fn id(&self) -> &'static str {
        match self {
            EntryKind::Transcript => "transcript",
            EntryKind::Correction => "correction",
            EntryKind::Rewrite => "rewrite",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "transcript" => Some(EntryKind::Transcript),
            "correction" => Some(EntryKind::Correction),
            "rewrite" => Some(EntryKind::Rewrite),
            _ => None,
        }
    }
}

/// A single result entry in the history.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    /// Unique identifier for this entry
    pub id: i64,
    /// What operation produced it
    pub kind: EntryKind,
    /// The result text
    pub text: String,
    /// When this entry was created
    pub created_at: DateTime<Local>,
}

/// Manages the history database.
pub struct HistoryManager {
    /// Path to the SQLite database file
    database_path: PathBuf,
    /// Connection to the database (lazy-loaded)
    connection: Option<Connection>,
}

impl HistoryManager {
    /// Creates a new history manager for the given data directory.
    pub fn new(data_dir: &Path) -> Result<Self> {
        let database_path = data_dir.join("history.db");

        Ok(Self {
            database_path,
            connection: None,
        })
    }

    /// Initializes database connection and creates tables if necessary.
    ///
    /// # Errors
    /// - If the database file cannot be opened
    /// - If table creation fails
    fn get_connection(&mut self) -> Result<&Connection> {
        if self.connection.is_none() {
            let connection = Connection::open(&self.database_path)?;

            connection.execute(
                "CREATE TABLE IF NOT EXISTS entries (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    kind TEXT NOT NULL,
                    text TEXT NOT NULL,
                    created_at TEXT NOT NULL
                )",
                [],
            )?;

            self.connection = Some(connection);
        }

        Ok(self.connection.as_ref().unwrap())
    }

    /// Saves a new result to the history database.
    ///
    /// # Errors
    /// - If database connection fails
    /// - If insertion fails
    pub fn save_entry(&mut self, kind: EntryKind, text: &str) -> Result<()> {
        let connection = self.get_connection()?;
        let timestamp = Local::now().to_rfc3339();

        connection.execute(
            "INSERT INTO entries (kind, text, created_at) VALUES (?1, ?2, ?3)",
            params![kind.id(), text, timestamp],
        )?;

        tracing::debug!("{} saved to history", kind.id());
        Ok(())
    }

    /// Retrieves the most recent entries, newest first.
    ///
    /// # Errors
    /// - If database connection fails
    /// - If query execution fails
    pub fn recent(&mut self, limit: usize) -> Result<Vec<HistoryEntry>> {
        let connection = self.get_connection()?;

        let mut statement = connection.prepare(
            "SELECT id, kind, text, created_at FROM entries
             ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;

        let entries = statement
            .query_map(params![limit as i64], row_to_entry)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(entries)
    }

    /// Retrieves a single entry by ID.
    ///
    /// # Errors
    /// - If database connection fails
    /// - If query execution fails
    pub fn get_entry(&mut self, id: i64) -> Result<Option<HistoryEntry>> {
        let connection = self.get_connection()?;

        let mut statement = connection
            .prepare("SELECT id, kind, text, created_at FROM entries WHERE id = ?1")?;

        let entry = statement.query_row(params![id], row_to_entry).optional()?;

        Ok(entry)
    }
}

fn row_to_entry(row: &rusqlite::Row<'_>) -> rusqlite::Result<HistoryEntry> {
    let id = row.get::<_, i64>(0)?;
    let kind_str = row.get::<_, String>(1)?;
    let text = row.get::<_, String>(2)?;
    let timestamp_str = row.get::<_, String>(3)?;

    let kind = EntryKind::from_id(&kind_str).ok_or_else(|| {
        rusqlite::Error::InvalidParameterName(format!("Unknown entry kind '{kind_str}'"))
    })?;

    let created_at = DateTime::parse_from_rfc3339(&timestamp_str)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| {
            rusqlite::Error::InvalidParameterName("Invalid timestamp format".to_string())
        })?;

    Ok(HistoryEntry {
        id,
        kind,
        text,
        created_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_data_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "mediascribe_test_{}_{}",
            tag,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_save_and_fetch_entries() {
        let dir = temp_data_dir("save");
        let _ = std::fs::remove_file(dir.join("history.db"));
        let mut manager = HistoryManager::new(&dir).unwrap();

        manager
            .save_entry(EntryKind::Transcript, "hello world")
            .unwrap();
        manager
            .save_entry(EntryKind::Rewrite, "salutations, planet")
            .unwrap();

        let entries = manager.recent(10).unwrap();
        assert_eq!(entries.len(), 2);
        // Newest first
        assert_eq!(entries[0].kind, EntryKind::Rewrite);
        assert_eq!(entries[1].text, "hello world");

        let fetched = manager.get_entry(entries[1].id).unwrap().unwrap();
        assert_eq!(fetched.kind, EntryKind::Transcript);
        assert!(manager.get_entry(9999).unwrap().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_recent_respects_limit() {
        let dir = temp_data_dir("limit");
        let _ = std::fs::remove_file(dir.join("history.db"));
        let mut manager = HistoryManager::new(&dir).unwrap();

        for i in 0..5 {
            manager
                .save_entry(EntryKind::Correction, &format!("entry {i}"))
                .unwrap();
        }

        assert_eq!(manager.recent(3).unwrap().len(), 3);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [EntryKind::Transcript, EntryKind::Correction, EntryKind::Rewrite] {
            assert_eq!(EntryKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(EntryKind::from_id("note"), None);
    }
}
