//! List or show previous results.
//!
//! Without arguments, prints the most recent entries with a short preview.
//! With an entry id, prints that entry's full text to stdout so it can be
//! piped onward.

use crate::commands::shared;
use crate::history::HistoryManager;

const DEFAULT_LIMIT: usize = 20;

/// Handles the history command.
///
/// # Arguments
/// * `id` - Optional entry id; prints the full text of that entry
pub fn handle_history(id: Option<i64>) -> Result<(), anyhow::Error> {
    let data_dir = shared::data_dir()?;
    let mut manager = HistoryManager::new(&data_dir)?;

    if let Some(id) = id {
        let entry = manager
            .get_entry(id)?
            .ok_or_else(|| anyhow::anyhow!("No history entry with id {id}"))?;
        println!("{}", entry.text);
        return Ok(());
    }

    let entries = manager.recent(DEFAULT_LIMIT)?;

    if entries.is_empty() {
        println!("No history yet. Transcribe, correct, or rewrite something first.");
        return Ok(());
    }

    for entry in entries {
        println!(
            "{:>5}  {}  {:<10}  {}",
            entry.id,
            entry.created_at.format("%Y-%m-%d %H:%M"),
            entry.kind.id(),
            preview(&entry.text, 60)
        );
    }
    println!();
    println!("Use 'mediascribe history <id>' to print an entry in full.");

    Ok(())
}

/// First line of the text, truncated at a character budget.
fn preview(text: &str, max_chars: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let mut preview: String = first_line.chars().take(max_chars).collect();
    if first_line.chars().count() > max_chars || text.lines().count() > 1 {
        preview.push('…');
    }
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text() {
        assert_eq!(preview("hello", 60), "hello");
    }

    #[test]
    fn test_preview_truncates_long_line() {
        let text = "a".repeat(100);
        let p = preview(&text, 60);
        assert_eq!(p.chars().count(), 61);
        assert!(p.ends_with('…'));
    }

    #[test]
    fn test_preview_marks_multiline() {
        assert_eq!(preview("first\nsecond", 60), "first…");
    }
}
