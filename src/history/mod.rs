//! Calculation history.
//!
//! This module provides:
//! - The bounded, most-recent-first history log
//! - Key-value stores the log is persisted to
//! - Best-effort load/save helpers that never fail the caller

mod store;

pub use store::{FileStore, HISTORY_KEY, KeyValueStore, MemoryStore, load_history, save_history};

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Maximum number of entries kept in the history log.
pub const HISTORY_LIMIT: usize = 100;

/// One completed evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression trace, e.g. `7 + 3` or `√9`.
    pub expression: String,
    /// The result as shown on the display.
    pub result: String,
}

impl HistoryEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

/// Bounded history log, newest entry first.
///
/// Serializes as a plain array of entries so the stored form stays a
/// list of `{expression, result}` records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    #[serde(skip)]
    revision: u64,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from stored entries, keeping at most [`HISTORY_LIMIT`].
    pub fn from_entries(entries: impl IntoIterator<Item = HistoryEntry>) -> Self {
        let entries: VecDeque<HistoryEntry> = entries.into_iter().take(HISTORY_LIMIT).collect();
        Self {
            entries,
            revision: 0,
        }
    }

    /// Insert an entry at the head, dropping the oldest entries past the limit.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(HISTORY_LIMIT);
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.revision += 1;
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mutation counter. Changes whenever the log is modified, which lets
    /// the host decide whether a save is due.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_is_newest_first() {
        let mut history = History::new();
        history.push(HistoryEntry::new("1 + 1", "2"));
        history.push(HistoryEntry::new("2 + 2", "4"));

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(0).unwrap().result, "4");
        assert_eq!(history.get(1).unwrap().result, "2");
    }

    #[test]
    fn test_limit_drops_oldest() {
        let mut history = History::new();
        for i in 1..=HISTORY_LIMIT + 1 {
            history.push(HistoryEntry::new(format!("{} + 0", i), i.to_string()));
        }

        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.get(0).unwrap().result, "101");
        assert_eq!(history.get(HISTORY_LIMIT - 1).unwrap().result, "2");
    }

    #[test]
    fn test_revision_tracks_mutations() {
        let mut history = History::new();
        let start = history.revision();
        history.push(HistoryEntry::new("1 + 1", "2"));
        history.clear();
        assert_eq!(history.revision(), start + 2);
        assert!(history.is_empty());
    }

    #[test]
    fn test_serializes_as_record_list() {
        let history = History::from_entries([HistoryEntry::new("7 + 3", "10")]);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"[{"expression":"7 + 3","result":"10"}]"#);
    }

    #[test]
    fn test_from_entries_truncates() {
        let entries = (0..150).map(|i| HistoryEntry::new("x", i.to_string()));
        let history = History::from_entries(entries);
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.get(0).unwrap().result, "0");
    }
}
