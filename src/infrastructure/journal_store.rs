//! Journal entry store

use crate::domain::JournalEntry;
use crate::infrastructure::store::{Diagnostics, IdSequence, JsonFile, StoreWarning};
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

/// Number of entries `recent` returns when the caller has no preference
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Append-only journal. Entries are stored in save order and never edited.
#[derive(Debug)]
pub struct JournalStore {
    file: JsonFile<Vec<JournalEntry>>,
    entries: Vec<JournalEntry>,
    sequence: IdSequence,
    diagnostics: Diagnostics,
}

impl JournalStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let file = JsonFile::new(path);
        let mut diagnostics = Diagnostics::default();

        let loaded = file.load();
        if let Some(warning) = loaded.warning {
            diagnostics.record(warning);
        }
        let entries: Vec<JournalEntry> = loaded.records;

        let highest = entries.iter().map(|e| e.id).max().unwrap_or(0);
        let derived_next = highest.max(entries.len() as u64) + 1;
        let sequence = IdSequence::open(file.path(), derived_next, &mut diagnostics);

        JournalStore {
            file,
            entries,
            sequence,
            diagnostics,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Save a new entry and return it with its assigned id
    pub fn save(&mut self, content: &str, timestamp: NaiveDateTime) -> JournalEntry {
        let entry = JournalEntry::new(self.sequence.allocate(), content, timestamp);
        tracing::info!("saved journal entry {} ({} words)", entry.id, entry.word_count);

        self.entries.push(entry.clone());
        self.flush();
        entry
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Newest entries first, at most `limit` of them
    pub fn recent(&self, limit: usize) -> Vec<&JournalEntry> {
        let mut sorted: Vec<&JournalEntry> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted.truncate(limit);
        sorted
    }

    /// Entries whose content contains `keyword`, ignoring case, in save order
    pub fn search(&self, keyword: &str) -> Vec<&JournalEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.matches(keyword))
            .collect()
    }

    pub fn by_id(&self, id: u64) -> Option<&JournalEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn diagnostics(&self) -> &[StoreWarning] {
        self.diagnostics.warnings()
    }

    pub fn take_diagnostics(&mut self) -> Vec<StoreWarning> {
        self.diagnostics.take()
    }

    fn flush(&mut self) {
        self.file.flush(&self.entries, &mut self.diagnostics);
        self.sequence.flush(&mut self.diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use std::fs;
    use tempfile::TempDir;

    fn at(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, day)
            .unwrap()
            .and_hms_opt(22, 0, 0)
            .unwrap()
    }

    fn open(temp: &TempDir) -> JournalStore {
        JournalStore::open(temp.path().join("journal_entries.json"))
    }

    #[test]
    fn test_ids_are_sequential_from_one() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);

        let ids: Vec<u64> = (1..=5)
            .map(|day| store.save(&format!("entry {}", day), at(day)).id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ids_continue_after_reopen() {
        let temp = TempDir::new().unwrap();
        open(&temp).save("first", at(1));

        let mut store = open(&temp);
        assert_eq!(store.save("second", at(2)).id, 2);
    }

    #[test]
    fn test_save_counts_words() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        let entry = store.save("  Today was   quieter than\nexpected ", at(3));
        assert_eq!(entry.word_count, 5);
        assert_eq!(entry.content, "  Today was   quieter than\nexpected ");
    }

    #[test]
    fn test_recent_newest_first_with_limit() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.save("middle", at(10));
        store.save("oldest", at(2));
        store.save("newest", at(20));

        let recent = store.recent(DEFAULT_RECENT_LIMIT);
        let contents: Vec<&str> = recent.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, vec!["newest", "middle", "oldest"]);

        assert_eq!(store.recent(1)[0].content, "newest");
        assert!(store.recent(0).is_empty());
        // The stored order is untouched
        assert_eq!(store.entries()[0].content, "middle");
    }

    #[test]
    fn test_recent_ties_keep_save_order() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.save("a", at(5));
        store.save("b", at(5));

        let recent = store.recent(2);
        assert_eq!(recent[0].content, "a");
        assert_eq!(recent[1].content, "b");
    }

    #[test]
    fn test_search_case_insensitive() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.save("I feel Anxious today", at(1));
        store.save("Calm evening walk", at(2));
        store.save("anxious again before the meeting", at(3));

        let found = store.search("anxious");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].content, "I feel Anxious today");
        assert_eq!(found[1].id, 3);

        assert_eq!(store.search("").len(), 3);
        assert!(store.search("holiday").is_empty());
    }

    #[test]
    fn test_by_id() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.save("one", at(1));
        store.save("two", at(2));

        assert_eq!(store.by_id(2).unwrap().content, "two");
        assert!(store.by_id(3).is_none());
        assert!(store.by_id(0).is_none());
    }

    #[test]
    fn test_round_trip_through_disk() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.save("one", at(1));
        store.save("two words", at(2) + Duration::milliseconds(250));

        let reloaded = open(&temp);
        assert_eq!(reloaded.entries(), store.entries());
    }

    #[test]
    fn test_corrupt_file_starts_empty_with_warning() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("journal_entries.json"), "[{\"id\": }]").unwrap();

        let mut store = open(&temp);
        assert!(store.entries().is_empty());
        assert_eq!(store.take_diagnostics().len(), 1);
        assert_eq!(store.save("fresh start", at(4)).id, 1);
    }

    #[test]
    fn test_reads_file_from_older_tool() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("journal_entries.json"),
            r#"[
  {"content": "Old entry", "timestamp": "2025-07-01T08:00:00.000001", "word_count": 2, "id": 1},
  {"content": "Another", "timestamp": "2025-07-02T08:00:00", "word_count": 1, "id": 2}
]"#,
        )
        .unwrap();

        let mut store = open(&temp);
        assert!(store.diagnostics().is_empty());
        assert_eq!(store.recent(10)[0].id, 2);
        assert_eq!(store.save("next", at(3)).id, 3);
    }
}
