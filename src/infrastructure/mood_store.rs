//! Mood log store

use crate::domain::timestamp::{self, days_before};
use crate::domain::{MoodEntry, MoodStats};
use crate::infrastructure::store::{Diagnostics, JsonFile, StoreWarning};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Window used by `history` when the caller has no preference
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Window that `stats` averages over
pub const STATS_WINDOW_DAYS: u32 = 7;

/// Append-only log of mood samples, kept in the order they were logged
#[derive(Debug)]
pub struct MoodStore {
    file: JsonFile<Vec<MoodEntry>>,
    entries: Vec<MoodEntry>,
    diagnostics: Diagnostics,
}

impl MoodStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let file = JsonFile::new(path);
        let mut diagnostics = Diagnostics::default();

        let loaded = file.load();
        if let Some(warning) = loaded.warning {
            diagnostics.record(warning);
        }

        MoodStore {
            file,
            entries: loaded.records,
            diagnostics,
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn log(&mut self, entry: MoodEntry) {
        self.entries.push(entry);
        self.flush();
    }

    /// Every entry, in logging order
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Entries newer than `window_days` days, in logging order
    pub fn history(&self, window_days: u32) -> Vec<&MoodEntry> {
        self.history_at(window_days, timestamp::now())
    }

    pub fn history_at(&self, window_days: u32, now: NaiveDateTime) -> Vec<&MoodEntry> {
        let cutoff = days_before(now, window_days);
        self.entries
            .iter()
            .filter(|entry| entry.timestamp > cutoff)
            .collect()
    }

    pub fn stats(&self) -> MoodStats {
        self.stats_at(timestamp::now())
    }

    pub fn stats_at(&self, now: NaiveDateTime) -> MoodStats {
        if self.entries.is_empty() {
            return MoodStats::default();
        }
        let window = self.history_at(STATS_WINDOW_DAYS, now);
        MoodStats::from_window(self.entries.len(), &window)
    }

    /// How often each trigger shows up in the window
    pub fn trigger_counts(&self, window_days: u32) -> BTreeMap<String, usize> {
        self.trigger_counts_at(window_days, timestamp::now())
    }

    pub fn trigger_counts_at(
        &self,
        window_days: u32,
        now: NaiveDateTime,
    ) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in self.history_at(window_days, now) {
            for trigger in &entry.triggers {
                *counts.entry(trigger.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Delete entries logged more than `days` days ago. Returns how many went.
    pub fn purge_older_than(&mut self, days: u32) -> usize {
        self.purge_older_than_at(days, timestamp::now())
    }

    pub fn purge_older_than_at(&mut self, days: u32, now: NaiveDateTime) -> usize {
        let cutoff = days_before(now, days);
        let before = self.entries.len();
        self.entries.retain(|entry| entry.timestamp >= cutoff);

        let removed = before - self.entries.len();
        if removed > 0 {
            tracing::info!("purged {} mood entr(ies)", removed);
            self.flush();
        }
        removed
    }

    pub fn diagnostics(&self) -> &[StoreWarning] {
        self.diagnostics.warnings()
    }

    pub fn take_diagnostics(&mut self) -> Vec<StoreWarning> {
        self.diagnostics.take()
    }

    fn flush(&mut self) {
        self.file.flush(&self.entries, &mut self.diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use std::fs;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 20)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap()
    }

    fn entry(days_ago: i64, energy: u8, anxiety: u8) -> MoodEntry {
        MoodEntry::new("okay", energy, anxiety, now() - Duration::days(days_ago)).unwrap()
    }

    fn open(temp: &TempDir) -> MoodStore {
        MoodStore::open(temp.path().join("mood_data.json"))
    }

    #[test]
    fn test_log_appends_and_flushes() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.log(entry(0, 5, 5).with_triggers(["work"]).with_notes("long day"));

        let reloaded = open(&temp);
        assert_eq!(reloaded.entries().len(), 1);
        assert_eq!(reloaded.entries()[0].notes, "long day");
        assert!(reloaded.entries()[0].triggers.contains("work"));
    }

    #[test]
    fn test_history_window_scenario() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.log(entry(40, 2, 7));
        store.log(entry(10, 5, 4));
        store.log(entry(1, 9, 2));

        let history = store.history_at(DEFAULT_HISTORY_DAYS, now());
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].energy.value(), 5);
        assert_eq!(history[1].energy.value(), 9);

        let stats = store.stats_at(now());
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.recent_entries, 1);
        assert_eq!(stats.avg_energy, 9.0);
        assert_eq!(stats.avg_anxiety, 2.0);
    }

    #[test]
    fn test_history_preserves_append_order() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.log(entry(1, 3, 3));
        store.log(entry(5, 4, 4));
        store.log(entry(2, 6, 6));

        let energies: Vec<u8> = store
            .history_at(30, now())
            .iter()
            .map(|e| e.energy.value())
            .collect();
        assert_eq!(energies, vec![3, 4, 6]);
    }

    #[test]
    fn test_history_window_bounds() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        for days_ago in [0, 1, 6, 7, 8, 29, 30, 31] {
            store.log(entry(days_ago, 5, 5));
        }

        for days in [0u32, 1, 7, 30, 45] {
            let cutoff = now() - Duration::days(i64::from(days));
            let history = store.history_at(days, now());
            assert!(history.iter().all(|e| e.timestamp > cutoff));
            let expected = store
                .entries()
                .iter()
                .filter(|e| e.timestamp > cutoff)
                .count();
            assert_eq!(history.len(), expected);
        }

        // An entry exactly at the cutoff is outside the window
        assert_eq!(store.history_at(7, now()).len(), 3);
    }

    #[test]
    fn test_stats_on_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = open(&temp);
        assert_eq!(store.stats_at(now()), MoodStats::default());
        assert_eq!(store.stats_at(now()).total_entries, 0);
    }

    #[test]
    fn test_stats_with_nothing_recent() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.log(entry(20, 8, 8));

        let stats = store.stats_at(now());
        assert_eq!(stats.total_entries, 1);
        assert_eq!(stats.recent_entries, 0);
        assert_eq!(stats.avg_energy, 0.0);
    }

    #[test]
    fn test_trigger_counts() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.log(entry(1, 5, 5).with_triggers(["work", "sleep"]));
        store.log(entry(2, 5, 5).with_triggers(["work"]));
        store.log(entry(50, 5, 5).with_triggers(["money"]));

        let counts = store.trigger_counts_at(30, now());
        assert_eq!(counts.get("work"), Some(&2));
        assert_eq!(counts.get("sleep"), Some(&1));
        assert!(!counts.contains_key("money"));
    }

    #[test]
    fn test_purge_old_entries() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.log(entry(40, 2, 2));
        store.log(entry(3, 4, 4));

        assert_eq!(store.purge_older_than_at(30, now()), 1);
        assert_eq!(store.purge_older_than_at(30, now()), 0);
        assert_eq!(open(&temp).entries().len(), 1);
    }

    #[test]
    fn test_huge_windows_cover_everything() {
        let temp = TempDir::new().unwrap();
        let mut store = open(&temp);
        store.log(entry(4000, 2, 9).with_triggers(["work"]));
        store.log(entry(1, 6, 3).with_triggers(["work"]));

        assert_eq!(store.history_at(100_000_000, now()).len(), 2);
        assert_eq!(store.history_at(u32::MAX, now()).len(), 2);
        assert_eq!(store.trigger_counts_at(u32::MAX, now()).get("work"), Some(&2));
        assert_eq!(store.stats_at(now()).total_entries, 2);

        assert_eq!(store.purge_older_than_at(u32::MAX, now()), 0);
        assert_eq!(open(&temp).entries().len(), 2);
    }

    #[test]
    fn test_corrupt_file_starts_empty_with_warning() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("mood_data.json"), "not json at all").unwrap();

        let store = open(&temp);
        assert!(store.entries().is_empty());
        assert!(matches!(
            store.diagnostics()[0],
            StoreWarning::CorruptState { .. }
        ));
    }

    #[test]
    fn test_reads_file_from_older_tool() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("mood_data.json"),
            r#"[
  {
    "mood": "🙂 Good",
    "energy": 6,
    "anxiety": 3,
    "triggers": ["Work", "Sleep"],
    "notes": "",
    "timestamp": "2025-04-19T21:14:05.120331"
  }
]"#,
        )
        .unwrap();

        let store = open(&temp);
        assert!(store.diagnostics().is_empty());
        assert_eq!(store.history_at(7, now()).len(), 1);
        assert_eq!(store.entries()[0].mood, "🙂 Good");
    }
}
