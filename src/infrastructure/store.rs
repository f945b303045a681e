//! Durable JSON resources
//!
//! A [`JsonFile`] loads a whole collection and writes it back as a unit.
//! Loading never fails: a missing file is an empty collection, and an
//! unreadable one is an empty collection plus a [`StoreWarning::CorruptState`].
//! Persisting returns its error; the record stores log it into their
//! [`Diagnostics`] and carry on.
//!
//! There is no locking. Two live stores on the same file race, and the last
//! flush wins.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Recoverable problems a store ran into
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreWarning {
    #[error("corrupt state in {path}: {reason}; continuing with an empty collection")]
    CorruptState { path: PathBuf, reason: String },

    #[error("failed to persist {path}: {reason}")]
    PersistFailed { path: PathBuf, reason: String },

    #[error("skipped {id} during retention: {reason}")]
    MalformedDate { id: String, reason: String },
}

/// Warnings collected by one store, mirrored to the tracing log
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<StoreWarning>,
}

impl Diagnostics {
    pub fn record(&mut self, warning: StoreWarning) {
        match &warning {
            StoreWarning::PersistFailed { .. } => tracing::error!("{}", warning),
            _ => tracing::warn!("{}", warning),
        }
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[StoreWarning] {
        &self.warnings
    }

    pub fn take(&mut self) -> Vec<StoreWarning> {
        std::mem::take(&mut self.warnings)
    }
}

/// A collection as read from disk
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: T,
    pub warning: Option<StoreWarning>,
}

/// A JSON document holding one whole collection
#[derive(Debug, Clone)]
pub struct JsonFile<T> {
    path: PathBuf,
    marker: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFile {
            path: path.into(),
            marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the collection; never fails
    pub fn load(&self) -> Loaded<T> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{} not found, starting empty", self.path.display());
                return Loaded {
                    records: T::default(),
                    warning: None,
                };
            }
            Err(e) => return self.corrupt(e.to_string()),
        };

        match serde_json::from_str(&contents) {
            Ok(records) => Loaded {
                records,
                warning: None,
            },
            Err(e) => self.corrupt(e.to_string()),
        }
    }

    /// Replace the resource with the full collection
    pub fn persist(&self, records: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(records)?;
        write_atomic(&self.path, &contents)?;
        tracing::debug!("flushed {}", self.path.display());
        Ok(())
    }

    /// Persist, turning a failure into a warning
    pub fn flush(&self, records: &T, diagnostics: &mut Diagnostics) {
        if let Err(e) = self.persist(records) {
            diagnostics.record(StoreWarning::PersistFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            });
        }
    }

    fn corrupt(&self, reason: String) -> Loaded<T> {
        Loaded {
            records: T::default(),
            warning: Some(StoreWarning::CorruptState {
                path: self.path.clone(),
                reason,
            }),
        }
    }
}

/// Write to a temp file in the same directory, then rename into place.
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_name = format!(
        "{}.mindcare-tmp-{}",
        path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("store.json"),
        std::process::id()
    );
    let tmp_path = path.with_file_name(tmp_name);

    fs::write(&tmp_path, content)?;

    // rename does not overwrite existing files on Windows
    #[cfg(windows)]
    {
        if path.is_file() {
            fs::remove_file(path)?;
        }
    }

    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }
    Ok(())
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SequenceState {
    next: u64,
}

/// Monotonic id counter kept in a sidecar next to its collection
/// (`sessions.json` -> `sessions.seq.json`).
#[derive(Debug)]
pub struct IdSequence {
    file: JsonFile<SequenceState>,
    next: u64,
}

impl IdSequence {
    /// Open the counter for `resource`. `derived_next` is the smallest id the
    /// loaded collection allows; the stored value wins only when larger.
    pub fn open(resource: &Path, derived_next: u64, diagnostics: &mut Diagnostics) -> Self {
        let file: JsonFile<SequenceState> = JsonFile::new(resource.with_extension("seq.json"));
        let loaded = file.load();
        if let Some(warning) = loaded.warning {
            diagnostics.record(warning);
        }

        IdSequence {
            next: loaded.records.next.max(derived_next).max(1),
            file,
        }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Hand out the next id
    pub fn allocate(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    pub fn flush(&self, diagnostics: &mut Diagnostics) {
        self.file.flush(&SequenceState { next: self.next }, diagnostics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_is_empty_without_warning() {
        let temp = TempDir::new().unwrap();
        let file: JsonFile<Vec<String>> = JsonFile::new(temp.path().join("missing.json"));

        let loaded = file.load();
        assert!(loaded.records.is_empty());
        assert!(loaded.warning.is_none());
    }

    #[test]
    fn test_load_malformed_is_empty_with_corrupt_state() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        fs::write(&path, "[1, 2,").unwrap();
        let file: JsonFile<Vec<u32>> = JsonFile::new(&path);

        let loaded = file.load();
        assert!(loaded.records.is_empty());
        match loaded.warning {
            Some(StoreWarning::CorruptState { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected CorruptState, got {:?}", other),
        }
    }

    #[test]
    fn test_load_wrong_shape_is_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("shape.json");
        fs::write(&path, "{\"a\": 1}").unwrap();
        let file: JsonFile<Vec<u32>> = JsonFile::new(&path);

        assert!(file.load().warning.is_some());
    }

    #[test]
    fn test_persist_then_load_round_trips() {
        let temp = TempDir::new().unwrap();
        let file: JsonFile<BTreeMap<String, u32>> = JsonFile::new(temp.path().join("map.json"));

        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        file.persist(&map).unwrap();

        assert_eq!(file.load().records, map);
    }

    #[test]
    fn test_persist_of_loaded_is_noop() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("list.json");
        let file: JsonFile<Vec<u32>> = JsonFile::new(&path);
        file.persist(&vec![3, 1, 2]).unwrap();
        let before = fs::read_to_string(&path).unwrap();

        file.persist(&file.load().records).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_persist_uses_two_space_indent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("list.json");
        let file: JsonFile<Vec<u32>> = JsonFile::new(&path);
        file.persist(&vec![1]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[\n  1\n]");
    }

    #[test]
    fn test_persist_leaves_no_temp_files() {
        let temp = TempDir::new().unwrap();
        let file: JsonFile<Vec<u32>> = JsonFile::new(temp.path().join("list.json"));
        file.persist(&vec![1]).unwrap();
        file.persist(&vec![1, 2]).unwrap();

        let names: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_flush_failure_is_recorded_not_returned() {
        let temp = TempDir::new().unwrap();
        // A directory where the file should be makes the rename fail
        let path = temp.path().join("taken.json");
        fs::create_dir(&path).unwrap();
        let file: JsonFile<Vec<u32>> = JsonFile::new(&path);
        let mut diagnostics = Diagnostics::default();

        file.flush(&vec![1], &mut diagnostics);

        assert_eq!(diagnostics.warnings().len(), 1);
        assert!(matches!(
            diagnostics.warnings()[0],
            StoreWarning::PersistFailed { .. }
        ));
        assert_eq!(diagnostics.take().len(), 1);
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn test_sequence_uses_larger_of_stored_and_derived() {
        let temp = TempDir::new().unwrap();
        let resource = temp.path().join("journal_entries.json");
        let mut diagnostics = Diagnostics::default();

        let mut sequence = IdSequence::open(&resource, 3, &mut diagnostics);
        assert_eq!(sequence.allocate(), 3);
        assert_eq!(sequence.allocate(), 4);
        sequence.flush(&mut diagnostics);
        assert!(temp.path().join("journal_entries.seq.json").exists());

        // Collection shrank, stored counter keeps ids moving forward
        let sequence = IdSequence::open(&resource, 1, &mut diagnostics);
        assert_eq!(sequence.peek(), 5);

        // Collection grew behind the counter's back
        let sequence = IdSequence::open(&resource, 9, &mut diagnostics);
        assert_eq!(sequence.peek(), 9);
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn test_sequence_starts_at_one() {
        let temp = TempDir::new().unwrap();
        let mut diagnostics = Diagnostics::default();
        let sequence = IdSequence::open(&temp.path().join("x.json"), 0, &mut diagnostics);
        assert_eq!(sequence.peek(), 1);
    }
}
