use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

pub const DEFAULT_MAX_HISTORY: usize = 50;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("history file exists but could not be read as a keyword list: {0}")]
    Corrupt(String),
    #[error("failed to persist history: {0}")]
    Persist(String),
}

/// Snapshot handed back after a mutation. The in-memory sequence always
/// advances; a failed write is reported alongside it, never rolled back.
#[derive(Debug)]
pub struct RecordOutcome {
    pub entries: Vec<String>,
    pub persist_error: Option<HistoryError>,
}

/// Owns the persisted search history: a most-recent-first, de-duplicated,
/// capacity-bounded list of keywords, written back after every mutation.
#[derive(Debug)]
pub struct HistoryStore {
    entries: Mutex<Vec<String>>,
    path: PathBuf,
    max: usize,
}

impl HistoryStore {
    /// Load persisted history from `path`. A missing file means a fresh
    /// install and yields an empty history; a file that exists but does not
    /// deserialize is reported as `Corrupt` so the caller can decide to
    /// start empty.
    pub fn load(path: impl Into<PathBuf>, max: usize) -> Result<Self, HistoryError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .map_err(|e| HistoryError::Corrupt(e.to_string()))?;
            let mut list: Vec<String> = serde_json::from_str(&content)
                .map_err(|e| HistoryError::Corrupt(e.to_string()))?;
            list.truncate(max);
            list
        } else {
            Vec::new()
        };

        Ok(HistoryStore {
            entries: Mutex::new(entries),
            path,
            max,
        })
    }

    /// Empty store at `path`, ignoring whatever is on disk. Used to recover
    /// from a corrupt file; the old content is overwritten on the next record.
    pub fn empty(path: impl Into<PathBuf>, max: usize) -> Self {
        HistoryStore {
            entries: Mutex::new(Vec::new()),
            path: path.into(),
            max,
        }
    }

    /// Move `keyword` to the front (dropping any earlier occurrence), enforce
    /// the capacity bound, and persist. A write failure is non-fatal: the
    /// session keeps the updated list and the error rides along in the
    /// outcome for the UI to surface.
    pub fn record(&self, keyword: &str) -> RecordOutcome {
        let snapshot = {
            let mut entries = self.entries.lock().unwrap();
            entries.retain(|k| k != keyword);
            entries.insert(0, keyword.to_string());
            entries.truncate(self.max);
            entries.clone()
        };

        let persist_error = self.persist(&snapshot).err();
        if let Some(ref e) = persist_error {
            log::warn!("[History] {}", e);
        }

        RecordOutcome {
            entries: snapshot,
            persist_error,
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    pub fn get(&self, index: usize) -> Option<String> {
        self.entries.lock().unwrap().get(index).cloned()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Atomic write: tmp + rename, so a crash mid-write leaves the previous
    // valid file intact.
    fn persist(&self, entries: &[String]) -> Result<(), HistoryError> {
        let tmp_path = self.path.with_extension("json.tmp");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| HistoryError::Persist(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| HistoryError::Persist(e.to_string()))?;
        fs::write(&tmp_path, json).map_err(|e| HistoryError::Persist(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| HistoryError::Persist(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> HistoryStore {
        HistoryStore::load(dir.path().join("search_history.json"), DEFAULT_MAX_HISTORY).unwrap()
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("search_history.json");
        fs::write(&path, "{ definitely not a list").unwrap();

        let err = HistoryStore::load(&path, DEFAULT_MAX_HISTORY).unwrap_err();
        assert!(matches!(err, HistoryError::Corrupt(_)));

        // Recovery path: start empty over the same file.
        let store = HistoryStore::empty(&path, DEFAULT_MAX_HISTORY);
        assert!(store.entries().is_empty());
        let outcome = store.record("fresh");
        assert!(outcome.persist_error.is_none());
        assert_eq!(
            HistoryStore::load(&path, DEFAULT_MAX_HISTORY).unwrap().entries(),
            vec!["fresh"]
        );
    }

    #[test]
    fn record_moves_duplicates_to_front() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.record("a");
        store.record("b");
        let outcome = store.record("a");

        assert_eq!(outcome.entries, vec!["a", "b"]);
    }

    #[test]
    fn repeat_record_keeps_single_entry_at_front() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        store.record("cats");
        let outcome = store.record("cats");

        assert_eq!(outcome.entries, vec!["cats"]);
    }

    #[test]
    fn capacity_bound_evicts_oldest() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        for i in 0..51 {
            store.record(&format!("keyword-{}", i));
        }

        let entries = store.entries();
        assert_eq!(entries.len(), 50);
        assert_eq!(entries[0], "keyword-50");
        // keyword-0 was the oldest and must be gone.
        assert!(!entries.contains(&"keyword-0".to_string()));
        assert!(entries.contains(&"keyword-1".to_string()));
    }

    #[test]
    fn round_trips_across_restart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("search_history.json");

        let store = HistoryStore::load(&path, DEFAULT_MAX_HISTORY).unwrap();
        store.record("first");
        store.record("second");

        let reloaded = HistoryStore::load(&path, DEFAULT_MAX_HISTORY).unwrap();
        assert_eq!(reloaded.entries(), vec!["second", "first"]);
    }

    #[test]
    fn persist_failure_keeps_memory_advancing() {
        let dir = tempdir().unwrap();
        // A directory at the target path makes the rename fail.
        let path = dir.path().join("search_history.json");
        fs::create_dir_all(&path).unwrap();

        let store = HistoryStore::empty(&path, DEFAULT_MAX_HISTORY);
        let outcome = store.record("still here");

        assert!(matches!(outcome.persist_error, Some(HistoryError::Persist(_))));
        assert_eq!(store.entries(), vec!["still here"]);
    }

    #[test]
    fn oversized_file_is_clamped_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("search_history.json");
        let big: Vec<String> = (0..80).map(|i| format!("k{}", i)).collect();
        fs::write(&path, serde_json::to_string(&big).unwrap()).unwrap();

        let store = HistoryStore::load(&path, DEFAULT_MAX_HISTORY).unwrap();
        assert_eq!(store.entries().len(), DEFAULT_MAX_HISTORY);
        assert_eq!(store.entries()[0], "k0");
    }
}
