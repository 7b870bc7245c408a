//! Saved-outfit persistence over a narrow key-value seam.
//!
//! The collection lives under one namespace key as a JSON array of
//! [`PrimaryOutfit`] records, identified by title equality. Read and write
//! failures are logged and recovered here; they never reach the caller.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;

use crate::models::PrimaryOutfit;

/// Fixed namespace key for the saved collection.
pub const SAVED_OUTFITS_KEY: &str = "fashion_mate_saved_outfits";

#[derive(Debug, Error)]
pub enum StoreIoError {
    #[error("read failed: {0}")]
    Read(String),
    #[error("write failed: {0}")]
    Write(String),
}

/// The store's sole external dependency: a string key-value interface,
/// swappable for a file, embedded database, or remote backend.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreIoError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreIoError>;
}

/// File-backed store: one file per key under a base directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreIoError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreIoError::Read(err.to_string())),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreIoError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|err| StoreIoError::Write(err.to_string()))?;
        std::fs::write(self.path_for(key), value)
            .map_err(|err| StoreIoError::Write(err.to_string()))
    }
}

/// In-memory store for tests and non-persistent targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreIoError> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreIoError> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Durable set of saved outfits, loaded lazily on every check or mutation.
pub struct SavedOutfits<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SavedOutfits<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Whether any saved record carries this title.
    pub fn is_saved(&self, title: &str) -> bool {
        self.load().iter().any(|outfit| outfit.title == title)
    }

    /// Save or unsave by title. Removal filters out every record with the
    /// title, so pre-existing duplicates are cleared in one toggle.
    ///
    /// Returns the membership state that actually holds after the attempt:
    /// when the write fails, the previous state is reported rather than an
    /// optimistic flip.
    pub fn toggle_save(&self, outfit: &PrimaryOutfit) -> bool {
        let mut outfits = self.load();
        let was_saved = outfits.iter().any(|saved| saved.title == outfit.title);
        if was_saved {
            outfits.retain(|saved| saved.title != outfit.title);
        } else {
            outfits.push(outfit.clone());
        }
        if self.persist(&outfits) { !was_saved } else { was_saved }
    }

    /// Remove every record with this title. Returns whether anything was
    /// removed and persisted.
    pub fn remove(&self, title: &str) -> bool {
        let mut outfits = self.load();
        let before = outfits.len();
        outfits.retain(|saved| saved.title != title);
        if outfits.len() == before {
            return false;
        }
        self.persist(&outfits)
    }

    /// The full saved collection, in insertion order.
    pub fn saved(&self) -> Vec<PrimaryOutfit> {
        self.load()
    }

    /// Missing key and malformed content both read as an empty collection.
    fn load(&self) -> Vec<PrimaryOutfit> {
        let raw = match self.store.get(SAVED_OUTFITS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "failed to read saved outfits, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(outfits) => outfits,
            Err(err) => {
                tracing::warn!(error = %err, "saved outfits payload is malformed, treating as empty");
                Vec::new()
            }
        }
    }

    fn persist(&self, outfits: &[PrimaryOutfit]) -> bool {
        let serialized = match serde_json::to_string(outfits) {
            Ok(serialized) => serialized,
            Err(err) => {
                tracing::error!(error = %err, "failed to serialize saved outfits");
                return false;
            }
        };
        match self.store.set(SAVED_OUTFITS_KEY, &serialized) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "failed to write saved outfits");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outfit(title: &str) -> PrimaryOutfit {
        PrimaryOutfit {
            title: title.to_string(),
            top: "Silk blouse".to_string(),
            bottom: "Tailored trousers".to_string(),
            footwear: "Leather flats".to_string(),
            accessories: vec!["Gold necklace".to_string()],
            reasoning: "Understated and polished.".to_string(),
        }
    }

    #[test]
    fn save_then_unsave_round_trip() {
        let saved = SavedOutfits::new(MemoryStore::new());
        assert!(!saved.is_saved("Gallery Chic"));

        assert!(saved.toggle_save(&outfit("Gallery Chic")));
        assert!(saved.is_saved("Gallery Chic"));

        assert!(!saved.toggle_save(&outfit("Gallery Chic")));
        assert!(!saved.is_saved("Gallery Chic"));
        assert!(saved.saved().is_empty());
    }

    #[test]
    fn corrupted_value_reads_as_empty_and_recovers() {
        let store = MemoryStore::new();
        store.set(SAVED_OUTFITS_KEY, "{not json").unwrap();
        let saved = SavedOutfits::new(store);

        assert!(!saved.is_saved("anything"));
        assert!(saved.toggle_save(&outfit("Gallery Chic")));
        assert_eq!(saved.saved().len(), 1);
        assert_eq!(saved.saved()[0].title, "Gallery Chic");
    }

    #[test]
    fn toggle_removes_all_duplicate_titles() {
        let store = MemoryStore::new();
        let duplicates = vec![outfit("Gallery Chic"), outfit("Gallery Chic")];
        store
            .set(SAVED_OUTFITS_KEY, &serde_json::to_string(&duplicates).unwrap())
            .unwrap();
        let saved = SavedOutfits::new(store);

        assert!(!saved.toggle_save(&outfit("Gallery Chic")));
        assert!(saved.saved().is_empty());
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let saved = SavedOutfits::new(MemoryStore::new());
        assert!(!saved.remove("Gallery Chic"));
        saved.toggle_save(&outfit("Gallery Chic"));
        assert!(saved.remove("Gallery Chic"));
        assert!(!saved.is_saved("Gallery Chic"));
    }

    struct FailingWrites {
        inner: MemoryStore,
    }

    impl KeyValueStore for FailingWrites {
        fn get(&self, key: &str) -> Result<Option<String>, StoreIoError> {
            self.inner.get(key)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreIoError> {
            Err(StoreIoError::Write("disk full".to_string()))
        }
    }

    #[test]
    fn failed_write_does_not_flip_reported_state() {
        let saved = SavedOutfits::new(FailingWrites {
            inner: MemoryStore::new(),
        });
        // The save did not land, so the reported state stays "not saved".
        assert!(!saved.toggle_save(&outfit("Gallery Chic")));
        assert!(!saved.is_saved("Gallery Chic"));
    }
}
