//! Local key-value store implementations.
//!
//! Two implementations of the injected [`KeyValueStore`] capability: a plain
//! in-memory map, and a single-file JSON store that plays the role browser
//! local storage plays for the web client (feedback marks, identity,
//! onboarding flag surviving a restart).

use anyhow::{Context, Result};
use sage_core::kv::KeyValueStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// In-memory key-value store for tests and ephemeral sessions.
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
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// File-backed key-value store: one JSON object, written through on every
/// mutation.
///
/// Reads are served from the in-memory cache loaded at construction; only
/// mutations touch the file.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Opens the store at `path`, loading existing entries if the file is
    /// present and starting empty otherwise.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read store file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("store file {} is not a JSON object", path.display()))?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<()> {
        let raw = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, raw)
            .with_context(|| format!("failed to write store file {}", self.path.display()))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        self.persist(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }

    #[test]
    fn test_json_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.json");

        {
            let store = JsonFileStore::open(&path).unwrap();
            store.set("userId", "user-1").unwrap();
            store.set("showOnboarding", "false").unwrap();
        }

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("userId").as_deref(), Some("user-1"));
        assert_eq!(store.get("showOnboarding").as_deref(), Some("false"));
    }

    #[test]
    fn test_json_store_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("local.json");

        let store = JsonFileStore::open(&path).unwrap();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(reopened.get("k"), None);
    }
}
