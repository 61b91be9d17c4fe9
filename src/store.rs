//! Snapshot stores.
//!
//! A store keeps one [`CharacterState`] per key. Keys are case-insensitive:
//! `"Briv.json"` and `"briv.json"` address the same snapshot. Mutating
//! methods take `&mut self`, so a store serializes access to its keys.

use crate::character::CharacterState;
use crate::error::VitalsError;
use std::collections::HashMap;
use std::path::PathBuf;

pub(crate) fn normalize_key(key: &str) -> String {
    key.to_lowercase()
}

/// Keyed snapshot persistence.
pub trait SnapshotStore {
    /// Fetch the snapshot for `key`, if any.
    fn get(&self, key: &str) -> Result<Option<CharacterState>, VitalsError>;

    /// Store `state` under `key`, replacing any previous snapshot.
    fn put(&mut self, key: &str, state: &CharacterState) -> Result<(), VitalsError>;

    /// Remove the snapshot for `key`. Deleting a missing key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), VitalsError>;
}

/// In-memory store.
///
/// # Examples
///
/// ```rust
/// use vitals::CharacterState;
/// use vitals::store::{MemoryStore, SnapshotStore};
///
/// let mut store = MemoryStore::new();
/// store.put("Briv.json", &CharacterState::new("Briv", 5, 25)).unwrap();
///
/// assert!(store.get("briv.json").unwrap().is_some());
/// store.delete("BRIV.JSON").unwrap();
/// assert!(store.get("briv.json").unwrap().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshots: HashMap<String, CharacterState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<CharacterState>, VitalsError> {
        Ok(self.snapshots.get(&normalize_key(key)).cloned())
    }

    fn put(&mut self, key: &str, state: &CharacterState) -> Result<(), VitalsError> {
        self.snapshots.insert(normalize_key(key), state.clone());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), VitalsError> {
        self.snapshots.remove(&normalize_key(key));
        Ok(())
    }
}

/// Store that keeps one pretty-printed JSON file per key in a directory.
///
/// File names are the lowercased key with `%` and path separators
/// percent-encoded, plus a `.snapshot.json` suffix. Distinct keys never share
/// a file and no key leaves the directory.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Use `dir` for snapshots, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, VitalsError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let mut file = String::with_capacity(key.len());
        for c in normalize_key(key).chars() {
            match c {
                '%' => file.push_str("%25"),
                '/' => file.push_str("%2F"),
                '\\' => file.push_str("%5C"),
                c => file.push(c),
            }
        }
        self.dir.join(format!("{file}.snapshot.json"))
    }
}

impl SnapshotStore for JsonDirStore {
    fn get(&self, key: &str) -> Result<Option<CharacterState>, VitalsError> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&mut self, key: &str, state: &CharacterState) -> Result<(), VitalsError> {
        std::fs::write(self.path_for(key), state.to_json_string()?)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), VitalsError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_keys_are_case_insensitive() {
        let mut store = MemoryStore::new();
        store.put("BRIV", &CharacterState::new("Briv", 1, 10)).unwrap();
        store.put("briv", &CharacterState::new("Briv", 2, 12)).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Briv").unwrap().unwrap().level, 2);
    }

    #[test]
    fn test_memory_store_delete_missing_is_ok() {
        let mut store = MemoryStore::new();
        store.delete("nobody").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_json_dir_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonDirStore::open(dir.path().join("snapshots")).unwrap();
        let mut state = CharacterState::new("Briv", 5, 25);
        state.temp_hit_points = 4;

        store.put("Briv.json", &state).unwrap();
        assert_eq!(store.get("briv.json").unwrap(), Some(state));

        store.delete("briv.JSON").unwrap();
        assert_eq!(store.get("briv.json").unwrap(), None);
        store.delete("briv.json").unwrap();
    }

    #[test]
    fn test_json_dir_store_keeps_keys_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonDirStore::open(dir.path()).unwrap();
        for key in ["../escape", "..\\escape", "a/../../b"] {
            assert_eq!(store.path_for(key).parent(), Some(dir.path()), "{key}");
        }
    }

    #[test]
    fn test_json_dir_store_separator_keys_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonDirStore::open(dir.path()).unwrap();
        let keys = ["a/b", "a_b", "a\\b", "a%2Fb"];
        for (level, key) in (1..).zip(keys) {
            store.put(key, &CharacterState::new("Briv", level, 10)).unwrap();
        }
        for (level, key) in (1..).zip(keys) {
            assert_eq!(store.get(key).unwrap().unwrap().level, level, "{key}");
        }

        store.delete("a/b").unwrap();
        assert_eq!(store.get("a/b").unwrap(), None);
        assert_eq!(store.get("a_b").unwrap().unwrap().level, 2);
    }
}
