use super::KeyValueStore;
use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-process store backed by a hash map.
///
/// The lock exists so the store can be shared between call sites, not to
/// coordinate writers: entries are fully derived and last-writer-wins is
/// acceptable for them.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            reject_writes: false,
        }
    }

    /// Store that rejects every write, simulating an exhausted backend.
    /// Used to exercise best-effort persistence paths.
    pub fn rejecting_writes() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            reject_writes: true,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError::WriteRejected {
                key: key.to_string(),
                reason: "store capacity exceeded".to_string(),
            });
        }

        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::WriteRejected {
                key: key.to_string(),
                reason: "store lock poisoned".to_string(),
            })?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::WriteRejected {
                key: key.to_string(),
                reason: "store lock poisoned".to_string(),
            })?;
        entries.remove(key);
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
