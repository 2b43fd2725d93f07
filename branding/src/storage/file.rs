use super::KeyValueStore;
use crate::error::StoreError;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable store keeping one file per key under a root directory.
///
/// Keys are sanitized to file-safe names before hitting the filesystem, so
/// any key the cache produces maps to a valid entry path. The root directory
/// is created lazily on the first write.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Default store root under the platform data directory,
    /// e.g. `~/.local/share/tenantry/cache` on Linux.
    pub fn default_root() -> Option<PathBuf> {
        dirs::data_dir().map(|mut path| {
            path.push("tenantry");
            path.push("cache");
            path
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Map a key to a file-safe name. Alphanumerics, hyphens and underscores
/// pass through; everything else collapses to an underscore.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.entry_path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(|source| StoreError::CreateDir {
                path: self.root.clone(),
                source,
            })?;
        }

        fs::write(self.entry_path(key), value).map_err(|source| StoreError::WriteEntry {
            key: key.to_string(),
            source,
        })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::RemoveEntry {
                key: key.to_string(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_none, assert_ok, assert_some_eq};

    #[test]
    fn test_round_trip_creates_root() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path().join("nested").join("cache");
        let store = FileStore::new(&root);
        assert!(!root.exists());

        assert_ok!(store.set("tenant-theme-t1", "{}"));
        assert!(root.exists());
        assert_some_eq!(store.get("tenant-theme-t1"), "{}".to_string());
    }

    #[test]
    fn test_remove_is_scoped_to_key() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());

        assert_ok!(store.set("a", "1"));
        assert_ok!(store.set("b", "2"));
        assert_ok!(store.remove("a"));
        assert_none!(store.get("a"));
        assert_some_eq!(store.get("b"), "2".to_string());
    }

    #[test]
    fn test_remove_absent_key_is_ok() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path());
        assert_ok!(store.remove("missing"));
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("tenant-theme-t1"), "tenant-theme-t1");
        assert_eq!(sanitize_key("../escape"), "___escape");
        assert_eq!(sanitize_key("a b/c"), "a_b_c");
    }
}
