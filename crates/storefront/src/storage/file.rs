//! File-backed storage backend.
//!
//! The local-storage analog for a native process: each key maps to one file
//! under a root directory. Writes go through a sibling temp file followed
//! by a rename, so a crashed write leaves the old slot intact instead of a
//! half-written one.

use std::fs;
use std::path::{Path, PathBuf};

use super::{StorageBackend, StorageError};

/// A slot store where each key is a file under a root directory.
#[derive(Debug)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a file store rooted at `root`, creating the directory if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the root directory cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Keys become file names directly, so reject anything that could
    /// escape the root directory.
    fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key == "."
            || key == ".."
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        let tmp = temp_sibling(&path);
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_root() -> PathBuf {
        std::env::temp_dir().join(format!("cartwheel-storage-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_read_missing_slot_is_none() {
        let storage = FileStorage::new(temp_root()).unwrap();
        assert_eq!(storage.read("cart").unwrap(), None);
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let storage = FileStorage::new(temp_root()).unwrap();
        storage.write("cart", r#"[{"id":1}]"#).unwrap();
        assert_eq!(
            storage.read("cart").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn test_remove_deletes_slot_file() {
        let root = temp_root();
        let storage = FileStorage::new(&root).unwrap();
        storage.write("cart", "[]").unwrap();
        storage.remove("cart").unwrap();
        assert_eq!(storage.read("cart").unwrap(), None);
        assert!(!root.join("cart").exists());
        // Removing again is fine
        storage.remove("cart").unwrap();
    }

    #[test]
    fn test_rejects_path_escaping_keys() {
        let storage = FileStorage::new(temp_root()).unwrap();
        for key in ["", "..", "a/b", "a\\b"] {
            assert!(
                matches!(storage.read(key), Err(StorageError::InvalidKey(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_persists_across_instances() {
        let root = temp_root();
        {
            let storage = FileStorage::new(&root).unwrap();
            storage.write("cart", "persisted").unwrap();
        }
        let storage = FileStorage::new(&root).unwrap();
        assert_eq!(storage.read("cart").unwrap().as_deref(), Some("persisted"));
    }
}
