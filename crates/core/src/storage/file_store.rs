//! File-based key-value store
//!
//! Stores each key as `<root>/<key>.json` on disk.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::kv::KeyValueStore;
use crate::{Error, Result};

/// Key-value store with one file per key under a root directory
#[derive(Debug, Clone)]
pub struct FileKvStore {
    /// Directory holding the `<key>.json` files
    root: PathBuf,
}

impl FileKvStore {
    /// Create a new FileKvStore rooted at `root`
    ///
    /// If the directory doesn't exist, it will be created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the store and its root directory up front
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let store = Self::new(root);
        tokio::fs::create_dir_all(&store.root).await?;
        Ok(store)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve the file backing `key`
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::InvalidInput(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        let path = self.path_for(key)?;

        // Ensure parent directory exists
        tokio::fs::create_dir_all(&self.root).await.map_err(|e| {
            Error::Storage(format!("Failed to create directory: {}", e))
        })?;

        tokio::fs::write(&path, value).await.map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(Error::Storage(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (FileKvStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKvStore::new(temp_dir.path().join("data"));
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let (store, _temp) = create_test_store();
        assert_eq!(store.get("tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_creates_directory_and_file() {
        let (store, _temp) = create_test_store();

        store.set("tasks", "[]".to_string()).await.unwrap();

        let path = store.root().join("tasks.json");
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_persistence_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("data");

        {
            let store = FileKvStore::open(&root).await.unwrap();
            store
                .set("categories", r#"[{"id":1,"name":"Work"}]"#.to_string())
                .await
                .unwrap();
        }

        {
            let store = FileKvStore::new(&root);
            let value = store.get("categories").await.unwrap();
            assert_eq!(value.as_deref(), Some(r#"[{"id":1,"name":"Work"}]"#));
        }
    }

    #[tokio::test]
    async fn test_remove_key() {
        let (store, _temp) = create_test_store();
        store.set("tasks", "[]".to_string()).await.unwrap();

        assert!(store.remove("tasks").await.unwrap());
        assert!(!store.remove("tasks").await.unwrap());
        assert_eq!(store.get("tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let (store, _temp) = create_test_store();

        for key in ["", "../tasks", "a/b", "tasks.json"] {
            match store.get(key).await {
                Err(Error::InvalidInput(msg)) => assert!(msg.contains("Invalid storage key")),
                other => panic!("Expected InvalidInput for {:?}, got: {:?}", key, other),
            }
        }
    }
}
