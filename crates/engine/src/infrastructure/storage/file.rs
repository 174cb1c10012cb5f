//! File-backed storage adapter.
//!
//! Keeps every key in one JSON object file, e.g. on Linux
//! `~/.config/restolist/storage.json`. Writes go to a sibling temp file
//! that is then renamed over the original, so readers never see a
//! half-written file.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{StorageError, StoragePort};

/// File storage with an in-memory cache of the file's contents.
///
/// The cache only advances after the file write succeeds.
pub struct FileStorage {
    path: PathBuf,
    state: RwLock<FileState>,
}

struct FileState {
    entries: HashMap<String, String>,
    /// Set when the file existed but couldn't be read or parsed at open.
    /// Cleared by the next successful write.
    unreadable: Option<String>,
}

impl FileStorage {
    /// Open the storage file, loading existing data if present.
    ///
    /// Never fails: a missing file is an empty store, and an unreadable one
    /// is logged and reported by `load` until it gets overwritten.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();

        let (entries, unreadable) = match fs::read_to_string(&path).await {
            Ok(data) if data.trim().is_empty() => (HashMap::new(), None),
            Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                Ok(map) => (map, None),
                Err(e) => {
                    tracing::warn!(path = ?path, error = %e, "Failed to parse storage file");
                    (HashMap::new(), Some(format!("corrupt storage file: {}", e)))
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => (HashMap::new(), None),
            Err(e) => {
                tracing::warn!(path = ?path, error = %e, "Failed to read storage file");
                (HashMap::new(), Some(format!("unreadable storage file: {}", e)))
            }
        };

        tracing::debug!(path = ?path, keys = entries.len(), "File storage initialized");

        Self {
            path,
            state: RwLock::new(FileState {
                entries,
                unreadable,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `entries` to disk, replacing the whole file.
    async fn persist(&self, key: &str, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    StorageError::write(key, format!("cannot create {:?}: {}", parent, e))
                })?;
            }
        }

        let data = serde_json::to_string_pretty(entries).map_err(StorageError::serialization)?;

        let tmp_path = temp_path_for(&self.path);
        fs::write(&tmp_path, data)
            .await
            .map_err(|e| StorageError::write(key, describe_write_error(&tmp_path, &e)))?;

        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(StorageError::write(key, describe_write_error(&self.path, &e)));
        }

        Ok(())
    }

    /// Apply `change` to a copy of the entries, persist it, then adopt it.
    async fn update<F>(&self, key: &str, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut HashMap<String, String>),
    {
        let mut state = self.state.write().await;
        let mut next = state.entries.clone();
        change(&mut next);

        self.persist(key, &next).await?;

        state.entries = next;
        state.unreadable = None;
        Ok(())
    }
}

#[async_trait]
impl StoragePort for FileStorage {
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let state = self.state.read().await;
        if let Some(reason) = &state.unreadable {
            return Err(StorageError::read(key, reason));
        }
        Ok(state.entries.get(key).cloned())
    }

    async fn save(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(key, |entries| {
            entries.insert(key.to_string(), value.to_string());
        })
        .await
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "storage.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}

fn describe_write_error(path: &Path, e: &std::io::Error) -> String {
    match e.kind() {
        ErrorKind::PermissionDenied => format!("permission denied writing {:?}", path),
        ErrorKind::NotFound => format!("parent directory of {:?} does not exist", path),
        _ => format!("failed to write {:?}: {}", path, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn storage_path(dir: &TempDir) -> PathBuf {
        dir.path().join("restolist").join("storage.json")
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::open(storage_path(&dir)).await;

        assert_eq!(storage.load("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_creates_parent_dirs_and_persists() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);

        let storage = FileStorage::open(&path).await;
        storage.save("k", "v").await.unwrap();
        assert!(path.exists());

        let reopened = FileStorage::open(&path).await;
        assert_eq!(reopened.load("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn keeps_other_keys() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);

        let storage = FileStorage::open(&path).await;
        storage.save("a", "1").await.unwrap();
        storage.save("b", "2").await.unwrap();
        storage.save("a", "3").await.unwrap();

        let reopened = FileStorage::open(&path).await;
        assert_eq!(reopened.load("a").await.unwrap().as_deref(), Some("3"));
        assert_eq!(reopened.load("b").await.unwrap().as_deref(), Some("2"));
    }

    #[tokio::test]
    async fn leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let path = storage_path(&dir);

        let storage = FileStorage::open(&path).await;
        storage.save("k", "v").await.unwrap();

        assert!(!temp_path_for(&path).exists());
    }

    #[tokio::test]
    async fn corrupt_file_reports_read_error_until_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let storage = FileStorage::open(&path).await;
        let err = storage.load("k").await.unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));

        storage.save("k", "v").await.unwrap();
        assert_eq!(storage.load("k").await.unwrap().as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn failed_write_keeps_previous_value() {
        let dir = TempDir::new().unwrap();
        // The parent "directory" is a regular file, so every write fails.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        let storage = FileStorage::open(blocker.join("storage.json")).await;

        let err = storage.save("k", "v").await.unwrap_err();
        assert!(err.is_write());
        assert_eq!(storage.load("k").await.unwrap(), None);
    }
}
