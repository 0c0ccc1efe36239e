//! Shared filesystem helpers for the file-backed adapters.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::ports::StorageError;

/// Writes `bytes` to `path` via a sibling `.tmp` file, fsync and rename,
/// so readers see either the old content or the new one.
pub(crate) async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).await.map_err(|e| {
            StorageError::io(format!("Failed to create directory {}: {}", dir.display(), e))
        })?;
    }

    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let mut file = fs::File::create(temp_path).await.map_err(|e| {
        StorageError::io(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    file.write_all(bytes).await.map_err(|e| {
        StorageError::io(format!(
            "Failed to write to temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;
    file.sync_all().await.map_err(|e| {
        StorageError::io(format!(
            "Failed to sync temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    fs::rename(temp_path, path).await.map_err(|e| {
        StorageError::io(format!(
            "Failed to rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        ))
    })
}

/// Reads a file, mapping io errors onto [`StorageError`] with the path.
pub(crate) async fn read_bytes(path: &Path) -> Result<Vec<u8>, StorageError> {
    fs::read(path).await.map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => StorageError::not_found(path.display().to_string()),
        std::io::ErrorKind::PermissionDenied => {
            StorageError::permission_denied(path.display().to_string())
        }
        _ => StorageError::io(format!("Failed to read {}: {}", path.display(), e)),
    })
}

/// Loads a YAML record; a missing file is `Ok(None)`.
pub(crate) async fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StorageError> {
    match read_bytes(path).await {
        Ok(bytes) => Ok(Some(serde_yaml::from_slice(&bytes)?)),
        Err(StorageError::NotFound { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Serializes a record to YAML and writes it atomically.
pub(crate) async fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<(), StorageError> {
    let yaml = serde_yaml::to_string(value)?;
    write_atomic(path, yaml.as_bytes()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn write_atomic_creates_parent_dirs_and_leaves_no_temp() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a/b/record.yaml");

        write_atomic(&path, b"hello").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"hello");
        assert!(!temp.path().join("a/b/record.yaml.tmp").exists());
    }

    #[tokio::test]
    async fn write_atomic_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("record");

        write_atomic(&path, b"old").await.unwrap();
        write_atomic(&path, b"new").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn read_yaml_missing_file_is_none() {
        let temp = TempDir::new().unwrap();

        let loaded: Option<Vec<u32>> = read_yaml(&temp.path().join("nope.yaml")).await.unwrap();

        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn read_yaml_rejects_corrupt_record() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yaml");
        std::fs::write(&path, "{not: [closed").unwrap();

        let result: Result<Option<Vec<u32>>, _> = read_yaml(&path).await;

        assert!(matches!(result, Err(StorageError::Serialization { .. })));
    }

    #[tokio::test]
    async fn yaml_round_trips_through_disk() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nums.yaml");

        write_yaml(&path, &vec![1u32, 2, 3]).await.unwrap();
        let loaded: Option<Vec<u32>> = read_yaml(&path).await.unwrap();

        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }
}
