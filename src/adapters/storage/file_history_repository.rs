//! File-based Document History Adapter
//!
//! Keeps each client's history as one YAML list on disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::document::DocumentHistoryEntry;
use crate::domain::foundation::ClientId;
use crate::ports::{DocumentHistoryRepository, StorageError};

use super::atomic::{read_yaml, write_yaml};

/// File-based document history.
///
/// Layout: `{base_path}/clients/{client_id}/history.yaml`. Appends are a
/// read-modify-write of the whole list under an in-process lock, finished
/// by an atomic rename.
#[derive(Debug, Clone)]
pub struct FileDocumentHistory {
    base_path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileDocumentHistory {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    fn history_path(&self, client_id: &ClientId) -> PathBuf {
        self.base_path
            .join("clients")
            .join(client_id.as_str())
            .join("history.yaml")
    }
}

#[async_trait]
impl DocumentHistoryRepository for FileDocumentHistory {
    async fn list(&self, client_id: &ClientId) -> Result<Vec<DocumentHistoryEntry>, StorageError> {
        Ok(read_yaml(&self.history_path(client_id))
            .await?
            .unwrap_or_default())
    }

    async fn append(
        &self,
        client_id: &ClientId,
        entry: DocumentHistoryEntry,
    ) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let path = self.history_path(client_id);

        let mut entries: Vec<DocumentHistoryEntry> = read_yaml(&path).await?.unwrap_or_default();
        entries.push(entry);
        write_yaml(&path, &entries).await
    }
}
