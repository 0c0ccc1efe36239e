//! Document History Port - per-client version records.

use async_trait::async_trait;

use crate::domain::document::DocumentHistoryEntry;
use crate::domain::foundation::ClientId;

use super::StorageError;

/// Port for the per-client list of generated documents.
///
/// # Contract
///
/// - `list` returns entries in append order; an unknown client has an
///   empty history, not an error
/// - `append` adds exactly one entry atomically; readers never observe a
///   partial entry
#[async_trait]
pub trait DocumentHistoryRepository: Send + Sync {
    async fn list(&self, client_id: &ClientId) -> Result<Vec<DocumentHistoryEntry>, StorageError>;

    async fn append(
        &self,
        client_id: &ClientId,
        entry: DocumentHistoryEntry,
    ) -> Result<(), StorageError>;
}
