//! ListDocumentHistoryHandler - a client's generated documents.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::document::DocumentHistoryEntry;
use crate::domain::foundation::{ClientId, ValidationError};
use crate::ports::{DocumentHistoryRepository, StorageError};

/// Query for a client's history, optionally narrowed to one base title.
#[derive(Debug, Clone, Default)]
pub struct ListDocumentHistoryQuery {
    pub client_id: String,
    /// Keep only entries whose name minus `(vN)` equals this.
    pub base_title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListDocumentHistoryError {
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub struct ListDocumentHistoryHandler {
    history: Arc<dyn DocumentHistoryRepository>,
}

impl ListDocumentHistoryHandler {
    pub fn new(history: Arc<dyn DocumentHistoryRepository>) -> Self {
        Self { history }
    }

    /// Entries newest version first.
    pub async fn handle(
        &self,
        query: ListDocumentHistoryQuery,
    ) -> Result<Vec<DocumentHistoryEntry>, ListDocumentHistoryError> {
        let client_id = ClientId::new(query.client_id)?;
        let base_title = query
            .base_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let mut entries: Vec<_> = self
            .history
            .list(&client_id)
            .await?
            .into_iter()
            .filter(|e| base_title.map_or(true, |title| e.base_title() == title))
            .collect();
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.version.cmp(&a.version))
        });
        Ok(entries)
    }
}
