//! Request/response DTOs for document endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::document::{GenerateDocumentCommand, GenerateDocumentResult};
use crate::domain::document::{DocumentHistoryEntry, DocumentKind, SectionSpec};

/// Body of `POST /api/documents/generate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDocumentRequest {
    pub client_id: String,
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

impl From<GenerateDocumentRequest> for GenerateDocumentCommand {
    fn from(req: GenerateDocumentRequest) -> Self {
        Self {
            client_id: req.client_id,
            user_id: req.user_id,
            title: req.title,
            sections: req.sections,
            primary_color: req.primary_color,
            secondary_color: req.secondary_color,
            logo: req.logo,
        }
    }
}

/// Generation outcome; always carries `success`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum GenerateDocumentResponse {
    #[serde(rename_all = "camelCase")]
    Success {
        success: bool,
        download_ref: String,
        filename: String,
        version: u32,
        message: String,
    },
    Failure {
        success: bool,
        error: String,
    },
}

impl GenerateDocumentResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        GenerateDocumentResponse::Failure {
            success: false,
            error: error.into(),
        }
    }
}

impl From<GenerateDocumentResult> for GenerateDocumentResponse {
    fn from(result: GenerateDocumentResult) -> Self {
        GenerateDocumentResponse::Success {
            success: true,
            download_ref: result.download_ref.to_string(),
            filename: result.filename,
            version: result.version,
            message: result.message,
        }
    }
}

/// Query string of the history endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQueryParams {
    #[serde(default)]
    pub base_title: Option<String>,
}

/// One history entry as listed over HTTP.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryResponse {
    pub name: String,
    pub base_title: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub download_ref: String,
    pub created_at: String,
    pub version: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_snippet: Option<String>,
}

impl From<DocumentHistoryEntry> for HistoryEntryResponse {
    fn from(entry: DocumentHistoryEntry) -> Self {
        Self {
            base_title: entry.base_title().to_string(),
            kind: entry.kind,
            download_ref: entry.storage_ref.to_string(),
            created_at: entry.created_at.as_datetime().to_rfc3339(),
            version: entry.version,
            content_snippet: entry.content_snippet,
            name: entry.name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHistoryResponse {
    pub client_id: String,
    pub documents: Vec<HistoryEntryResponse>,
}
