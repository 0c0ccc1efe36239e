//! HTTP handlers for document endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::application::handlers::document::{
    DownloadDocumentError, DownloadDocumentHandler, DownloadDocumentQuery, GenerateDocumentError,
    GenerateDocumentHandler, ListDocumentHistoryError, ListDocumentHistoryHandler,
    ListDocumentHistoryQuery,
};
use crate::domain::foundation::CommandMetadata;
use crate::ports::{ArtifactStore, DocumentHistoryRepository};

use super::super::dto::ErrorResponse;
use super::dto::{
    DocumentHistoryResponse, GenerateDocumentRequest, GenerateDocumentResponse,
    HistoryEntryResponse, HistoryQueryParams,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Dependencies of the document routes.
///
/// The generate handler is shared so every request goes through the same
/// per-client locks.
#[derive(Clone)]
pub struct DocumentsAppState {
    pub generate: Arc<GenerateDocumentHandler>,
    pub artifact_store: Arc<dyn ArtifactStore>,
    pub history: Arc<dyn DocumentHistoryRepository>,
}

impl DocumentsAppState {
    pub fn download_document_handler(&self) -> DownloadDocumentHandler {
        DownloadDocumentHandler::new(self.artifact_store.clone())
    }

    pub fn list_document_history_handler(&self) -> ListDocumentHistoryHandler {
        ListDocumentHistoryHandler::new(self.history.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/documents/generate
pub async fn generate_document(
    State(state): State<DocumentsAppState>,
    request: Result<Json<GenerateDocumentRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(body) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected generate request body");
            return (
                StatusCode::BAD_REQUEST,
                Json(GenerateDocumentResponse::failure(rejection.body_text())),
            )
                .into_response();
        }
    };

    match state
        .generate
        .handle(request.into(), CommandMetadata::new())
        .await
    {
        Ok(result) => (StatusCode::OK, Json(GenerateDocumentResponse::from(result))).into_response(),
        Err(err) => {
            let status = match err {
                GenerateDocumentError::Validation(_) => StatusCode::BAD_REQUEST,
                GenerateDocumentError::Encoding(_) | GenerateDocumentError::Persistence(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            };
            (
                status,
                Json(GenerateDocumentResponse::failure(err.user_message())),
            )
                .into_response()
        }
    }
}

/// GET /api/documents/:download_ref
pub async fn download_document(
    State(state): State<DocumentsAppState>,
    Path(download_ref): Path<String>,
) -> Result<impl IntoResponse, DocumentApiError> {
    let artifact = state
        .download_document_handler()
        .handle(DownloadDocumentQuery { download_ref })
        .await?;

    let disposition = format!("attachment; filename=\"{}\"", artifact.filename());
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, artifact.content_type().to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        artifact.bytes,
    ))
}

/// GET /api/clients/:client_id/documents
pub async fn list_document_history(
    State(state): State<DocumentsAppState>,
    Path(client_id): Path<String>,
    Query(params): Query<HistoryQueryParams>,
) -> Result<impl IntoResponse, DocumentApiError> {
    let entries = state
        .list_document_history_handler()
        .handle(ListDocumentHistoryQuery {
            client_id: client_id.clone(),
            base_title: params.base_title,
        })
        .await?;

    Ok(Json(DocumentHistoryResponse {
        client_id,
        documents: entries.into_iter().map(HistoryEntryResponse::from).collect(),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Errors from the read-side document endpoints.
#[derive(Debug)]
pub enum DocumentApiError {
    BadRequest(ErrorResponse),
    NotFound(String),
    Internal(String),
}

impl From<DownloadDocumentError> for DocumentApiError {
    fn from(err: DownloadDocumentError) -> Self {
        match err {
            DownloadDocumentError::NotFound(what) => DocumentApiError::NotFound(what),
            DownloadDocumentError::Storage(e) => DocumentApiError::Internal(e.to_string()),
        }
    }
}

impl From<ListDocumentHistoryError> for DocumentApiError {
    fn from(err: ListDocumentHistoryError) -> Self {
        match err {
            ListDocumentHistoryError::Validation(e) => {
                DocumentApiError::BadRequest(ErrorResponse::validation(e.field(), e.to_string()))
            }
            ListDocumentHistoryError::Storage(e) => DocumentApiError::Internal(e.to_string()),
        }
    }
}

impl IntoResponse for DocumentApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            DocumentApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            DocumentApiError::NotFound(what) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found("Document", &what))
            }
            DocumentApiError::Internal(message) => {
                tracing::error!(error = %message, "Document request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
