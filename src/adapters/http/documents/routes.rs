//! Route configuration for document endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{download_document, generate_document, list_document_history, DocumentsAppState};

/// Creates the documents router.
///
/// Routes:
/// - `POST /api/documents/generate` - Generate a branded, versioned DOCX
/// - `GET /api/documents/:download_ref` - Download a generated document
/// - `GET /api/clients/:client_id/documents` - List a client's document history
pub fn documents_router() -> Router<DocumentsAppState> {
    Router::new()
        .route("/api/documents/generate", post(generate_document))
        .route("/api/documents/:download_ref", get(download_document))
        .route("/api/clients/:client_id/documents", get(list_document_history))
}
