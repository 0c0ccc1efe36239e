//! HTTP adapter for document generation, download and history.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    DocumentHistoryResponse, GenerateDocumentRequest, GenerateDocumentResponse,
    HistoryEntryResponse, HistoryQueryParams,
};
pub use handlers::{DocumentApiError, DocumentsAppState};
pub use routes::documents_router;
