//! Document handlers - generation, download and history.

mod client_locks;
mod download_document;
mod generate_document;
mod list_document_history;

pub use client_locks::ClientLocks;
pub use download_document::{DownloadDocumentError, DownloadDocumentHandler, DownloadDocumentQuery};
pub use generate_document::{
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult,
};
pub use list_document_history::{
    ListDocumentHistoryError, ListDocumentHistoryHandler, ListDocumentHistoryQuery,
};
