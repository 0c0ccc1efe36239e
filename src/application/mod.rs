//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (generate, update branding) write; queries (download, history,
//! branding read) only read.

pub mod handlers;

pub use handlers::{
    // Document handlers
    DownloadDocumentError, DownloadDocumentHandler, DownloadDocumentQuery,
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult, ListDocumentHistoryError, ListDocumentHistoryHandler,
    ListDocumentHistoryQuery,
    // Branding handlers
    GetBrandingHandler, UpdateBrandingCommand, UpdateBrandingError, UpdateBrandingHandler,
};
