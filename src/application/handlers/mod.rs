//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod branding;
pub mod document;

pub use branding::{
    GetBrandingHandler, UpdateBrandingCommand, UpdateBrandingError, UpdateBrandingHandler,
};
pub use document::{
    ClientLocks, DownloadDocumentError, DownloadDocumentHandler, DownloadDocumentQuery,
    GenerateDocumentCommand, GenerateDocumentError, GenerateDocumentHandler,
    GenerateDocumentResult, ListDocumentHistoryError, ListDocumentHistoryHandler,
    ListDocumentHistoryQuery,
};
