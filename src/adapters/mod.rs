//! Adapters - Implementations of port interfaces.
//!
//! - `assets` - bundled default logo
//! - `docx` - Office Open XML encoder
//! - `http` - REST API
//! - `storage` - artifact, history and branding persistence

pub mod assets;
pub mod docx;
pub mod http;
pub mod storage;
