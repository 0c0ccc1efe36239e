//! Business Assistant - branded business-plan documents.
//!
//! Turns a title and a list of sections into a DOCX package styled with the
//! client's logo and colours, stores it, and records it in the client's
//! version history (`Plan (v1)`, `Plan (v2)`, ...).
//!
//! Layout:
//! - `domain` - branding resolution, block assembly, versioning
//! - `ports` - storage, encoder and asset interfaces
//! - `adapters` - DOCX encoder, file/in-memory storage, HTTP
//! - `application` - command and query handlers
//! - `config` / `setup` - environment configuration and wiring

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod setup;
