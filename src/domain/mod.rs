//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `branding` - Branding profiles and override/stored/default resolution
//! - `document` - Section assembly, version naming and document history

pub mod branding;
pub mod document;
pub mod foundation;
