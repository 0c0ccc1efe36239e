//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the branding and document domains.

mod command;
mod errors;
mod ids;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::ValidationError;
pub use ids::{ArtifactId, ClientId, UserId};
pub use timestamp::Timestamp;
