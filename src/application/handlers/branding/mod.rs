//! Branding handlers - read and merge stored profiles.

mod get_branding;
mod update_branding;

pub use get_branding::GetBrandingHandler;
pub use update_branding::{UpdateBrandingCommand, UpdateBrandingError, UpdateBrandingHandler};
