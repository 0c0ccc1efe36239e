//! HTTP adapter for stored branding profiles.

mod dto;
mod handlers;
mod routes;

pub use dto::{BrandingResponse, UpdateBrandingRequest};
pub use handlers::{BrandingApiError, BrandingAppState};
pub use routes::branding_router;
