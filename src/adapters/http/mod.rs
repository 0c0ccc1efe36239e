//! HTTP adapters - REST API implementations.
//!
//! Each area has its own router and state; [`app_router`] merges them and
//! adds the shared layers.

pub mod branding;
pub mod documents;
pub mod dto;
pub mod health;

use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use branding::{branding_router, BrandingAppState};
pub use documents::{documents_router, DocumentsAppState};
pub use dto::ErrorResponse;
pub use health::health_router;

/// Builds the full application router.
pub fn app_router(
    documents: DocumentsAppState,
    branding: BrandingAppState,
    request_timeout: Duration,
    cors: CorsLayer,
) -> Router {
    Router::new()
        .merge(health_router())
        .merge(documents_router().with_state(documents))
        .merge(branding_router().with_state(branding))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
