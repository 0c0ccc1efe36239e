//! Route configuration for branding endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{
    get_client_branding, get_user_branding, update_client_branding, update_user_branding,
    BrandingAppState,
};

/// Creates the branding router.
///
/// Routes:
/// - `GET/PUT /api/clients/:client_id/branding` - Client branding profile
/// - `GET/PUT /api/users/:user_id/branding` - User branding profile
pub fn branding_router() -> Router<BrandingAppState> {
    Router::new()
        .route(
            "/api/clients/:client_id/branding",
            get(get_client_branding).put(update_client_branding),
        )
        .route(
            "/api/users/:user_id/branding",
            get(get_user_branding).put(update_user_branding),
        )
}
