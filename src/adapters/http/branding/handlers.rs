//! HTTP handlers for branding endpoints.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::handlers::branding::{
    GetBrandingHandler, UpdateBrandingCommand, UpdateBrandingError, UpdateBrandingHandler,
};
use crate::domain::branding::BrandingOwner;
use crate::domain::foundation::{ClientId, CommandMetadata, UserId, ValidationError};
use crate::ports::{BrandingRepository, StorageError};

use super::super::dto::ErrorResponse;
use super::dto::{BrandingResponse, UpdateBrandingRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct BrandingAppState {
    pub branding_repository: Arc<dyn BrandingRepository>,
}

impl BrandingAppState {
    pub fn get_branding_handler(&self) -> GetBrandingHandler {
        GetBrandingHandler::new(self.branding_repository.clone())
    }

    pub fn update_branding_handler(&self) -> UpdateBrandingHandler {
        UpdateBrandingHandler::new(self.branding_repository.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/clients/:client_id/branding
pub async fn get_client_branding(
    State(state): State<BrandingAppState>,
    Path(client_id): Path<String>,
) -> Result<impl IntoResponse, BrandingApiError> {
    let owner = BrandingOwner::Client(ClientId::new(client_id)?);
    read_branding(&state, owner).await
}

/// PUT /api/clients/:client_id/branding
pub async fn update_client_branding(
    State(state): State<BrandingAppState>,
    Path(client_id): Path<String>,
    Json(request): Json<UpdateBrandingRequest>,
) -> Result<impl IntoResponse, BrandingApiError> {
    let owner = BrandingOwner::Client(ClientId::new(client_id)?);
    write_branding(&state, owner, request).await
}

/// GET /api/users/:user_id/branding
pub async fn get_user_branding(
    State(state): State<BrandingAppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, BrandingApiError> {
    let owner = BrandingOwner::User(UserId::new(user_id)?);
    read_branding(&state, owner).await
}

/// PUT /api/users/:user_id/branding
pub async fn update_user_branding(
    State(state): State<BrandingAppState>,
    Path(user_id): Path<String>,
    Json(request): Json<UpdateBrandingRequest>,
) -> Result<impl IntoResponse, BrandingApiError> {
    let owner = BrandingOwner::User(UserId::new(user_id)?);
    write_branding(&state, owner, request).await
}

async fn read_branding(
    state: &BrandingAppState,
    owner: BrandingOwner,
) -> Result<Json<BrandingResponse>, BrandingApiError> {
    let profile = state.get_branding_handler().handle(&owner).await?;
    Ok(Json(BrandingResponse::from(profile)))
}

async fn write_branding(
    state: &BrandingAppState,
    owner: BrandingOwner,
    request: UpdateBrandingRequest,
) -> Result<Json<BrandingResponse>, BrandingApiError> {
    let cmd = UpdateBrandingCommand {
        owner,
        logo: request.logo,
        primary_color: request.primary_color,
        secondary_color: request.secondary_color,
        extensions: request.extensions,
    };

    let profile = state
        .update_branding_handler()
        .handle(cmd, CommandMetadata::new())
        .await?;
    Ok(Json(BrandingResponse::from(profile)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug)]
pub enum BrandingApiError {
    BadRequest(ErrorResponse),
    Internal(String),
}

impl From<ValidationError> for BrandingApiError {
    fn from(err: ValidationError) -> Self {
        BrandingApiError::BadRequest(ErrorResponse::validation(err.field(), err.to_string()))
    }
}

impl From<StorageError> for BrandingApiError {
    fn from(err: StorageError) -> Self {
        BrandingApiError::Internal(err.to_string())
    }
}

impl From<UpdateBrandingError> for BrandingApiError {
    fn from(err: UpdateBrandingError) -> Self {
        match err {
            UpdateBrandingError::Validation(e) => e.into(),
            UpdateBrandingError::Storage(e) => e.into(),
        }
    }
}

impl IntoResponse for BrandingApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            BrandingApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            BrandingApiError::Internal(message) => {
                tracing::error!(error = %message, "Branding request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::internal("An internal error occurred"),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}
