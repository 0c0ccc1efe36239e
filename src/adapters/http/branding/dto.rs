//! Request/response DTOs for branding endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::domain::branding::BrandingProfile;

/// Body of a branding PUT. Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandingRequest {
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(default)]
    pub extensions: BTreeMap<String, Value>,
}

/// A stored branding profile; absent fields serialize as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingResponse {
    pub logo: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<BrandingProfile> for BrandingResponse {
    fn from(profile: BrandingProfile) -> Self {
        Self {
            logo: profile.logo.map(|l| l.as_str().to_string()),
            primary_color: profile.primary_color.map(|c| c.as_str().to_string()),
            secondary_color: profile.secondary_color.map(|c| c.as_str().to_string()),
            extensions: profile.extensions,
            updated_at: profile.updated_at.map(|t| t.as_datetime().to_rfc3339()),
        }
    }
}
