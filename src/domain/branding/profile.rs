//! Stored branding profiles and partial updates.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{ClientId, Timestamp, UserId, ValidationError};

use super::{HexColor, LogoSource};

/// Who a branding profile belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum BrandingOwner {
    Client(ClientId),
    User(UserId),
}

impl BrandingOwner {
    /// Stable key usable as a map key or file stem, e.g. `client_acme`.
    pub fn storage_key(&self) -> String {
        match self {
            BrandingOwner::Client(id) => format!("client_{}", id),
            BrandingOwner::User(id) => format!("user_{}", id),
        }
    }
}

impl fmt::Display for BrandingOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BrandingOwner::Client(id) => write!(f, "client:{}", id),
            BrandingOwner::User(id) => write!(f, "user:{}", id),
        }
    }
}

/// Logo and accent colours associated with a client or user.
///
/// Every field is optional; an absent field is distinct from an invalid
/// one, which can never be constructed. `extensions` holds any additional
/// string-keyed attributes callers attach without widening the schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingProfile {
    #[serde(default, deserialize_with = "stored_logo")]
    pub logo: Option<LogoSource>,

    #[serde(default, deserialize_with = "stored_primary_color")]
    pub primary_color: Option<HexColor>,

    #[serde(default, deserialize_with = "stored_secondary_color")]
    pub secondary_color: Option<HexColor>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extensions: BTreeMap<String, Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl BrandingProfile {
    /// Merges a partial update. Fields the update does not carry are left
    /// unchanged; nothing is ever cleared.
    pub fn apply(&mut self, update: BrandingUpdate) {
        if let Some(logo) = update.logo {
            self.logo = Some(logo);
        }
        if let Some(primary) = update.primary_color {
            self.primary_color = Some(primary);
        }
        if let Some(secondary) = update.secondary_color {
            self.secondary_color = Some(secondary);
        }
        self.extensions.extend(update.extensions);
        self.updated_at = Some(Timestamp::now());
    }

    /// True when no branding field is set.
    pub fn is_empty(&self) -> bool {
        self.logo.is_none()
            && self.primary_color.is_none()
            && self.secondary_color.is_none()
            && self.extensions.is_empty()
    }
}

// Stored records are read leniently: a malformed field reads as absent so
// resolution falls through to the default instead of failing the request.

fn stored_text<'de, D>(deserializer: D, field: &str) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => {
            tracing::warn!(field, value = %other, "Ignoring non-text stored branding value");
            Ok(None)
        }
    }
}

fn stored_color<'de, D>(deserializer: D, field: &str) -> Result<Option<HexColor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(stored_text(deserializer, field)?.and_then(|raw| {
        HexColor::parse(field, &raw)
            .map_err(|e| tracing::warn!(field, error = %e, "Ignoring invalid stored branding colour"))
            .ok()
    }))
}

fn stored_primary_color<'de, D>(deserializer: D) -> Result<Option<HexColor>, D::Error>
where
    D: Deserializer<'de>,
{
    stored_color(deserializer, "primary_color")
}

fn stored_secondary_color<'de, D>(deserializer: D) -> Result<Option<HexColor>, D::Error>
where
    D: Deserializer<'de>,
{
    stored_color(deserializer, "secondary_color")
}

fn stored_logo<'de, D>(deserializer: D) -> Result<Option<LogoSource>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(stored_text(deserializer, "logo")?.and_then(|raw| {
        LogoSource::new(raw)
            .map_err(|e| tracing::warn!(error = %e, "Ignoring invalid stored branding logo"))
            .ok()
    }))
}

/// A validated partial update to a [`BrandingProfile`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandingUpdate {
    pub logo: Option<LogoSource>,
    pub primary_color: Option<HexColor>,
    pub secondary_color: Option<HexColor>,
    pub extensions: BTreeMap<String, Value>,
}

impl BrandingUpdate {
    /// Validates raw caller input. Any malformed value rejects the whole
    /// update.
    pub fn parse(
        logo: Option<String>,
        primary_color: Option<String>,
        secondary_color: Option<String>,
        extensions: BTreeMap<String, Value>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            logo: logo.map(LogoSource::new).transpose()?,
            primary_color: primary_color
                .as_deref()
                .map(|c| HexColor::parse("primary_color", c))
                .transpose()?,
            secondary_color: secondary_color
                .as_deref()
                .map(|c| HexColor::parse("secondary_color", c))
                .transpose()?,
            extensions,
        })
    }

    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.logo.is_none()
            && self.primary_color.is_none()
            && self.secondary_color.is_none()
            && self.extensions.is_empty()
    }
}

/// Per-request branding supplied alongside a generation request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandingOverride {
    pub logo: Option<LogoSource>,
    pub primary_color: Option<HexColor>,
    pub secondary_color: Option<HexColor>,
}

impl BrandingOverride {
    /// Validates explicit colour overrides.
    pub fn from_colors(
        primary_color: Option<&str>,
        secondary_color: Option<&str>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            logo: None,
            primary_color: primary_color
                .map(|c| HexColor::parse("primary_color", c))
                .transpose()?,
            secondary_color: secondary_color
                .map(|c| HexColor::parse("secondary_color", c))
                .transpose()?,
        })
    }

    /// Builder: attach an explicit logo.
    pub fn with_logo(mut self, logo: LogoSource) -> Self {
        self.logo = Some(logo);
        self
    }
}
