//! Branding defaults configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::branding::HexColor;

use super::error::ValidationError;

/// Fallbacks used when neither the request nor a stored profile supplies a
/// value.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandingConfig {
    /// Bundled default logo; a missing file means documents carry no logo
    #[serde(default = "default_logo_path")]
    pub default_logo_path: PathBuf,

    #[serde(default = "default_primary_color")]
    pub default_primary_color: String,

    #[serde(default = "default_secondary_color")]
    pub default_secondary_color: String,

    /// Written to the document properties as creator and application
    #[serde(default = "default_application_name")]
    pub application_name: String,
}

impl BrandingConfig {
    pub fn primary_color(&self) -> Result<HexColor, ValidationError> {
        parse_color("default_primary_color", &self.default_primary_color)
    }

    pub fn secondary_color(&self) -> Result<HexColor, ValidationError> {
        parse_color("default_secondary_color", &self.default_secondary_color)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.primary_color()?;
        self.secondary_color()?;
        if self.application_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("branding.application_name"));
        }
        Ok(())
    }
}

fn parse_color(field: &'static str, value: &str) -> Result<HexColor, ValidationError> {
    HexColor::parse(field, value).map_err(|_| ValidationError::InvalidDefaultColor {
        field,
        value: value.to_string(),
    })
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            default_logo_path: default_logo_path(),
            default_primary_color: default_primary_color(),
            default_secondary_color: default_secondary_color(),
            application_name: default_application_name(),
        }
    }
}

fn default_logo_path() -> PathBuf {
    PathBuf::from("assets/default-logo.png")
}

fn default_primary_color() -> String {
    "#1E40AF".to_string()
}

fn default_secondary_color() -> String {
    "#3B82F6".to_string()
}

fn default_application_name() -> String {
    "Business Assistant".to_string()
}
