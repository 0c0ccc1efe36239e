//! Branding resolution: explicit override, then stored profile, then the
//! built-in default, decided independently for each field.

use serde::Serialize;

use super::{BrandingOverride, BrandingProfile, HexColor, LogoSource};

/// Where a resolved field came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandingSource {
    Override,
    Stored,
    Default,
    /// Default logo requested but the asset could not be loaded.
    Missing,
}

/// Per-field provenance of a [`ResolvedBranding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrandingProvenance {
    pub logo: BrandingSource,
    pub primary_color: BrandingSource,
    pub secondary_color: BrandingSource,
}

/// Built-in fallbacks at the end of the chain.
#[derive(Debug, Clone, PartialEq)]
pub struct BrandingDefaults {
    /// `None` when the bundled asset could not be read.
    pub logo: Option<LogoSource>,
    pub primary_color: HexColor,
    pub secondary_color: HexColor,
}

impl BrandingDefaults {
    /// Built-in colours with the given default logo.
    pub fn builtin(logo: Option<LogoSource>) -> Self {
        Self {
            logo,
            primary_color: HexColor::default_primary(),
            secondary_color: HexColor::default_secondary(),
        }
    }
}

/// The single branding triple handed to the encoder.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBranding {
    pub logo: Option<LogoSource>,
    pub primary_color: HexColor,
    pub secondary_color: HexColor,
    pub provenance: BrandingProvenance,
}

impl ResolvedBranding {
    /// Same branding without a logo.
    pub fn without_logo(mut self) -> Self {
        self.logo = None;
        self.provenance.logo = BrandingSource::Missing;
        self
    }
}

/// True when neither the override nor the stored profile carries a logo,
/// so resolution will reach the default asset.
pub fn needs_default_logo(
    explicit: Option<&BrandingOverride>,
    stored: Option<&BrandingProfile>,
) -> bool {
    explicit.and_then(|o| o.logo.as_ref()).is_none()
        && stored.and_then(|p| p.logo.as_ref()).is_none()
}

fn pick<T: Clone>(
    explicit: Option<&T>,
    stored: Option<&T>,
    default: Option<&T>,
) -> (Option<T>, BrandingSource) {
    if let Some(value) = explicit {
        (Some(value.clone()), BrandingSource::Override)
    } else if let Some(value) = stored {
        (Some(value.clone()), BrandingSource::Stored)
    } else if let Some(value) = default {
        (Some(value.clone()), BrandingSource::Default)
    } else {
        (None, BrandingSource::Missing)
    }
}

/// Resolves one branding triple. Never fails: the chain always ends at
/// the defaults, and a missing default logo yields `logo = None`.
pub fn resolve(
    explicit: Option<&BrandingOverride>,
    stored: Option<&BrandingProfile>,
    defaults: &BrandingDefaults,
) -> ResolvedBranding {
    let (logo, logo_source) = pick(
        explicit.and_then(|o| o.logo.as_ref()),
        stored.and_then(|p| p.logo.as_ref()),
        defaults.logo.as_ref(),
    );
    let (primary, primary_source) = pick(
        explicit.and_then(|o| o.primary_color.as_ref()),
        stored.and_then(|p| p.primary_color.as_ref()),
        Some(&defaults.primary_color),
    );
    let (secondary, secondary_source) = pick(
        explicit.and_then(|o| o.secondary_color.as_ref()),
        stored.and_then(|p| p.secondary_color.as_ref()),
        Some(&defaults.secondary_color),
    );

    ResolvedBranding {
        logo,
        primary_color: primary.unwrap_or_else(|| defaults.primary_color.clone()),
        secondary_color: secondary.unwrap_or_else(|| defaults.secondary_color.clone()),
        provenance: BrandingProvenance {
            logo: logo_source,
            primary_color: primary_source,
            secondary_color: secondary_source,
        },
    }
}
