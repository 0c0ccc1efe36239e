//! Branding domain - logos, accent colours and their resolution.
//!
//! A client (or user) may store a branding profile. When a document is
//! generated, an explicit per-request override, the stored profile and the
//! built-in defaults are merged field by field into one
//! [`ResolvedBranding`].

mod color;
mod logo;
mod profile;
mod resolver;

pub use color::{HexColor, DEFAULT_PRIMARY_COLOR, DEFAULT_SECONDARY_COLOR};
pub use logo::{AssetDecodeError, DecodedLogo, LogoFormat, LogoSource};
pub use profile::{BrandingOverride, BrandingOwner, BrandingProfile, BrandingUpdate};
pub use resolver::{
    needs_default_logo, resolve, BrandingDefaults, BrandingProvenance, BrandingSource,
    ResolvedBranding,
};
