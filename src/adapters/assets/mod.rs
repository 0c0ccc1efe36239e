//! Static asset adapters.

mod filesystem_logo;

pub use filesystem_logo::{FilesystemLogoAsset, NoDefaultLogo};
