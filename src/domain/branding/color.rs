//! Hex colour value object.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Built-in primary accent colour.
pub const DEFAULT_PRIMARY_COLOR: &str = "#1E40AF";

/// Built-in secondary accent colour.
pub const DEFAULT_SECONDARY_COLOR: &str = "#3B82F6";

/// A colour in normalized `#RRGGBB` form (upper-case hex digits).
///
/// Accepts `#RRGGBB`, `RRGGBB` and the `#RGB` shorthand on input. Anything
/// else is rejected rather than silently replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parses and normalizes a colour supplied for `field`.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }

        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValidationError::invalid_format(
                field,
                format!("'{}' is not a hex colour (expected #RRGGBB)", raw),
            ));
        }

        let expanded = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => {
                return Err(ValidationError::invalid_format(
                    field,
                    format!("'{}' must have 6 hex digits (expected #RRGGBB)", raw),
                ))
            }
        };

        Ok(Self(format!("#{}", expanded.to_ascii_uppercase())))
    }

    /// Built-in primary colour `#1E40AF`.
    pub fn default_primary() -> Self {
        Self(DEFAULT_PRIMARY_COLOR.to_string())
    }

    /// Built-in secondary colour `#3B82F6`.
    pub fn default_secondary() -> Self {
        Self(DEFAULT_SECONDARY_COLOR.to_string())
    }

    /// Normalized `#RRGGBB` form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The six hex digits without `#`, as WordprocessingML `w:color` wants.
    pub fn hex_digits(&self) -> &str {
        &self.0[1..]
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for HexColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse("color", s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse("color", &value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case_and_prefix() {
        assert_eq!(HexColor::parse("c", "#1e40af").unwrap().as_str(), "#1E40AF");
        assert_eq!(HexColor::parse("c", "3b82f6").unwrap().as_str(), "#3B82F6");
        assert_eq!(HexColor::parse("c", "  #ABCDEF ").unwrap().as_str(), "#ABCDEF");
    }

    #[test]
    fn parse_expands_shorthand() {
        assert_eq!(HexColor::parse("c", "#fa0").unwrap().as_str(), "#FFAA00");
    }

    #[test]
    fn parse_rejects_non_hex_digits() {
        let err = HexColor::parse("primary_color", "#ZZZZZZ").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { ref field, .. } if field == "primary_color"));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert!(HexColor::parse("c", "#1234").is_err());
        assert!(HexColor::parse("c", "#1234567").is_err());
    }

    #[test]
    fn parse_rejects_blank() {
        assert!(matches!(
            HexColor::parse("c", "  "),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn hex_digits_strips_hash() {
        assert_eq!(HexColor::default_primary().hex_digits(), "1E40AF");
    }

    #[test]
    fn defaults_are_already_normalized() {
        assert_eq!(
            HexColor::parse("c", DEFAULT_PRIMARY_COLOR).unwrap(),
            HexColor::default_primary()
        );
        assert_eq!(
            HexColor::parse("c", DEFAULT_SECONDARY_COLOR).unwrap(),
            HexColor::default_secondary()
        );
    }

    #[test]
    fn deserialization_validates() {
        let ok: HexColor = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(ok.as_str(), "#00FF00");
        assert!(serde_json::from_str::<HexColor>("\"green\"").is_err());
    }
}
