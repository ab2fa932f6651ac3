//! How enum types are rendered.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Rendering style for catalog enum types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumStyle {
    /// `type Status = 'a' | 'b'`
    #[default]
    Union,
    /// `enum Status { A = 'a', B = 'b' }`
    Enum,
}

impl EnumStyle {
    /// Returns the style identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnumStyle::Union => "union",
            EnumStyle::Enum => "enum",
        }
    }
}

impl fmt::Display for EnumStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EnumStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "union" => Ok(EnumStyle::Union),
            "enum" => Ok(EnumStyle::Enum),
            _ => Err(format!(
                "unknown enum style '{}', expected 'union' or 'enum'",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(EnumStyle::from_str("union").unwrap(), EnumStyle::Union);
        assert_eq!(EnumStyle::from_str("Enum").unwrap(), EnumStyle::Enum);
        assert!(EnumStyle::from_str("literal").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(EnumStyle::Union.to_string(), "union");
        assert_eq!(EnumStyle::Enum.to_string(), "enum");
    }

    #[test]
    fn test_deserialize() {
        let style: EnumStyle = serde_json::from_str(r#""enum""#).unwrap();
        assert_eq!(style, EnumStyle::Enum);
    }
}
