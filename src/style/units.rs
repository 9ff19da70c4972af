//! CSS length units
//!
//! The dashboard server names units after its own enum (`Px`, `Percent`,
//! `CM`, `MM`, `In`); browsers want CSS suffixes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    Px,
    Percent,
    #[serde(rename = "CM")]
    Cm,
    #[serde(rename = "MM")]
    Mm,
    In,
}

impl LengthUnit {
    /// CSS suffix for this unit
    pub fn css_suffix(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Percent => "%",
            LengthUnit::Cm => "cm",
            LengthUnit::Mm => "mm",
            LengthUnit::In => "in",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.css_suffix())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "px" => Ok(LengthUnit::Px),
            "percent" | "%" => Ok(LengthUnit::Percent),
            "cm" => Ok(LengthUnit::Cm),
            "mm" => Ok(LengthUnit::Mm),
            "in" => Ok(LengthUnit::In),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Map a unit name to its CSS suffix
///
/// Unknown names pass through unchanged. An absent unit yields an empty
/// suffix, leaving a bare number that browsers read as pixels.
pub fn normalize_length_unit(unit: Option<&str>) -> String {
    match unit {
        None => String::new(),
        Some(u) => u
            .parse::<LengthUnit>()
            .map(|parsed| parsed.css_suffix().to_string())
            .unwrap_or_else(|_| u.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_units_case_insensitive() {
        assert_eq!(normalize_length_unit(Some("px")), "px");
        assert_eq!(normalize_length_unit(Some("Px")), "px");
        assert_eq!(normalize_length_unit(Some("percent")), "%");
        assert_eq!(normalize_length_unit(Some("Percent")), "%");
        assert_eq!(normalize_length_unit(Some("%")), "%");
        assert_eq!(normalize_length_unit(Some("CM")), "cm");
        assert_eq!(normalize_length_unit(Some("mm")), "mm");
        assert_eq!(normalize_length_unit(Some("In")), "in");
    }

    #[test]
    fn test_unknown_and_absent_units() {
        assert_eq!(normalize_length_unit(Some("em")), "em");
        assert_eq!(normalize_length_unit(None), "");
    }

    #[test]
    fn test_server_enum_names() {
        let unit: LengthUnit = serde_json::from_str("\"CM\"").unwrap();
        assert_eq!(unit, LengthUnit::Cm);
        assert_eq!(unit.to_string(), "cm");
        assert!("furlong".parse::<LengthUnit>().is_err());
    }
}
