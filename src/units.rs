//! Units of length accepted by the dimension API.
//!
//! Image dimensions are stored canonically in millimeters. Callers may supply
//! magnitudes in any supported unit; the magnitude is converted on the way in
//! and the original unit is not recoverable afterwards.

use crate::error::ValueError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported units of length for image dimensions.
///
/// Conversion to millimeters is a pure table lookup. Extending the set means
/// adding a variant and its factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum UnitOfLength {
    Millimeters,
    Centimeters,
    Inches,
    Points,
}

impl UnitOfLength {
    /// Millimeters per one unit of `self`.
    pub fn millimeter_factor(self) -> f64 {
        match self {
            UnitOfLength::Millimeters => 1.0,
            UnitOfLength::Centimeters => 10.0,
            UnitOfLength::Inches => 25.4,
            // DTP point, 1/72 inch
            UnitOfLength::Points => 25.4 / 72.0,
        }
    }

    /// Converts a magnitude expressed in `self` into millimeters.
    pub fn to_millimeters(self, magnitude: f64) -> f64 {
        magnitude * self.millimeter_factor()
    }

    /// Canonical lowercase name, used by `Display` and accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            UnitOfLength::Millimeters => "millimeters",
            UnitOfLength::Centimeters => "centimeters",
            UnitOfLength::Inches => "inches",
            UnitOfLength::Points => "points",
        }
    }
}

impl fmt::Display for UnitOfLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnitOfLength {
    type Err = ValueError;

    /// Parses a unit selector from text.
    ///
    /// Accepts the canonical names plus the usual abbreviations (`mm`, `cm`,
    /// `in`, `pt`), case-insensitively.
    ///
    /// # Errors
    /// Returns [`ValueError::UnknownUnit`] for anything else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mm" | "millimeter" | "millimeters" => Ok(UnitOfLength::Millimeters),
            "cm" | "centimeter" | "centimeters" => Ok(UnitOfLength::Centimeters),
            "in" | "inch" | "inches" => Ok(UnitOfLength::Inches),
            "pt" | "point" | "points" => Ok(UnitOfLength::Points),
            _ => Err(ValueError::UnknownUnit {
                name: s.trim().to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_millimeter_factors() {
        assert_eq!(UnitOfLength::Millimeters.millimeter_factor(), 1.0);
        assert_eq!(UnitOfLength::Centimeters.millimeter_factor(), 10.0);
        assert_eq!(UnitOfLength::Inches.millimeter_factor(), 25.4);
        assert!((UnitOfLength::Points.millimeter_factor() - 0.352_777_7).abs() < 1e-6);
    }

    #[test]
    fn test_to_millimeters_is_pure_scaling() {
        assert_eq!(UnitOfLength::Centimeters.to_millimeters(3.0), 30.0);
        assert_eq!(UnitOfLength::Centimeters.to_millimeters(1.0), 10.0);
        assert_eq!(UnitOfLength::Millimeters.to_millimeters(42.5), 42.5);
        assert_eq!(UnitOfLength::Inches.to_millimeters(2.0), 50.8);
    }

    #[test]
    fn test_parse_accepts_names_and_abbreviations() {
        assert_eq!("mm".parse::<UnitOfLength>().unwrap(), UnitOfLength::Millimeters);
        assert_eq!("CM".parse::<UnitOfLength>().unwrap(), UnitOfLength::Centimeters);
        assert_eq!("inches".parse::<UnitOfLength>().unwrap(), UnitOfLength::Inches);
        assert_eq!(" pt ".parse::<UnitOfLength>().unwrap(), UnitOfLength::Points);
    }

    #[test]
    fn test_parse_rejects_unknown_units() {
        assert_matches!(
            "furlongs".parse::<UnitOfLength>(),
            Err(ValueError::UnknownUnit { name }) if name == "furlongs"
        );
        assert_matches!("".parse::<UnitOfLength>(), Err(ValueError::UnknownUnit { .. }));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for unit in [
            UnitOfLength::Millimeters,
            UnitOfLength::Centimeters,
            UnitOfLength::Inches,
            UnitOfLength::Points,
        ] {
            assert_eq!(unit.to_string().parse::<UnitOfLength>().unwrap(), unit);
        }
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&UnitOfLength::Centimeters).unwrap();
        assert_eq!(json, "\"centimeters\"");

        let parsed: UnitOfLength = serde_json::from_str("\"points\"").unwrap();
        assert_eq!(parsed, UnitOfLength::Points);
    }
}
