//! Conversion direction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{KM_TO_MILES, MILES_TO_KM};
use crate::error::ConverterError;

/// Which of the two supported conversions is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConversionDirection {
    /// Kilometers to miles
    #[default]
    #[serde(rename = "km-to-miles")]
    KmToMiles,
    /// Miles to kilometers
    #[serde(rename = "miles-to-km")]
    MilesToKm,
}

impl ConversionDirection {
    /// All directions in display order
    pub const ALL: [ConversionDirection; 2] =
        [ConversionDirection::KmToMiles, ConversionDirection::MilesToKm];

    /// Stable identifier, e.g. `km-to-miles`
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionDirection::KmToMiles => "km-to-miles",
            ConversionDirection::MilesToKm => "miles-to-km",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ConversionDirection::KmToMiles => "Kilometers → Miles",
            ConversionDirection::MilesToKm => "Miles → Kilometers",
        }
    }

    pub fn from_unit(&self) -> &'static str {
        match self {
            ConversionDirection::KmToMiles => "km",
            ConversionDirection::MilesToKm => "miles",
        }
    }

    pub fn to_unit(&self) -> &'static str {
        match self {
            ConversionDirection::KmToMiles => "miles",
            ConversionDirection::MilesToKm => "km",
        }
    }

    /// Multiplicative conversion factor
    pub fn factor(&self) -> f64 {
        match self {
            ConversionDirection::KmToMiles => KM_TO_MILES,
            ConversionDirection::MilesToKm => MILES_TO_KM,
        }
    }

    /// Conversion factor exactly as written in formulas
    pub fn factor_literal(&self) -> &'static str {
        match self {
            ConversionDirection::KmToMiles => "0.621371",
            ConversionDirection::MilesToKm => "1.60934",
        }
    }

    /// The reverse conversion
    pub fn opposite(&self) -> Self {
        match self {
            ConversionDirection::KmToMiles => ConversionDirection::MilesToKm,
            ConversionDirection::MilesToKm => ConversionDirection::KmToMiles,
        }
    }

    /// Reference formula with unit names, e.g. `km × 0.621371 = miles`
    pub fn reference_formula(&self) -> String {
        format!(
            "{} × {} = {}",
            self.from_unit(),
            self.factor_literal(),
            self.to_unit()
        )
    }
}

impl fmt::Display for ConversionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionDirection {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "km-to-miles" | "km" | "k2m" => Ok(ConversionDirection::KmToMiles),
            "miles-to-km" | "miles" | "mi" | "m2k" => Ok(ConversionDirection::MilesToKm),
            _ => Err(ConverterError::UnknownDirection {
                value: s.to_string(),
            }),
        }
    }
}
