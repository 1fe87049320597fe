//! Distance value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Round to two decimal places, half away from zero
#[must_use]
pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Unit in which the mapping provider reports distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Kilometers
    #[default]
    Kilometers,
    /// Statute miles
    Miles,
}

impl DistanceUnit {
    /// Code used by the mapping API `unit` query parameter
    #[must_use]
    pub const fn api_code(&self) -> &'static str {
        match self {
            Self::Kilometers => "K",
            Self::Miles => "M",
        }
    }

    /// Short label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Kilometers => "km",
            Self::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Blank input selects kilometers
impl FromStr for DistanceUnit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "k" | "km" | "kilometers" | "kilometres" => Ok(Self::Kilometers),
            "m" | "mi" | "miles" => Ok(Self::Miles),
            other => Err(DomainError::InvalidUnit(other.to_string())),
        }
    }
}

/// A distance rounded to two decimal places
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    value: f64,
    unit: DistanceUnit,
}

impl Distance {
    /// Create a distance, rounding the raw value to two decimals
    #[must_use]
    pub fn new(raw: f64, unit: DistanceUnit) -> Self {
        Self {
            value: round_to_two_decimals(raw),
            unit,
        }
    }

    /// Get the rounded value
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Get the unit
    #[must_use]
    pub const fn unit(&self) -> DistanceUnit {
        self.unit
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit.label())
    }
}
