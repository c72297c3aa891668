use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatsError;

pub const KG_TO_LB: f64 = 2.20462;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Lb,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Kg => "kg",
            Unit::Lb => "lb",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Unit::Kg),
            "lb" => Ok(Unit::Lb),
            other => Err(StatsError::UnknownUnit(other.to_string())),
        }
    }
}

/// Converts a canonical kilogram weight into the display unit.
pub fn convert_weight(weight_kg: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Kg => weight_kg,
        Unit::Lb => weight_kg * KG_TO_LB,
    }
}

/// Converts then rounds to `precision` decimal digits. Precision 0 keeps
/// chart values as integers; precision 1 preserves half-unit working
/// weights like 12.5.
pub fn format_weight(weight_kg: f64, unit: Unit, precision: u32) -> f64 {
    let factor = 10f64.powi(precision as i32);
    (convert_weight(weight_kg, unit) * factor).round() / factor
}

/// Rounds to one decimal, the display convention for RIR/RPE averages and
/// trend percentages.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
