//! Shared types and enums used across SCROPT.
//! Includes the connectivity `Objective` codes, the `SolveMethod`, and the
//! number formatting used when building output filenames.
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Landscape connectivity objective. The formulas live in the external model builder.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    Rd,
    Pc,
    Dwc,
}

impl Objective {
    pub const ALL: [Objective; 3] = [Objective::Rd, Objective::Pc, Objective::Dwc];

    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Rd => "rd",
            Objective::Pc => "pc",
            Objective::Dwc => "dwc",
        }
    }

    fn lookup(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == value)
    }

    /// Parse a secondary objective; reports `InvalidSecondary` rather than `InvalidObjective`.
    pub fn parse_secondary(value: &str) -> Result<Self, Error> {
        Self::lookup(value).ok_or_else(|| Error::InvalidSecondary {
            value: value.to_string(),
        })
    }
}

impl FromStr for Objective {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| Error::InvalidObjective {
            value: s.to_string(),
        })
    }
}

impl std::fmt::Display for Objective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SolveMethod {
    #[default]
    Cplex,
}

impl FromStr for SolveMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cplex" => Ok(SolveMethod::Cplex),
            other => Err(Error::UnsupportedMethod {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for SolveMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveMethod::Cplex => write!(f, "cplex"),
        }
    }
}

/// Render a float the way existing result archives name files: whole numbers
/// keep one decimal place (`500` -> `500.0`), magnitudes below 1e-4 or from
/// 1e16 up switch to exponent form with a signed two-digit exponent
/// (`1e-05`, `1.5e+16`), everything else uses the shortest round-trip form.
pub fn float_label(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{value:e}");
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            if value != 0.0 && !(-4..16).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{mantissa}e{sign}{:02}", exponent.abs());
            }
        }
    }

    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}
