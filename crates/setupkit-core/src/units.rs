//! Unit conversion utilities
//!
//! Handles conversion between Metric (mm) and Imperial (inch) systems.
//! Millimeters are the canonical unit: inch input is converted on entry and
//! only converted back for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Millimeters in one inch
pub const MM_PER_INCH: f64 = 25.4;

/// Convert millimeters to inches
pub fn to_imperial(value_mm: f64) -> f64 {
    value_mm / MM_PER_INCH
}

/// Convert inches to millimeters
pub fn to_metric(value_inch: f64) -> f64 {
    value_inch * MM_PER_INCH
}

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    #[serde(alias = "mm", alias = "Metric", alias = "Metric (mm)")]
    Metric,
    /// Imperial system (inches)
    #[serde(alias = "in", alias = "inch", alias = "Imperial", alias = "Imperial (inches)")]
    Imperial,
}

impl MeasurementSystem {
    /// Convert a value entered in this system to millimeters
    pub fn to_mm(self, value: f64) -> f64 {
        match self {
            Self::Metric => value,
            Self::Imperial => to_metric(value),
        }
    }

    /// Convert a millimeter value to this system
    pub fn from_mm(self, value_mm: f64) -> f64 {
        match self {
            Self::Metric => value_mm,
            Self::Imperial => to_imperial(value_mm),
        }
    }

    /// Short unit label ("mm" or "in")
    pub fn label(self) -> &'static str {
        get_unit_label(self)
    }
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric (mm)"),
            Self::Imperial => write!(f, "Imperial (inches)"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "mm" | "metric (mm)" => Ok(Self::Metric),
            "imperial" | "inch" | "inches" | "in" | "imperial (inches)" => Ok(Self::Imperial),
            _ => Err(InputError::UnknownUnit {
                value: s.to_string(),
            }),
        }
    }
}

/// Format a length for display, two decimals followed by the unit label
///
/// * `value_mm` - Value in millimeters
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    format!("{:.2} {}", system.from_mm(value_mm), system.label())
}

/// Parse length string to millimeters
///
/// Blank input parses as zero. Imperial input may be a mixed fraction
/// such as `1 1/2` or `-3/8`.
///
/// * `input` - String to parse
/// * `system` - Assumed measurement system
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let value = match system {
        MeasurementSystem::Metric => parse_decimal(input)?,
        MeasurementSystem::Imperial if input.contains('/') => parse_fraction(input)?,
        MeasurementSystem::Imperial => parse_decimal(input)?,
    };

    let value_mm = system.to_mm(value);
    if !value_mm.is_finite() {
        return Err(format!("not a finite number: {}", input));
    }
    Ok(value_mm)
}

fn parse_decimal(input: &str) -> Result<f64, String> {
    input.parse::<f64>().map_err(|e| e.to_string())
}

fn parse_fraction(input: &str) -> Result<f64, String> {
    let negative = input.starts_with('-');
    let body = input.trim_start_matches('-');
    let mut total = 0.0;

    for part in body.split_whitespace() {
        if part.contains('/') {
            let frac_parts: Vec<&str> = part.split('/').collect();
            if frac_parts.len() != 2 {
                return Err("Invalid fraction format".to_string());
            }
            let num = frac_parts[0]
                .parse::<f64>()
                .map_err(|_| "Invalid numerator".to_string())?;
            let den = frac_parts[1]
                .parse::<f64>()
                .map_err(|_| "Invalid denominator".to_string())?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part
                .parse::<f64>()
                .map_err(|_| "Invalid number part".to_string())?;
        }
    }

    Ok(if negative { -total } else { total })
}

/// Get the unit label for the given system ("mm" or "in")
pub fn get_unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}
