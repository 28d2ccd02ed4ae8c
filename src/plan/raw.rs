//! Raw building-plan form data, as submitted.
//!
//! Form fields arrive in whatever shape the submitting client produced:
//! numbers may be JSON numbers or strings, flags may be booleans or junk,
//! and any field may be absent. Parsing a plan must never fail on malformed
//! field values; bad values degrade to zero/false and surface as violations
//! in the resulting report instead.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

/// A numeric form field that may arrive as a number, a numeric string,
/// or something unusable.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
    Flag(bool),
}

/// A boolean form field. Only a literal JSON `true` counts as set;
/// truthy strings and numbers do not.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawFlag {
    Bool(bool),
    Text(String),
    Number(f64),
}

/// Leading numeric prefix of a string, HTML-form style: `"12.5"` and
/// `"12.5 m"` both parse to 12.5, `"abc"` parses to nothing.
static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?").expect("valid float prefix pattern")
});

impl RawNumber {
    /// Collapse to a finite float, defaulting to zero. Never fails.
    #[must_use]
    pub fn float_or_zero(&self) -> f64 {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_float_prefix(s).unwrap_or(0.0),
            Self::Flag(_) => 0.0,
        };
        if value.is_finite() { value } else { 0.0 }
    }

    /// Collapse to a non-negative whole count, defaulting to zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn count_or_zero(&self) -> u32 {
        let value = self.float_or_zero().trunc();
        if value >= 0.0 && value <= f64::from(u32::MAX) {
            value as u32
        } else {
            0
        }
    }
}

impl RawFlag {
    /// Strict boolean coercion: only `true` is true.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }
}

fn parse_float_prefix(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    FLOAT_PREFIX
        .find(trimmed)
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Collapse an optional numeric field to a finite float, defaulting to zero.
#[must_use]
pub fn float_or_zero(field: Option<&RawNumber>) -> f64 {
    field.map_or(0.0, RawNumber::float_or_zero)
}

/// Collapse an optional numeric field to a whole count, defaulting to zero.
#[must_use]
pub fn count_or_zero(field: Option<&RawNumber>) -> u32 {
    field.map_or(0, RawNumber::count_or_zero)
}

/// Collapse an optional flag field to a strict boolean.
#[must_use]
pub fn flag_is_true(field: Option<&RawFlag>) -> bool {
    field.is_some_and(RawFlag::is_true)
}

/// A building-plan submission, exactly as the form sent it.
///
/// Field names match the submission wire format (camelCase JSON). Every
/// field is optional; the normalizer decides what absence means.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawPlanForm {
    pub project_name: Option<String>,
    pub zone_type: Option<String>,
    pub proposed_use: Option<String>,
    pub num_floors: Option<String>,
    pub plot_length: Option<RawNumber>,
    pub plot_breadth: Option<RawNumber>,
    pub road_width: Option<RawNumber>,
    pub building_height: Option<RawNumber>,
    pub built_up_area: Option<RawNumber>,
    pub setback_front: Option<RawNumber>,
    pub setback_rear: Option<RawNumber>,
    pub setback_side1: Option<RawNumber>,
    pub setback_side2: Option<RawNumber>,
    pub basement_provided: Option<RawFlag>,
    pub basement_usage: Option<String>,
    pub lift_provided: Option<RawFlag>,
    pub car_parking_spaces: Option<RawNumber>,
    pub twowheeler_parking_spaces: Option<RawNumber>,
    pub rainwater_harvesting: Option<RawFlag>,
    pub solar_panels: Option<RawFlag>,
    pub stp_installed: Option<RawFlag>,
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;
