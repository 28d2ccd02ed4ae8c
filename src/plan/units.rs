//! Unit conversions for plot geometry.
//!
//! Plot dimensions arrive in feet; every bye-law threshold is in meters.
//! The conversion lives here and only here so that every consumer computes
//! the same area for the same input.

/// One square foot in square meters (0.3048 m per foot, squared).
pub const SQFT_TO_SQM: f64 = 0.092903;

/// Plot area in square meters from linear dimensions in feet.
#[must_use]
pub fn plot_area_sqm(length_ft: f64, breadth_ft: f64) -> f64 {
    length_ft * breadth_ft * SQFT_TO_SQM
}

/// Round to 2 decimal places for display. Threshold comparisons must use
/// the unrounded value.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
