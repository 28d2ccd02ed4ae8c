//! Plausibility validation for plan submissions.
//!
//! The compliance engine is deliberately permissive; these checks are the
//! separate validation layer that catches incomplete or implausible forms
//! before anyone trusts a verdict built from them. `check` never consults
//! them, `validate` reports them.

use super::floors::total_floors;
use super::normalize::NormalizedPlan;
use super::units::plot_area_sqm;

/// Assumed storey height when cross-checking the floor label, meters.
const METERS_PER_FLOOR: f64 = 3.5;

/// Permitted variance between declared height and the label-implied
/// height, meters.
const HEIGHT_VARIANCE_M: f64 = 2.0;

/// Plausible plot-area range, square meters.
const PLOT_AREA_RANGE_SQM: (f64, f64) = (50.0, 10_000.0);

/// A single failed plausibility check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub message: String,
}

impl ValidationIssue {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

struct RangeCheck {
    field: &'static str,
    label: &'static str,
    value: f64,
    min: f64,
    max: f64,
}

impl RangeCheck {
    fn issue(&self) -> Option<ValidationIssue> {
        if self.value < self.min {
            let message = if self.min > 0.0 {
                format!("{} must be greater than 0", self.label)
            } else {
                format!("{} cannot be negative", self.label)
            };
            Some(ValidationIssue::new(self.field, message))
        } else if self.value > self.max {
            Some(ValidationIssue::new(
                self.field,
                format!("{} seems too large", self.label),
            ))
        } else {
            None
        }
    }
}

fn range_checks(plan: &NormalizedPlan) -> [RangeCheck; 11] {
    let range = |field, label, value, min, max| RangeCheck {
        field,
        label,
        value,
        min,
        max,
    };
    [
        range("plotLength", "Plot length", plan.plot_length_ft, 1.0, 1000.0),
        range(
            "plotBreadth",
            "Plot breadth",
            plan.plot_breadth_ft,
            1.0,
            1000.0,
        ),
        range("roadWidth", "Road width", plan.road_width_ft, 1.0, 200.0),
        range(
            "buildingHeight",
            "Building height",
            plan.building_height_m,
            1.0,
            100.0,
        ),
        range(
            "builtUpArea",
            "Built-up area",
            plan.built_up_area_sqm,
            1.0,
            10_000.0,
        ),
        range(
            "setbackFront",
            "Front setback",
            plan.setbacks.front,
            0.0,
            50.0,
        ),
        range("setbackRear", "Rear setback", plan.setbacks.rear, 0.0, 50.0),
        range(
            "setbackSide1",
            "Side 1 setback",
            plan.setbacks.side1,
            0.0,
            50.0,
        ),
        range(
            "setbackSide2",
            "Side 2 setback",
            plan.setbacks.side2,
            0.0,
            50.0,
        ),
        range(
            "carParkingSpaces",
            "Car parking spaces",
            f64::from(plan.car_parking_spaces),
            0.0,
            100.0,
        ),
        range(
            "twowheelerParkingSpaces",
            "Two-wheeler parking spaces",
            f64::from(plan.two_wheeler_parking_spaces),
            0.0,
            200.0,
        ),
    ]
}

/// Run every plausibility check against a normalized plan.
///
/// Returns the issues in form order; an empty vec means the submission is
/// plausible (which says nothing about bye-law compliance).
#[must_use]
pub fn validate_plan(plan: &NormalizedPlan) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if plan.project_name.trim().is_empty() {
        issues.push(ValidationIssue::new(
            "projectName",
            "Project name is required",
        ));
    } else if plan.project_name.len() > 100 {
        issues.push(ValidationIssue::new(
            "projectName",
            "Project name is too long",
        ));
    }
    if plan.zone_type.trim().is_empty() {
        issues.push(ValidationIssue::new("zoneType", "Zone type is required"));
    }
    if plan.proposed_use.trim().is_empty() {
        issues.push(ValidationIssue::new(
            "proposedUse",
            "Proposed use is required",
        ));
    }
    if plan.floor_label.trim().is_empty() {
        issues.push(ValidationIssue::new(
            "numFloors",
            "Number of floors is required",
        ));
    }

    issues.extend(range_checks(plan).iter().filter_map(RangeCheck::issue));

    if !plot_area_plausible(plan.plot_length_ft, plan.plot_breadth_ft) {
        issues.push(ValidationIssue::new(
            "plotLength",
            "Plot area falls outside the plausible 50\u{2013}10000 sq.m range",
        ));
    }
    if !height_matches_floors(plan.building_height_m, &plan.floor_label) {
        issues.push(ValidationIssue::new(
            "buildingHeight",
            "Building height is inconsistent with the declared floor count",
        ));
    }

    issues
}

/// Whether the plot area implied by the linear dimensions is a realistic
/// urban plot.
#[must_use]
pub fn plot_area_plausible(length_ft: f64, breadth_ft: f64) -> bool {
    let area = plot_area_sqm(length_ft, breadth_ft);
    let (min, max) = PLOT_AREA_RANGE_SQM;
    area >= min && area <= max
}

/// Whether the declared height is consistent with the floor label,
/// assuming 3.5 m per storey with a 2 m variance.
#[must_use]
pub fn height_matches_floors(height_m: f64, floor_label: &str) -> bool {
    let expected = f64::from(total_floors(floor_label)) * METERS_PER_FLOOR;
    (height_m - expected).abs() <= HEIGHT_VARIANCE_M
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
