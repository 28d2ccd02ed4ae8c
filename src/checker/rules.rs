//! Compliant-item and warning rules.
//!
//! These rules are independent of each other and of the setback checks.
//! Compliant items record what the plan does right; warnings are advisory
//! and never affect the overall verdict.

use crate::config::RuleLimits;
use crate::plan::{NormalizedPlan, upper_floors};

use super::setback::SetbackCompliance;

/// Compliant-item messages, in fixed order: height, plot area, parking,
/// environmental features, then the individually compliant setbacks.
#[must_use]
pub fn compliant_items(
    plan: &NormalizedPlan,
    plot_area_sqm: f64,
    setbacks: &SetbackCompliance,
    limits: &RuleLimits,
) -> Vec<String> {
    let mut items = Vec::new();

    if plan.building_height_m <= limits.max_building_height {
        items.push("Building height within permissible limits".to_string());
    }
    if plot_area_sqm >= limits.min_plot_area {
        items.push("Plot area meets minimum requirements".to_string());
    }
    if plan.car_parking_spaces >= limits.min_car_parking {
        items.push("Adequate car parking provided".to_string());
    }
    if plan.has_environmental_features() {
        items.push("Environmental features included".to_string());
    }
    items.extend(setbacks.compliant_messages());

    items
}

/// Warning messages, in fixed order: structural review, fire safety,
/// space utilization, rainwater harvesting. More than one may fire.
#[must_use]
pub fn warnings(plan: &NormalizedPlan, plot_area_sqm: f64, limits: &RuleLimits) -> Vec<String> {
    let mut warnings = Vec::new();

    if plan.building_height_m > limits.structural_review_height {
        warnings.push(format!(
            "Verify structural stability calculations for height > {}m",
            limits.structural_review_height
        ));
    }
    if upper_floors(&plan.floor_label).is_some_and(|n| n >= limits.multi_storey_upper_floors) {
        warnings.push("Ensure fire safety compliance for multi-story buildings".to_string());
    }
    if plot_area_sqm < limits.small_plot_area {
        warnings.push("Consider optimizing space utilization for small plots".to_string());
    }
    if !plan.rainwater_harvesting {
        warnings.push("Rainwater harvesting recommended for environmental compliance".to_string());
    }

    warnings
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
