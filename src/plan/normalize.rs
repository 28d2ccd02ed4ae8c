//! Normalization of raw form submissions into fully-typed plan values.

use serde::Serialize;

use super::raw::{RawPlanForm, count_or_zero, flag_is_true, float_or_zero};

/// Basement usage categories offered by the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BasementUse {
    Parking,
    Storage,
    Utility,
}

impl BasementUse {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "parking" => Some(Self::Parking),
            "storage" => Some(Self::Storage),
            "utility" => Some(Self::Utility),
            _ => None,
        }
    }
}

/// Basement provision. Usage only exists when a basement does, so the
/// "usage implies provided" invariant holds by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Basement {
    Absent,
    Present(BasementUse),
}

impl Basement {
    #[must_use]
    pub const fn is_provided(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// The four setback distances of a plot, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SetbackDistances {
    pub front: f64,
    pub rear: f64,
    pub side1: f64,
    pub side2: f64,
}

/// A building plan with every field coerced to its proper type.
///
/// Produced by [`normalize`]; never fails to exist. Missing or garbled
/// numeric fields are zero, missing flags are false, and the free-text
/// fields keep whatever the form sent (fallbacks are applied at report
/// assembly, not here).
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct NormalizedPlan {
    pub project_name: String,
    pub zone_type: String,
    pub proposed_use: String,
    pub floor_label: String,
    pub plot_length_ft: f64,
    pub plot_breadth_ft: f64,
    pub road_width_ft: f64,
    pub building_height_m: f64,
    pub built_up_area_sqm: f64,
    pub setbacks: SetbackDistances,
    pub basement: Basement,
    pub lift_provided: bool,
    pub car_parking_spaces: u32,
    pub two_wheeler_parking_spaces: u32,
    pub rainwater_harvesting: bool,
    pub solar_panels: bool,
    pub stp_installed: bool,
}

impl NormalizedPlan {
    /// True when any environmental feature is present.
    #[must_use]
    pub const fn has_environmental_features(&self) -> bool {
        self.rainwater_harvesting || self.solar_panels || self.stp_installed
    }
}

/// Coerce a raw submission into typed values. Total: every possible
/// `RawPlanForm` normalizes to some plan.
#[must_use]
pub fn normalize(raw: &RawPlanForm) -> NormalizedPlan {
    let basement = if flag_is_true(raw.basement_provided.as_ref()) {
        // The form preselects parking when the basement box is ticked, so
        // an unusable usage string falls back to that same default.
        let usage = raw
            .basement_usage
            .as_deref()
            .and_then(BasementUse::parse)
            .unwrap_or(BasementUse::Parking);
        Basement::Present(usage)
    } else {
        Basement::Absent
    };

    NormalizedPlan {
        project_name: raw.project_name.clone().unwrap_or_default(),
        zone_type: raw.zone_type.clone().unwrap_or_default(),
        proposed_use: raw.proposed_use.clone().unwrap_or_default(),
        floor_label: raw.num_floors.clone().unwrap_or_default(),
        plot_length_ft: float_or_zero(raw.plot_length.as_ref()),
        plot_breadth_ft: float_or_zero(raw.plot_breadth.as_ref()),
        road_width_ft: float_or_zero(raw.road_width.as_ref()),
        building_height_m: float_or_zero(raw.building_height.as_ref()),
        built_up_area_sqm: float_or_zero(raw.built_up_area.as_ref()),
        setbacks: SetbackDistances {
            front: float_or_zero(raw.setback_front.as_ref()),
            rear: float_or_zero(raw.setback_rear.as_ref()),
            side1: float_or_zero(raw.setback_side1.as_ref()),
            side2: float_or_zero(raw.setback_side2.as_ref()),
        },
        basement,
        lift_provided: flag_is_true(raw.lift_provided.as_ref()),
        car_parking_spaces: count_or_zero(raw.car_parking_spaces.as_ref()),
        two_wheeler_parking_spaces: count_or_zero(raw.twowheeler_parking_spaces.as_ref()),
        rainwater_harvesting: flag_is_true(raw.rainwater_harvesting.as_ref()),
        solar_panels: flag_is_true(raw.solar_panels.as_ref()),
        stp_installed: flag_is_true(raw.stp_installed.as_ref()),
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
