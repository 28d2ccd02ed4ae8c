//! Compliance report assembly.
//!
//! The report is the single immutable value handed back to the caller.
//! Persistence and rendering are the caller's business; nothing here does
//! I/O beyond reading the clock for the identifier and date fields.

mod id;

pub use id::{REPORT_ID_PREFIX, generate as generate_report_id};

use chrono::Local;
use serde::Serialize;

use crate::checker::{ComplianceVerdict, SetbackCompliance};
use crate::plan::{NormalizedPlan, round2};

/// Regulatory references attached verbatim to every report.
pub const REGULATORY_REFERENCES: [&str; 5] = [
    "BBMP Building Bye-laws 2020 - Section 4.2 (Setbacks)",
    "National Building Code 2016 - Part 3 (Development Control)",
    "Karnataka Municipal Corporation Act - Schedule II",
    "BBMP Zoning Regulations - R1 Zone Requirements",
    "Karnataka Fire Force Act - Fire Safety Requirements",
];

/// Snapshot of the project's headline numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    /// Plot area in square meters, rounded to 2 decimals for display.
    pub plot_area: f64,
    pub building_type: String,
    pub zone_type: String,
    pub building_height: f64,
    pub num_floors: String,
    pub built_up_area: f64,
}

/// Parking provision counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingCounts {
    pub car: u32,
    pub two_wheeler: u32,
}

/// Environmental feature flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentalFeatures {
    pub rainwater_harvesting: bool,
    pub solar_panels: bool,
    pub stp: bool,
}

/// Feature snapshot with strictly-coerced booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Features {
    pub basement: bool,
    pub lift: bool,
    pub parking: ParkingCounts,
    pub environmental: EnvironmentalFeatures,
}

/// A complete compliance report, immutable once assembled.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub report_id: String,
    pub date: String,
    pub project_details: ProjectDetails,
    pub setbacks: SetbackCompliance,
    pub compliance: ComplianceVerdict,
    pub features: Features,
    pub recommendations: Vec<String>,
    pub references: Vec<String>,
}

impl ComplianceReport {
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.compliance.overall.is_compliant()
    }
}

/// Package an evaluation into its report.
///
/// Display fallbacks are applied here and only here: a blank proposed use
/// reads as residential, a blank zone as R1, a blank floor label as G+1.
#[must_use]
pub fn assemble(
    plan: &NormalizedPlan,
    plot_area_sqm: f64,
    setbacks: SetbackCompliance,
    compliance: ComplianceVerdict,
    recommendations: Vec<String>,
) -> ComplianceReport {
    let building_type = if plan.proposed_use.is_empty() {
        "residential".to_string()
    } else {
        plan.proposed_use.to_lowercase()
    };
    let zone_type = if plan.zone_type.is_empty() {
        "R1".to_string()
    } else {
        plan.zone_type.clone()
    };
    let num_floors = if plan.floor_label.is_empty() {
        "G+1".to_string()
    } else {
        plan.floor_label.clone()
    };

    ComplianceReport {
        report_id: id::generate(),
        date: Local::now().format("%d/%m/%Y").to_string(),
        project_details: ProjectDetails {
            plot_area: round2(plot_area_sqm),
            building_type,
            zone_type,
            building_height: plan.building_height_m,
            num_floors,
            built_up_area: plan.built_up_area_sqm,
        },
        setbacks,
        compliance,
        features: Features {
            basement: plan.basement.is_provided(),
            lift: plan.lift_provided,
            parking: ParkingCounts {
                car: plan.car_parking_spaces,
                two_wheeler: plan.two_wheeler_parking_spaces,
            },
            environmental: EnvironmentalFeatures {
                rainwater_harvesting: plan.rainwater_harvesting,
                solar_panels: plan.solar_panels,
                stp: plan.stp_installed,
            },
        },
        recommendations,
        references: REGULATORY_REFERENCES
            .iter()
            .map(ToString::to_string)
            .collect(),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
