//! Ward zone analysis.
//!
//! Aggregates a selected set of wards into a zone profile and renders a
//! deterministic planning assessment from it. Same wards in, same words
//! out; there is no model behind this, only thresholds and templates.

use serde::{Deserialize, Serialize};

use crate::error::{BylawGuardError, Result};

/// Density above which a zone counts as high-density, persons/km².
const HIGH_DENSITY: f64 = 20_000.0;

/// Density above which viability is strained, persons/km².
const OVERCROWDED_DENSITY: f64 = 25_000.0;

/// Density above which infrastructure support is a precondition.
const SUPPORTED_DENSITY: f64 = 15_000.0;

/// Ward count above which a zone needs coordinated governance.
const LARGE_ZONE_WARDS: usize = 5;

/// Ward count above which a joint development authority is suggested.
const AUTHORITY_WARDS: usize = 8;

/// Single-ward area considered expansion-capable, km².
const LARGE_WARD_AREA_SQKM: f64 = 10.0;

/// Ward population needing priority service delivery.
const HIGH_POPULATION_WARD: u32 = 30_000;

/// Estimated infrastructure investment per resident, thousands of rupees.
const INVESTMENT_PER_RESIDENT: f64 = 12.0;

/// A municipal ward, as selected for analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    pub ward_no: u32,
    pub ward_name: String,
    pub population: u32,
    pub area_sqkm: f64,
}

/// Aggregate numbers for a selected zone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneProfile {
    pub ward_count: usize,
    pub total_population: u64,
    pub total_area_sqkm: f64,
    pub average_density: u64,
}

impl ZoneProfile {
    fn of(wards: &[Ward]) -> Self {
        let total_population: u64 = wards.iter().map(|w| u64::from(w.population)).sum();
        let total_area_sqkm: f64 = wards.iter().map(|w| w.area_sqkm).sum();
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let average_density = if total_area_sqkm > 0.0 {
            ((total_population as f64) / total_area_sqkm).round() as u64
        } else {
            0
        };
        Self {
            ward_count: wards.len(),
            total_population,
            total_area_sqkm,
            average_density,
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn density(&self) -> f64 {
        self.average_density as f64
    }

    fn is_high_density(&self) -> bool {
        self.density() > HIGH_DENSITY
    }

    fn is_large_zone(&self) -> bool {
        self.ward_count > LARGE_ZONE_WARDS
    }

    /// Estimated infrastructure investment, crores of rupees.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn investment_crores(&self) -> u64 {
        ((self.total_population as f64) * INVESTMENT_PER_RESIDENT / 1000.0).round() as u64
    }

    const fn investment_years(&self) -> &'static str {
        if self.ward_count <= 3 {
            "3-4"
        } else if self.ward_count <= 6 {
            "4-5"
        } else {
            "5-7"
        }
    }
}

/// The full templated assessment of a zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneAnalysis {
    pub profile: ZoneProfile,
    pub overall_assessment: String,
    pub zone_viability: String,
    pub population_analysis: String,
    pub infrastructure_implications: String,
    pub administrative_efficiency: String,
    pub development_opportunities: String,
    pub challenges: String,
    pub recommendations: Vec<String>,
}

/// Group digits with thousands separators for readable counts.
fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Analyze a selected set of wards.
///
/// # Errors
/// Returns [`BylawGuardError::EmptyZone`] when no wards are given; every
/// other input produces an analysis.
pub fn analyze_zone(wards: &[Ward]) -> Result<ZoneAnalysis> {
    if wards.is_empty() {
        return Err(BylawGuardError::EmptyZone);
    }

    let profile = ZoneProfile::of(wards);
    let has_large_wards = wards.iter().any(|w| w.area_sqkm > LARGE_WARD_AREA_SQKM);
    let high_population_wards = wards
        .iter()
        .filter(|w| w.population > HIGH_POPULATION_WARD)
        .count();

    Ok(ZoneAnalysis {
        overall_assessment: overall_assessment(&profile, has_large_wards),
        zone_viability: zone_viability(&profile),
        population_analysis: population_analysis(&profile, high_population_wards),
        infrastructure_implications: infrastructure_implications(&profile),
        administrative_efficiency: administrative_efficiency(&profile),
        development_opportunities: development_opportunities(&profile, has_large_wards),
        challenges: challenges(&profile),
        recommendations: recommendations(&profile, has_large_wards),
        profile,
    })
}

fn overall_assessment(profile: &ZoneProfile, has_large_wards: bool) -> String {
    format!(
        "This {}-ward zone covering {:.1} km² with {} residents shows {}. \
         The zone demonstrates {} with {}.",
        profile.ward_count,
        profile.total_area_sqkm,
        group_digits(profile.total_population),
        if profile.is_high_density() {
            "high urban density requiring intensive infrastructure planning"
        } else {
            "moderate density suitable for balanced development"
        },
        if profile.is_large_zone() {
            "complex administrative coordination needs"
        } else {
            "manageable governance structure"
        },
        if has_large_wards {
            "significant expansion potential"
        } else {
            "focused development opportunities"
        },
    )
}

fn zone_viability(profile: &ZoneProfile) -> String {
    let tier = if profile.density() > OVERCROWDED_DENSITY {
        "challenging due to overcrowding"
    } else if profile.density() > SUPPORTED_DENSITY {
        "good with proper infrastructure support"
    } else {
        "excellent with room for growth"
    };
    format!(
        "Zone viability is {tier}. The {} wards provide {}. \
         Population density of {}/km² {}.",
        profile.ward_count,
        if profile.is_large_zone() {
            "diverse development options but require coordinated planning"
        } else {
            "focused development potential with streamlined implementation"
        },
        group_digits(profile.average_density),
        if profile.is_high_density() {
            "demands immediate infrastructure upgrades"
        } else {
            "supports sustainable development patterns"
        },
    )
}

fn population_analysis(profile: &ZoneProfile, high_population_wards: usize) -> String {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let per_ward = ((profile.total_population as f64) / (profile.ward_count as f64)).round() as u64;
    format!(
        "The zone's {} residents are distributed across {} wards with an average \
         of {} people per ward. Population density of {}/km² {}. {}",
        group_digits(profile.total_population),
        profile.ward_count,
        group_digits(per_ward),
        group_digits(profile.average_density),
        if profile.is_high_density() {
            "indicates urban stress requiring traffic management, public transport, \
             and service optimization"
        } else {
            "suggests balanced living conditions with adequate space for amenities \
             and green areas"
        },
        if high_population_wards > 0 {
            "High-population wards need priority attention for service delivery."
        } else {
            "Population distribution allows for equitable resource allocation."
        },
    )
}

fn infrastructure_implications(profile: &ZoneProfile) -> String {
    format!(
        "Infrastructure requirements are {} given the {}/km² density. Priority \
         needs include {}. Estimated infrastructure investment: ₹{} crores. {}",
        if profile.is_high_density() {
            "substantial"
        } else {
            "moderate"
        },
        group_digits(profile.average_density),
        if profile.is_high_density() {
            "mass transit systems, multi-level parking, advanced waste management, \
             and high-capacity utilities"
        } else {
            "improved road networks, reliable utilities, community facilities, and \
             digital infrastructure"
        },
        group_digits(profile.investment_crores()),
        if profile.is_large_zone() {
            "Multi-ward coordination essential for integrated infrastructure development."
        } else {
            "Focused infrastructure planning enables efficient implementation."
        },
    )
}

fn administrative_efficiency(profile: &ZoneProfile) -> String {
    format!(
        "Administrative coordination across {} wards is {}. {}. Service delivery \
         efficiency {}.",
        profile.ward_count,
        if profile.is_large_zone() {
            "complex requiring unified governance structures and technology-enabled \
             coordination"
        } else {
            "manageable with existing administrative frameworks"
        },
        if profile.ward_count > AUTHORITY_WARDS {
            "Consider establishing joint development authority for streamlined \
             decision-making"
        } else {
            "Standard inter-ward coordination mechanisms should suffice"
        },
        if profile.is_high_density() {
            "requires optimization through technology and resource pooling"
        } else {
            "can be maintained through conventional approaches with gradual improvements"
        },
    )
}

fn development_opportunities(profile: &ZoneProfile, has_large_wards: bool) -> String {
    format!(
        "Development potential is {}. Key opportunities include {}. {}. Market \
         potential supports {}.",
        if has_large_wards {
            "excellent with significant land availability"
        } else {
            "good through infill and redevelopment projects"
        },
        if has_large_wards {
            "new townships, IT parks, educational institutions, and large-scale \
             recreational facilities"
        } else {
            "mixed-use developments, urban renewal, vertical construction, and \
             community-focused projects"
        },
        if profile.total_area_sqkm > 50.0 {
            "Large area enables comprehensive master planning with phased development"
        } else {
            "Compact area allows for intensive, well-integrated development"
        },
        if profile.is_high_density() {
            "premium developments and commercial hubs"
        } else {
            "diverse housing options and local business centers"
        },
    )
}

fn challenges(profile: &ZoneProfile) -> String {
    format!(
        "Primary challenges include {}. {}. {}. Environmental compliance and \
         community engagement require continuous attention throughout development.",
        if profile.is_large_zone() {
            "multi-ward coordination complexity, diverse stakeholder management, and \
             large-scale project oversight"
        } else {
            "optimizing limited space, managing growth pressures, and maintaining \
             service quality"
        },
        if profile.is_high_density() {
            "High density creates traffic congestion, parking shortages, and utility \
             strain requiring immediate attention"
        } else {
            "Moderate density allows for proactive planning to prevent future issues"
        },
        if profile.is_large_zone() {
            "Administrative coordination across multiple wards may slow decision-making \
             and implementation"
        } else {
            "Fewer wards enable faster consensus and execution"
        },
    )
}

fn recommendations(profile: &ZoneProfile, has_large_wards: bool) -> Vec<String> {
    vec![
        if profile.is_large_zone() {
            "Establish unified development authority for coordinated planning".to_string()
        } else {
            "Strengthen inter-ward coordination mechanisms".to_string()
        },
        if profile.is_high_density() {
            "Implement traffic management and public transport solutions immediately".to_string()
        } else {
            "Plan transportation infrastructure to support future growth".to_string()
        },
        format!(
            "Invest ₹{} crores in infrastructure over {} years",
            group_digits(profile.investment_crores()),
            profile.investment_years()
        ),
        if has_large_wards {
            "Develop master plan with phased implementation for large available areas".to_string()
        } else {
            "Focus on infill development and urban renewal projects".to_string()
        },
        "Engage communities early and maintain transparent communication throughout development"
            .to_string(),
        if profile.density() > SUPPORTED_DENSITY {
            "Prioritize environmental sustainability and green building standards".to_string()
        } else {
            "Integrate environmental planning from the outset".to_string()
        },
        "Monitor development progress through digital dashboards and regular stakeholder reviews"
            .to_string(),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
