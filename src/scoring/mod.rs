//! Redevelopment prioritization scoring.
//!
//! Ranks informal-settlement census records by infrastructure deficit.
//! Each record gets six factor scores on a 0-100 scale where 100 means the
//! settlement is well served; the priority score inverts their weighted
//! mean, so the most underserved settlements rank first.

mod census;

pub use census::{SettlementRecord, parse_census_csv};

use serde::Serialize;

use crate::config::Weightage;

/// Drainage quality scores by census marker.
const DRAINAGE_BOTH: f64 = 80.0;
const DRAINAGE_CLOSED: f64 = 60.0;
const DRAINAGE_OPEN: f64 = 40.0;
const DRAINAGE_NONE: f64 = 20.0;

/// Per-factor infrastructure scores, 0-100 each.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FactorScores {
    pub water: f64,
    pub toilets: f64,
    pub drainage: f64,
    pub roads: f64,
    pub electricity: f64,
    pub density: f64,
}

impl FactorScores {
    /// Score a settlement's infrastructure coverage.
    ///
    /// Provision targets: one tap per 10 households, one latrine seat per
    /// 5 households, 1 km of paved road per 1000 residents, one domestic
    /// connection per household. Density scores fall as persons per
    /// household rise.
    #[must_use]
    pub fn evaluate(record: &SettlementRecord) -> Self {
        let households = f64::from(record.households);
        let population = f64::from(record.population);

        let water = ((f64::from(record.tap_points) / (households * 0.1).max(1.0)) * 100.0)
            .min(100.0);
        let toilet_seats =
            f64::from(record.latrines_flush + record.latrines_pit + record.community_toilets);
        let toilets = ((toilet_seats / (households * 0.2).max(1.0)) * 100.0).min(100.0);
        let roads =
            ((record.paved_road_km / (population * 0.001).max(0.1)) * 100.0).min(100.0);
        let electricity =
            ((f64::from(record.electricity_domestic) / households.max(1.0)) * 100.0).min(100.0);
        let density = (100.0 - (population / households.max(1.0)) * 10.0).max(0.0);

        Self {
            water,
            toilets,
            drainage: record.drainage_score(),
            roads,
            electricity,
            density,
        }
    }

    /// Weighted mean of the six factors, weights in percent.
    #[must_use]
    pub fn weighted_mean(&self, weights: &Weightage) -> f64 {
        (self.water * weights.water_access
            + self.toilets * weights.toilet_access
            + self.drainage * weights.drainage
            + self.roads * weights.road_infrastructure
            + self.electricity * weights.electricity
            + self.density * weights.population_density)
            / 100.0
    }
}

impl SettlementRecord {
    /// Drainage score from the census markers: best when both open and
    /// closed drains exist, worst when there are none.
    #[must_use]
    pub fn drainage_score(&self) -> f64 {
        if self.drainage_both == "BD" {
            DRAINAGE_BOTH
        } else if self.drainage_closed != "-" {
            DRAINAGE_CLOSED
        } else if self.drainage_open != "-" {
            DRAINAGE_OPEN
        } else {
            DRAINAGE_NONE
        }
    }
}

/// A settlement with its priority score and rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedSettlement {
    pub rank: usize,
    pub priority_score: i64,
    pub factors: FactorScores,
    pub record: SettlementRecord,
}

/// Score and rank settlements by redevelopment priority, highest first.
///
/// The priority score inverts the weighted infrastructure mean; ties keep
/// their input order, so ranking is deterministic.
#[must_use]
pub fn rank_settlements(records: Vec<SettlementRecord>, weights: &Weightage) -> Vec<RankedSettlement> {
    let mut scored: Vec<_> = records
        .into_iter()
        .map(|record| {
            let factors = FactorScores::evaluate(&record);
            #[allow(clippy::cast_possible_truncation)]
            let priority_score = (100.0 - factors.weighted_mean(weights)).round() as i64;
            RankedSettlement {
                rank: 0,
                priority_score,
                factors,
                record,
            }
        })
        .collect();

    scored.sort_by_key(|s| std::cmp::Reverse(s.priority_score));
    for (index, settlement) in scored.iter_mut().enumerate() {
        settlement.rank = index + 1;
    }
    scored
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
