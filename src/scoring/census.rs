//! Census CSV parsing for the settlement register.
//!
//! The register is a plain comma-separated export with a fixed 21-column
//! layout and no embedded commas in values. Rows without a settlement name
//! or with zero population carry no usable signal and are skipped.

use serde::Serialize;

use crate::error::{BylawGuardError, Result};

/// Column count of the census export.
const CENSUS_COLUMNS: usize = 21;

/// One settlement row from the census register.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettlementRecord {
    pub serial: String,
    pub class: String,
    pub town_name: String,
    pub settlement_name: String,
    pub notified: String,
    pub households: u32,
    pub population: u32,
    pub paved_road_km: f64,
    pub drainage_open: String,
    pub drainage_closed: String,
    pub drainage_both: String,
    pub drainage_none: String,
    pub latrines_pit: u32,
    pub latrines_flush: u32,
    pub latrines_service: u32,
    pub latrines_other: u32,
    pub community_toilets: u32,
    pub tap_points: u32,
    pub electricity_domestic: u32,
    pub electricity_street: u32,
    pub electricity_other: u32,
}

fn field(values: &[&str], index: usize) -> String {
    values.get(index).map_or(String::new(), |v| (*v).to_string())
}

fn count(values: &[&str], index: usize) -> u32 {
    values
        .get(index)
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

fn km(values: &[&str], index: usize) -> f64 {
    values
        .get(index)
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
}

fn parse_row(line: &str) -> SettlementRecord {
    let values: Vec<&str> = line.split(',').map(|v| v.trim().trim_matches('"')).collect();

    SettlementRecord {
        serial: field(&values, 0),
        class: field(&values, 1),
        town_name: field(&values, 2),
        settlement_name: field(&values, 3),
        notified: field(&values, 4),
        households: count(&values, 5),
        population: count(&values, 6),
        paved_road_km: km(&values, 7),
        drainage_open: field(&values, 8),
        drainage_closed: field(&values, 9),
        drainage_both: field(&values, 10),
        drainage_none: field(&values, 11),
        latrines_pit: count(&values, 12),
        latrines_flush: count(&values, 13),
        latrines_service: count(&values, 14),
        latrines_other: count(&values, 15),
        community_toilets: count(&values, 16),
        tap_points: count(&values, 17),
        electricity_domestic: count(&values, 18),
        electricity_street: count(&values, 19),
        electricity_other: count(&values, 20),
    }
}

/// Parse the census register. The first line is a header; rows with an
/// empty settlement name or zero population are dropped.
///
/// # Errors
/// Returns an error if the content has no header line or a row has grown
/// extra columns (a sign the export format changed).
pub fn parse_census_csv(content: &str) -> Result<Vec<SettlementRecord>> {
    let mut lines = content.lines();
    lines
        .next()
        .ok_or_else(|| BylawGuardError::Census {
            line: 1,
            reason: "missing header line".to_string(),
        })?;

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let column_count = line.split(',').count();
        if column_count > CENSUS_COLUMNS {
            return Err(BylawGuardError::Census {
                // +2: 1-based and the header was line 1
                line: index + 2,
                reason: format!("expected at most {CENSUS_COLUMNS} columns, found {column_count}"),
            });
        }
        let record = parse_row(line);
        if record.settlement_name.is_empty() || record.population == 0 {
            continue;
        }
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
#[path = "census_tests.rs"]
mod tests;
