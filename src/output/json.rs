use serde::Serialize;

use crate::error::Result;
use crate::report::ComplianceReport;

use super::{CheckedPlan, OutputFormatter};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    results: Vec<PlanResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total_plans: usize,
    compliant: usize,
    non_compliant: usize,
    warnings: usize,
}

#[derive(Serialize)]
struct PlanResult<'a> {
    path: String,
    report: &'a ComplianceReport,
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, results: &[CheckedPlan]) -> Result<String> {
        let compliant = results.iter().filter(|c| c.report.is_compliant()).count();
        let warnings = results
            .iter()
            .map(|c| c.report.compliance.warnings.len())
            .sum();

        let output = JsonOutput {
            summary: Summary {
                total_plans: results.len(),
                compliant,
                non_compliant: results.len() - compliant,
                warnings,
            },
            results: results
                .iter()
                .map(|c| PlanResult {
                    path: c.path.display().to_string(),
                    report: &c.report,
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
