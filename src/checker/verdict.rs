//! Verdict aggregation.

use serde::Serialize;

/// Overall compliance outcome. Driven solely by the violations list;
/// warnings and recommendations never change it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallStatus {
    #[serde(rename = "compliant")]
    Compliant,
    #[serde(rename = "non-compliant")]
    NonCompliant,
}

impl OverallStatus {
    #[must_use]
    pub const fn is_compliant(self) -> bool {
        matches!(self, Self::Compliant)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "compliant",
            Self::NonCompliant => "non-compliant",
        }
    }
}

/// Aggregated rule outcomes for one plan evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceVerdict {
    pub overall: OverallStatus,
    pub compliant_items: Vec<String>,
    pub warnings: Vec<String>,
    pub violations: Vec<String>,
}

impl ComplianceVerdict {
    /// Combine rule results. Overall is non-compliant iff any violation
    /// exists.
    #[must_use]
    pub fn aggregate(
        violations: Vec<String>,
        compliant_items: Vec<String>,
        warnings: Vec<String>,
    ) -> Self {
        let overall = if violations.is_empty() {
            OverallStatus::Compliant
        } else {
            OverallStatus::NonCompliant
        };
        Self {
            overall,
            compliant_items,
            warnings,
            violations,
        }
    }
}

/// Recommendation list for a verdict.
///
/// Four boilerplate entries always present; a setback-violation entry is
/// prepended when violations exist, and a solar-panel suggestion appended
/// when the plan lacks panels. Order is part of the contract.
#[must_use]
pub fn recommendations(has_violations: bool, solar_panels: bool) -> Vec<String> {
    let mut recommendations = vec![
        "Ensure all construction follows approved building plans".to_string(),
        "Implement proper waste management systems".to_string(),
        "Consider green building practices for sustainability".to_string(),
        "Regular structural inspections during construction".to_string(),
    ];

    if has_violations {
        recommendations.insert(
            0,
            "Address all setback violations before proceeding with construction".to_string(),
        );
    }
    if !solar_panels {
        recommendations.push("Consider installing solar panels for energy efficiency".to_string());
    }

    recommendations
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
