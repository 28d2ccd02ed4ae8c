mod rules;
mod setback;
mod verdict;

pub use rules::{compliant_items, warnings};
pub use setback::{SetbackCheck, SetbackCompliance, SetbackSide, SetbackStatus};
pub use verdict::{ComplianceVerdict, OverallStatus, recommendations};

use crate::config::Config;
use crate::plan::{RawPlanForm, normalize, plot_area_sqm};
use crate::report::{ComplianceReport, assemble};

/// The bye-law compliance engine.
///
/// A pure pipeline over one submission: normalize the raw form, derive the
/// plot area, evaluate every rule, aggregate the verdict, and assemble the
/// report. Holds nothing but configuration; invocations are independent,
/// and identical inputs produce identical reports apart from the report
/// identifier and date.
#[derive(Debug, Clone)]
pub struct ComplianceEngine {
    config: Config,
}

impl ComplianceEngine {
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Evaluate one submission. Total over its input: malformed fields
    /// degrade to zero/false and show up as violations, never as errors.
    #[must_use]
    pub fn evaluate(&self, form: &RawPlanForm) -> ComplianceReport {
        let plan = normalize(form);
        let area_sqm = plot_area_sqm(plan.plot_length_ft, plan.plot_breadth_ft);

        let setbacks = SetbackCompliance::evaluate(&plan.setbacks, &self.config.setbacks);
        let violations = setbacks.violation_messages();
        let items = compliant_items(&plan, area_sqm, &setbacks, &self.config.limits);
        let fired_warnings = warnings(&plan, area_sqm, &self.config.limits);

        let verdict = ComplianceVerdict::aggregate(violations, items, fired_warnings);
        let recommendations = recommendations(
            !verdict.violations.is_empty(),
            plan.solar_panels,
        );

        assemble(&plan, area_sqm, setbacks, verdict, recommendations)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
