use std::fmt::Write;

use crate::error::Result;

use super::{CheckedPlan, OutputFormatter};

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    fn format_plan(checked: &CheckedPlan, output: &mut String) {
        let report = &checked.report;
        let icon = if report.is_compliant() { "✅" } else { "❌" };

        writeln!(
            output,
            "### {icon} {} ({})\n",
            checked.path.display(),
            report.compliance.overall.as_str()
        )
        .ok();
        writeln!(
            output,
            "Report `{}` generated {}\n",
            report.report_id, report.date
        )
        .ok();

        let details = &report.project_details;
        writeln!(output, "| Field | Value |").ok();
        writeln!(output, "|-------|-------|").ok();
        writeln!(output, "| Plot area | {} sq.m |", details.plot_area).ok();
        writeln!(output, "| Building type | {} |", details.building_type).ok();
        writeln!(output, "| Zone | {} |", details.zone_type).ok();
        writeln!(output, "| Height | {} m |", details.building_height).ok();
        writeln!(output, "| Floors | {} |", details.num_floors).ok();
        writeln!(output, "| Built-up area | {} sq.m |", details.built_up_area).ok();
        writeln!(output).ok();

        writeln!(output, "| Setback | Provided | Required | Status |").ok();
        writeln!(output, "|---------|---------:|---------:|--------|").ok();
        for (side, check) in report.setbacks.checks() {
            let status = if check.is_compliant() {
                "compliant"
            } else {
                "violation"
            };
            writeln!(
                output,
                "| {} | {} m | {} m | {status} |",
                side.label(),
                check.provided,
                check.required
            )
            .ok();
        }
        writeln!(output).ok();

        Self::format_list(output, "Violations", &report.compliance.violations);
        Self::format_list(output, "Warnings", &report.compliance.warnings);
        Self::format_list(output, "Compliant items", &report.compliance.compliant_items);
        Self::format_list(output, "Recommendations", &report.recommendations);
    }

    fn format_list(output: &mut String, heading: &str, entries: &[String]) {
        if entries.is_empty() {
            return;
        }
        writeln!(output, "**{heading}**\n").ok();
        for entry in entries {
            writeln!(output, "- {entry}").ok();
        }
        writeln!(output).ok();
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, results: &[CheckedPlan]) -> Result<String> {
        let mut output = String::new();

        let compliant = results.iter().filter(|c| c.report.is_compliant()).count();

        writeln!(output, "## Bye-law Compliance Results\n").ok();
        writeln!(output, "| Metric | Count |").ok();
        writeln!(output, "|--------|------:|").ok();
        writeln!(output, "| Total Plans | {} |", results.len()).ok();
        writeln!(output, "| ✅ Compliant | {compliant} |").ok();
        writeln!(
            output,
            "| ❌ Non-compliant | {} |",
            results.len() - compliant
        )
        .ok();
        writeln!(output).ok();

        for checked in results {
            Self::format_plan(checked, &mut output);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
