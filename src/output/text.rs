use std::fmt::Write;

use crate::error::Result;

use super::{CheckedPlan, OutputFormatter};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn format_plan(&self, checked: &CheckedPlan, output: &mut String) {
        let report = &checked.report;
        let (icon, status, color) = if report.is_compliant() {
            ("✓", "COMPLIANT", ansi::GREEN)
        } else {
            ("✗", "NON-COMPLIANT", ansi::RED)
        };

        writeln!(
            output,
            "{icon} {}: {} [{}]",
            self.paint(status, color),
            checked.path.display(),
            report.report_id
        )
        .ok();

        for violation in &report.compliance.violations {
            writeln!(output, "    {} {violation}", self.paint("✗", ansi::RED)).ok();
        }
        for warning in &report.compliance.warnings {
            writeln!(output, "    {} {warning}", self.paint("⚠", ansi::YELLOW)).ok();
        }

        if self.verbose > 0 {
            let details = &report.project_details;
            writeln!(
                output,
                "    plot {} sq.m | {} | zone {} | height {}m | {}",
                details.plot_area,
                details.building_type,
                details.zone_type,
                details.building_height,
                details.num_floors
            )
            .ok();
            for item in &report.compliance.compliant_items {
                writeln!(output, "    {} {item}", self.paint("✓", ansi::GREEN)).ok();
            }
        }
        if self.verbose > 1 {
            writeln!(output, "    Recommendations:").ok();
            for recommendation in &report.recommendations {
                writeln!(output, "      - {recommendation}").ok();
            }
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, results: &[CheckedPlan]) -> Result<String> {
        let mut output = String::new();

        for checked in results {
            self.format_plan(checked, &mut output);
        }

        let compliant = results.iter().filter(|c| c.report.is_compliant()).count();
        let non_compliant = results.len() - compliant;
        let warnings: usize = results
            .iter()
            .map(|c| c.report.compliance.warnings.len())
            .sum();

        writeln!(
            output,
            "\nSummary: {} plans checked, {} compliant, {} non-compliant, {} warnings",
            results.len(),
            compliant,
            non_compliant,
            warnings
        )
        .ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
