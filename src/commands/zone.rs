use std::fmt::Write as FmtWrite;
use std::fs;

use crate::cli::{Cli, ZoneArgs};
use crate::error::{BylawGuardError, Result};
use crate::output::OutputFormat;
use crate::zoning::{Ward, ZoneAnalysis, analyze_zone};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::write_output;

#[must_use]
pub fn run_zone(args: &ZoneArgs, cli: &Cli) -> i32 {
    match run_zone_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_zone_impl(args: &ZoneArgs, cli: &Cli) -> Result<()> {
    let content = fs::read_to_string(&args.wards).map_err(|source| BylawGuardError::FileRead {
        path: args.wards.clone(),
        source,
    })?;
    let wards: Vec<Ward> = serde_json::from_str(&content)?;
    let analysis = analyze_zone(&wards)?;

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&analysis)?,
        OutputFormat::Text | OutputFormat::Markdown => format_text(&analysis),
    };
    write_output(args.output.as_deref(), &output, cli.quiet)
}

fn format_text(analysis: &ZoneAnalysis) -> String {
    let mut output = String::new();
    let sections = [
        ("Overall Assessment", &analysis.overall_assessment),
        ("Zone Viability", &analysis.zone_viability),
        ("Population Analysis", &analysis.population_analysis),
        (
            "Infrastructure Implications",
            &analysis.infrastructure_implications,
        ),
        (
            "Administrative Efficiency",
            &analysis.administrative_efficiency,
        ),
        (
            "Development Opportunities",
            &analysis.development_opportunities,
        ),
        ("Challenges", &analysis.challenges),
    ];

    for (heading, body) in sections {
        writeln!(output, "{heading}\n{body}\n").ok();
    }
    writeln!(output, "Recommendations").ok();
    for recommendation in &analysis.recommendations {
        writeln!(output, "  - {recommendation}").ok();
    }
    output
}

#[cfg(test)]
#[path = "zone_tests.rs"]
mod tests;
