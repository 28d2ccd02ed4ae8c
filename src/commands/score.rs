use std::fmt::Write as FmtWrite;
use std::fs;

use serde::Serialize;

use crate::cli::{Cli, ScoreArgs};
use crate::error::{BylawGuardError, Result};
use crate::output::OutputFormat;
use crate::scoring::{RankedSettlement, parse_census_csv, rank_settlements};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::{load_config, write_output};

#[must_use]
pub fn run_score(args: &ScoreArgs, cli: &Cli) -> i32 {
    match run_score_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_score_impl(args: &ScoreArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let content =
        fs::read_to_string(&args.census).map_err(|source| BylawGuardError::FileRead {
            path: args.census.clone(),
            source,
        })?;
    let records = parse_census_csv(&content)?;
    let mut ranked = rank_settlements(records, &config.scoring);

    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    let output = match args.format {
        OutputFormat::Json => format_json(&ranked)?,
        OutputFormat::Text | OutputFormat::Markdown => format_text(&ranked),
    };
    write_output(args.output.as_deref(), &output, cli.quiet)
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    total_settlements: usize,
    settlements: &'a [RankedSettlement],
}

fn format_json(ranked: &[RankedSettlement]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOutput {
        total_settlements: ranked.len(),
        settlements: ranked,
    })?)
}

fn format_text(ranked: &[RankedSettlement]) -> String {
    let mut output = String::new();
    writeln!(
        output,
        "{:<5} {:<6} {:<30} {:<20} {:>10}",
        "Rank", "Score", "Settlement", "Town", "Population"
    )
    .ok();
    for settlement in ranked {
        writeln!(
            output,
            "{:<5} {:<6} {:<30} {:<20} {:>10}",
            settlement.rank,
            settlement.priority_score,
            settlement.record.settlement_name,
            settlement.record.town_name,
            settlement.record.population
        )
        .ok();
    }
    writeln!(output, "\n{} settlements ranked", ranked.len()).ok();
    output
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
