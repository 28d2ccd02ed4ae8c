use std::path::PathBuf;

use indexmap::IndexSet;
use rayon::prelude::*;

use crate::checker::ComplianceEngine;
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::error::Result;
use crate::output::{
    CheckProgress, CheckedPlan, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter,
    TextFormatter,
};
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_NON_COMPLIANT, EXIT_SUCCESS};

use super::{color_choice_to_mode, load_config, load_plan, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load configuration
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    // 2. Collect plan files: explicit files as-is, directories scanned
    let files = collect_plan_files(args, &config)?;
    if files.is_empty() && !cli.quiet {
        eprintln!("No plan files found");
    }

    // 3. Evaluate each plan (parallel with rayon)
    let engine = ComplianceEngine::new(config);
    let progress = CheckProgress::new(files.len() as u64, cli.quiet);
    let results: Vec<CheckedPlan> = files
        .par_iter()
        .map(|path| {
            let checked = load_plan(path).map(|form| CheckedPlan {
                path: path.clone(),
                report: engine.evaluate(&form),
            });
            progress.inc();
            checked
        })
        .collect::<Result<Vec<_>>>()?;
    progress.finish();

    // 4. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let formatter: Box<dyn OutputFormatter> = match args.format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(color_mode, cli.verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    };
    let output = formatter.format(&results)?;

    // 5. Write output
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    // 6. Determine exit code
    Ok(exit_code(&results, args.warn_only, args.strict))
}

fn collect_plan_files(args: &CheckArgs, config: &Config) -> Result<Vec<PathBuf>> {
    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.plans.extensions.clone());
    let mut exclude_patterns = config.plans.exclude.clone();
    exclude_patterns.extend(args.exclude.clone());
    let filter = GlobFilter::new(extensions, &exclude_patterns)?;
    let scanner = DirectoryScanner::new(filter);

    // IndexSet keeps discovery order while dropping duplicates from
    // overlapping path arguments
    let mut files: IndexSet<PathBuf> = IndexSet::new();
    for path in &args.paths {
        if path.is_dir() {
            files.extend(scanner.scan(path)?);
        } else {
            files.insert(path.clone());
        }
    }
    Ok(files.into_iter().collect())
}

fn exit_code(results: &[CheckedPlan], warn_only: bool, strict: bool) -> i32 {
    if warn_only {
        return EXIT_SUCCESS;
    }
    let has_violations = results.iter().any(|c| !c.report.is_compliant());
    let has_warnings = results
        .iter()
        .any(|c| !c.report.compliance.warnings.is_empty());
    if has_violations || (strict && has_warnings) {
        EXIT_NON_COMPLIANT
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
