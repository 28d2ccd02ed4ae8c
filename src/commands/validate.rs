use crate::cli::{Cli, ValidateArgs};
use crate::error::Result;
use crate::plan::{normalize, validate_plan};
use crate::{EXIT_CONFIG_ERROR, EXIT_NON_COMPLIANT, EXIT_SUCCESS};

use super::load_plan;

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> Result<i32> {
    let mut total_issues = 0_usize;

    for path in &args.paths {
        let form = load_plan(path)?;
        let plan = normalize(&form);
        let issues = validate_plan(&plan);

        if issues.is_empty() {
            if !cli.quiet {
                println!("✓ {}: plausible", path.display());
            }
            continue;
        }

        total_issues += issues.len();
        println!("✗ {}: {} issue(s)", path.display(), issues.len());
        for issue in &issues {
            println!("    {}: {}", issue.field, issue.message);
        }
    }

    if total_issues > 0 {
        Ok(EXIT_NON_COMPLIANT)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
