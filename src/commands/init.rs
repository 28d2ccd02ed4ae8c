use std::fs;

use crate::{BylawGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(BylawGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let template = generate_config_template();

    fs::write(output_path, template)?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# bylaw-guard configuration file
# See: https://github.com/civicgrid/bylaw-guard for documentation

# Minimum required setbacks in meters (BBMP R1-zone defaults)
[setbacks]
front = 3.0
rear = 2.0
side1 = 1.5
side2 = 1.5

# Rule thresholds
[limits]
# Maximum permissible building height in meters
max_building_height = 15.0

# Height above which structural verification is advised (strictly greater than)
structural_review_height = 12.0

# Minimum plot area in square meters
min_plot_area = 100.0

# Plot area below which space-utilization advice fires
small_plot_area = 200.0

# Minimum car parking spaces considered adequate
min_car_parking = 1

# Upper floors at which the multi-storey fire-safety advice fires
multi_storey_upper_floors = 2

# Redevelopment scoring weightage in percent (conventionally sums to 100)
[scoring]
water_access = 20
toilet_access = 20
drainage = 15
road_infrastructure = 15
electricity = 15
population_density = 15

# Plan-file discovery for directory scans
[plans]
extensions = ["json"]
# exclude = ["**/drafts/**"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
