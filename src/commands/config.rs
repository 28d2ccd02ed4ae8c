use std::fs;
use std::path::Path;

use crate::cli::ConfigAction;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::{BylawGuardError, EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_config(args: &crate::cli::ConfigArgs) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), format),
    }
}

fn run_config_validate(config_path: &Path) -> i32 {
    match run_config_validate_impl(config_path) {
        Ok(()) => {
            println!("Configuration is valid: {}", config_path.display());
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates a configuration file.
///
/// # Errors
/// Returns an error if the file doesn't exist, contains invalid TOML, or
/// has semantic errors.
fn run_config_validate_impl(config_path: &Path) -> Result<()> {
    if !config_path.exists() {
        return Err(BylawGuardError::Config(format!(
            "Configuration file not found: {}",
            config_path.display()
        )));
    }

    let content = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&content)?;

    validate_config_semantics(&config)
}

/// Semantic checks beyond TOML syntax: thresholds must be non-negative and
/// ordered sensibly.
///
/// # Errors
/// Returns a [`BylawGuardError::Config`] describing the first problem found.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    let setbacks = [
        ("setbacks.front", config.setbacks.front),
        ("setbacks.rear", config.setbacks.rear),
        ("setbacks.side1", config.setbacks.side1),
        ("setbacks.side2", config.setbacks.side2),
    ];
    for (name, value) in setbacks {
        if value < 0.0 || !value.is_finite() {
            return Err(BylawGuardError::Config(format!(
                "{name} must be a non-negative number, got {value}"
            )));
        }
    }

    if config.limits.max_building_height <= 0.0 {
        return Err(BylawGuardError::Config(
            "limits.max_building_height must be positive".to_string(),
        ));
    }
    if config.limits.structural_review_height > config.limits.max_building_height {
        return Err(BylawGuardError::Config(format!(
            "limits.structural_review_height ({}) exceeds max_building_height ({})",
            config.limits.structural_review_height, config.limits.max_building_height
        )));
    }
    if config.limits.min_plot_area < 0.0 || config.limits.small_plot_area < 0.0 {
        return Err(BylawGuardError::Config(
            "plot area limits must be non-negative".to_string(),
        ));
    }

    let weights = [
        ("scoring.water_access", config.scoring.water_access),
        ("scoring.toilet_access", config.scoring.toilet_access),
        ("scoring.drainage", config.scoring.drainage),
        (
            "scoring.road_infrastructure",
            config.scoring.road_infrastructure,
        ),
        ("scoring.electricity", config.scoring.electricity),
        (
            "scoring.population_density",
            config.scoring.population_density,
        ),
    ];
    for (name, value) in weights {
        if !(0.0..=100.0).contains(&value) {
            return Err(BylawGuardError::Config(format!(
                "{name} must be between 0 and 100, got {value}"
            )));
        }
    }

    Ok(())
}

fn run_config_show(config_path: Option<&Path>, format: &str) -> i32 {
    match run_config_show_impl(config_path, format) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_config_show_impl(config_path: Option<&Path>, format: &str) -> Result<()> {
    let loader = FileConfigLoader::new();
    let config = match config_path {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load()?,
    };

    let rendered = match format {
        "json" => serde_json::to_string_pretty(&config)?,
        "text" | "toml" => toml::to_string_pretty(&config)
            .map_err(|e| BylawGuardError::Config(e.to_string()))?,
        other => {
            return Err(BylawGuardError::Config(format!(
                "Unknown config output format: {other}"
            )));
        }
    };
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
