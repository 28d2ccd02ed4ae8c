pub mod check;
pub mod config;
pub mod init;
pub mod score;
pub mod validate;
pub mod zone;

pub use check::run_check;
pub use config::{run_config, validate_config_semantics};
pub use init::{generate_config_template, run_init};
pub use score::run_score;
pub use validate::run_validate;
pub use zone::run_zone;

use std::fs;
use std::path::Path;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{BylawGuardError, Result};
use crate::output::ColorMode;
use crate::plan::RawPlanForm;

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration, honoring an explicit path and `--no-config`.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }
    let loader = FileConfigLoader::new();
    match config_path {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

/// Read and parse one plan submission. A file that is not a JSON object is
/// a caller-layer error; malformed field values inside the object are not.
pub(crate) fn load_plan(path: &Path) -> Result<RawPlanForm> {
    let content = fs::read_to_string(path).map_err(|source| BylawGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|e| BylawGuardError::PlanParse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Write formatted output to a file or stdout.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    match output_path {
        Some(path) => {
            fs::write(path, content)?;
            if !quiet {
                println!("Output written to: {}", path.display());
            }
        }
        None => print!("{content}"),
    }
    Ok(())
}
