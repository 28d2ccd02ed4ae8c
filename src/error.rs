use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BylawGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse plan file {path}: {reason}")]
    PlanParse { path: PathBuf, reason: String },

    #[error("Invalid census record on line {line}: {reason}")]
    Census { line: usize, reason: String },

    #[error("No wards selected for zone analysis")]
    EmptyZone,
}

pub type Result<T> = std::result::Result<T, BylawGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
