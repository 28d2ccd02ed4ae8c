#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the bylaw-guard binary.
#[macro_export]
macro_rules! bylaw_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("bylaw-guard"))
    };
}

/// A fully compliant plan submission.
pub const COMPLIANT_PLAN: &str = r#"{
    "projectName": "Lakeview Residence",
    "zoneType": "R1",
    "proposedUse": "residential",
    "numFloors": "G+2",
    "plotLength": 40,
    "plotBreadth": 60,
    "roadWidth": 30,
    "buildingHeight": 12,
    "builtUpArea": 180,
    "setbackFront": 3,
    "setbackRear": 2,
    "setbackSide1": 1.5,
    "setbackSide2": 1.5,
    "carParkingSpaces": 2,
    "rainwaterHarvesting": true,
    "solarPanels": false,
    "stpInstalled": true
}"#;

/// A plan with a short front setback.
pub const VIOLATING_PLAN: &str = r#"{
    "projectName": "Corner Tower",
    "zoneType": "R1",
    "proposedUse": "residential",
    "numFloors": "G+1",
    "plotLength": 40,
    "plotBreadth": 60,
    "buildingHeight": 9,
    "setbackFront": 2,
    "setbackRear": 2,
    "setbackSide1": 1.5,
    "setbackSide2": 1.5,
    "rainwaterHarvesting": true
}"#;

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a config file with the given content.
    pub fn create_config(&self, content: &str) {
        self.create_file(".bylaw-guard.toml", content);
    }

    /// Creates a plan file with the given content.
    pub fn create_plan(&self, relative_path: &str, content: &str) {
        self.create_file(relative_path, content);
    }

    /// Returns the fixture directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
