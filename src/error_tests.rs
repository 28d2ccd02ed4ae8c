use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = BylawGuardError::Config("negative setback requirement".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: negative setback requirement"
    );
}

#[test]
fn error_display_file_read() {
    let err = BylawGuardError::FileRead {
        path: PathBuf::from("plan.json"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("plan.json"));
}

#[test]
fn error_display_plan_parse() {
    let err = BylawGuardError::PlanParse {
        path: PathBuf::from("bad.json"),
        reason: "expected value at line 1".to_string(),
    };
    assert!(err.to_string().contains("bad.json"));
    assert!(err.to_string().contains("expected value"));
}

#[test]
fn error_display_census() {
    let err = BylawGuardError::Census {
        line: 7,
        reason: "expected 21 columns, found 4".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid census record on line 7: expected 21 columns, found 4"
    );
}

#[test]
fn error_display_empty_zone() {
    assert_eq!(
        BylawGuardError::EmptyZone.to_string(),
        "No wards selected for zone analysis"
    );
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::other("disk unplugged");
    let err: BylawGuardError = io_err.into();
    assert!(matches!(err, BylawGuardError::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: BylawGuardError = json_err.into();
    assert!(matches!(err, BylawGuardError::Json(_)));
}
