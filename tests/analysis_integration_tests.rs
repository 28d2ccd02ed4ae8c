//! Integration tests for the `validate`, `score` and `zone` commands.

mod common;

use common::{COMPLIANT_PLAN, TestFixture};
use predicates::prelude::*;

const CENSUS: &str = "\
Sl No,Class,Town Name,Slum Name,Notified,Households,Population,Paved Roads,Drainage Open,Drainage Closed,Drainage Both,No Drainage,Latrines Pit,Latrines Flush,Latrines Service,Latrines Others,Community Toilets,Tap Points,Electricity Domestic,Electricity Street,Electricity Others
1,I,Bangalore,Underserved Colony,Yes,100,500,0.1,-,-,-,ND,0,0,0,0,0,1,10,0,0
2,I,Bangalore,Served Colony,Yes,100,400,5.0,-,-,BD,-,0,30,0,0,5,20,100,10,0
";

const WARDS: &str = r#"[
    {"ward_no": 12, "ward_name": "Shivajinagar", "population": 28000, "area_sqkm": 2.1},
    {"ward_no": 13, "ward_name": "Ulsoor", "population": 24000, "area_sqkm": 3.4}
]"#;

// =============================================================================
// Validate Command Tests
// =============================================================================

#[test]
fn validate_passes_plausible_plan() {
    let fixture = TestFixture::new();
    fixture.create_plan("house.json", COMPLIANT_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["validate", "house.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("plausible"));
}

#[test]
fn validate_reports_field_issues() {
    let fixture = TestFixture::new();
    fixture.create_plan("empty.json", "{}");

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["validate", "empty.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("projectName"))
        .stdout(predicate::str::contains("Plot length must be greater than 0"));
}

// =============================================================================
// Score Command Tests
// =============================================================================

#[test]
fn score_ranks_settlements() {
    let fixture = TestFixture::new();
    fixture.create_file("census.csv", CENSUS);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "score", "census.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Underserved Colony"))
        .stdout(predicate::str::contains("2 settlements ranked"));
}

#[test]
fn score_json_puts_most_underserved_first() {
    let fixture = TestFixture::new();
    fixture.create_file("census.csv", CENSUS);

    let output = bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "score", "census.csv", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(
        parsed["settlements"][0]["record"]["settlement_name"],
        "Underserved Colony"
    );
    assert!(
        parsed["settlements"][0]["priority_score"].as_i64().unwrap()
            > parsed["settlements"][1]["priority_score"].as_i64().unwrap()
    );
}

#[test]
fn score_missing_file_fails() {
    bylaw_guard!()
        .args(["--no-config", "score", "/nonexistent/census.csv"])
        .assert()
        .code(2);
}

// =============================================================================
// Zone Command Tests
// =============================================================================

#[test]
fn zone_renders_assessment() {
    let fixture = TestFixture::new();
    fixture.create_file("wards.json", WARDS);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["zone", "wards.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall Assessment"))
        .stdout(predicate::str::contains("52,000 residents"));
}

#[test]
fn zone_json_includes_profile_and_recommendations() {
    let fixture = TestFixture::new();
    fixture.create_file("wards.json", WARDS);

    let output = bylaw_guard!()
        .current_dir(fixture.path())
        .args(["zone", "wards.json", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["profile"]["ward_count"], 2);
    assert_eq!(parsed["recommendations"].as_array().unwrap().len(), 7);
}

#[test]
fn zone_empty_selection_fails() {
    let fixture = TestFixture::new();
    fixture.create_file("wards.json", "[]");

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["zone", "wards.json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No wards selected"));
}
