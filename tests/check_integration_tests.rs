//! Integration tests for the `check` command.

mod common;

use common::{COMPLIANT_PLAN, TestFixture, VIOLATING_PLAN};
use predicates::prelude::*;

// =============================================================================
// Basic Check Command Tests
// =============================================================================

#[test]
fn check_passes_compliant_plan() {
    let fixture = TestFixture::new();
    fixture.create_plan("plans/house.json", COMPLIANT_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "plans", "--quiet"])
        .assert()
        .success();
}

#[test]
fn check_fails_on_setback_violation() {
    let fixture = TestFixture::new();
    fixture.create_plan("plans/tower.json", VIOLATING_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "plans", "--quiet"])
        .assert()
        .code(1);
}

#[test]
fn check_reports_violation_message() {
    let fixture = TestFixture::new();
    fixture.create_plan("plans/tower.json", VIOLATING_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "plans"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Front setback insufficient: 2m provided, 3m required",
        ))
        .stdout(predicate::str::contains("NON-COMPLIANT"));
}

#[test]
fn check_warn_only_always_succeeds() {
    let fixture = TestFixture::new();
    fixture.create_plan("plans/tower.json", VIOLATING_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "plans", "--warn-only", "--quiet"])
        .assert()
        .success();
}

#[test]
fn check_strict_fails_on_warnings() {
    let fixture = TestFixture::new();
    // Compliant but without rainwater harvesting: warning fires
    fixture.create_plan(
        "plans/house.json",
        &COMPLIANT_PLAN.replace(
            "\"rainwaterHarvesting\": true",
            "\"rainwaterHarvesting\": false",
        ),
    );

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "plans", "--quiet"])
        .assert()
        .success();

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "plans", "--strict", "--quiet"])
        .assert()
        .code(1);
}

#[test]
fn check_accepts_explicit_plan_file() {
    let fixture = TestFixture::new();
    fixture.create_plan("house.json", COMPLIANT_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "house.json", "--quiet"])
        .assert()
        .success();
}

#[test]
fn check_empty_form_is_all_violations() {
    let fixture = TestFixture::new();
    fixture.create_plan("empty.json", "{}");

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "empty.json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Front setback insufficient: 0m provided, 3m required",
        ))
        .stdout(predicate::str::contains(
            "Side 2 setback insufficient: 0m provided, 1.5m required",
        ));
}

#[test]
fn check_unparseable_plan_is_a_runtime_error() {
    let fixture = TestFixture::new();
    fixture.create_plan("broken.json", "this is not json");

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "broken.json", "--quiet"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("broken.json"));
}

// =============================================================================
// Output Format Tests
// =============================================================================

#[test]
fn check_json_output_has_summary_and_report() {
    let fixture = TestFixture::new();
    fixture.create_plan("plans/house.json", COMPLIANT_PLAN);

    let output = bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "plans", "--format", "json", "--quiet"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["summary"]["total_plans"], 1);
    assert_eq!(parsed["summary"]["compliant"], 1);
    let report = &parsed["results"][0]["report"];
    assert_eq!(report["compliance"]["overall"], "compliant");
    assert_eq!(report["projectDetails"]["plotArea"], 222.97);
    assert!(
        report["reportId"]
            .as_str()
            .unwrap()
            .starts_with("BBMP-")
    );
}

#[test]
fn check_markdown_output_renders_tables() {
    let fixture = TestFixture::new();
    fixture.create_plan("plans/tower.json", VIOLATING_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args([
            "--no-config",
            "check",
            "plans",
            "--format",
            "markdown",
            "--warn-only",
            "--quiet",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Bye-law Compliance Results"))
        .stdout(predicate::str::contains("| Front | 2 m | 3 m | violation |"));
}

#[test]
fn check_writes_output_file() {
    let fixture = TestFixture::new();
    fixture.create_plan("plans/house.json", COMPLIANT_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args([
            "--no-config",
            "check",
            "plans",
            "--format",
            "json",
            "--output",
            "results.json",
            "--quiet",
        ])
        .assert()
        .success();

    let written = std::fs::read_to_string(fixture.path().join("results.json")).unwrap();
    assert!(written.contains("\"total_plans\": 1"));
}

// =============================================================================
// Configuration Tests
// =============================================================================

#[test]
fn check_honors_config_thresholds() {
    let fixture = TestFixture::new();
    fixture.create_config("[setbacks]\nfront = 5.0\n");
    fixture.create_plan("plans/house.json", COMPLIANT_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["check", "plans"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Front setback insufficient: 3m provided, 5m required",
        ));
}

#[test]
fn check_no_config_ignores_local_file() {
    let fixture = TestFixture::new();
    fixture.create_config("[setbacks]\nfront = 5.0\n");
    fixture.create_plan("plans/house.json", COMPLIANT_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "check", "plans", "--quiet"])
        .assert()
        .success();
}

#[test]
fn check_exclude_pattern_skips_files() {
    let fixture = TestFixture::new();
    fixture.create_plan("plans/final.json", COMPLIANT_PLAN);
    fixture.create_plan("plans/drafts/wip.json", "{}");

    bylaw_guard!()
        .current_dir(fixture.path())
        .args([
            "--no-config",
            "check",
            "plans",
            "-x",
            "**/drafts/**",
            "--quiet",
        ])
        .assert()
        .success();
}

#[test]
fn check_verbose_shows_compliant_items() {
    let fixture = TestFixture::new();
    fixture.create_plan("plans/house.json", COMPLIANT_PLAN);

    bylaw_guard!()
        .current_dir(fixture.path())
        .args(["--no-config", "-v", "check", "plans"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Front setback compliant"));
}
