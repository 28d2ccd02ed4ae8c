use std::path::PathBuf;

use super::*;
use crate::checker::ComplianceEngine;
use crate::config::Config;

fn checked_plan(name: &str, json: &str) -> CheckedPlan {
    let engine = ComplianceEngine::new(Config::default());
    CheckedPlan {
        path: PathBuf::from(name),
        report: engine.evaluate(&serde_json::from_str(json).unwrap()),
    }
}

#[test]
fn summary_counts_statuses() {
    let results = [
        checked_plan(
            "a.json",
            r#"{"setbackFront": 3, "setbackRear": 2, "setbackSide1": 1.5, "setbackSide2": 1.5}"#,
        ),
        checked_plan("b.json", "{}"),
    ];

    let output = JsonFormatter.format(&results).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["summary"]["total_plans"], 2);
    assert_eq!(parsed["summary"]["compliant"], 1);
    assert_eq!(parsed["summary"]["non_compliant"], 1);
}

#[test]
fn results_embed_full_reports() {
    let results = [checked_plan("plans/house.json", "{}")];
    let output = JsonFormatter.format(&results).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    let result = &parsed["results"][0];
    assert_eq!(result["path"], "plans/house.json");
    assert_eq!(result["report"]["compliance"]["overall"], "non-compliant");
    assert_eq!(
        result["report"]["setbacks"]["front"]["status"],
        "violation"
    );
    assert!(result["report"]["reportId"].as_str().unwrap().starts_with("BBMP-"));
}

#[test]
fn empty_batch_is_valid_json() {
    let output = JsonFormatter.format(&[]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["summary"]["total_plans"], 0);
    assert_eq!(parsed["results"].as_array().unwrap().len(), 0);
}
