//! Export surface tests: CSV shape and the JSON wire contract.

use roi_core::analysis::{self, RoiAnalysis};
use roi_core::export::scenario_csv;
use roi_core::input::ProcessInput;
use roi_core::types::{SalaryPeriod, ScenarioTriple};
use serde_json::Value;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn worked_example() -> ProcessInput {
    ProcessInput {
        hours_per_week_per_person: 10.0,
        people: 3,
        avg_salary: 4000.0,
        salary_period: SalaryPeriod::Monthly,
        error_rate_pct: Some(8.0),
        rework_hours_per_week: Some(5.0),
        automation_pct: ScenarioTriple { pess: 20.0, real: 40.0, opt: 70.0 },
        quality_uplift_pct: ScenarioTriple { pess: 5.0, real: 15.0, opt: 25.0 },
        impl_one_off: 8000.0,
        run_monthly: 600.0,
        discount_rate_pct: 10.0,
        ..ProcessInput::default()
    }
}

fn worked_analysis() -> RoiAnalysis {
    analysis::analyze(&worked_example())
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Header plus eleven metric rows, every cell double-quoted.
#[test]
fn csv_shape() {
    let csv = scenario_csv(&worked_analysis());
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines.len(), 12);
    assert_eq!(lines[0], "\"Metric\",\"Pessimistic\",\"Realistic\",\"Optimistic\"");

    for line in &lines {
        assert!(line.starts_with('"') && line.ends_with('"'), "unquoted cell in {line}");
        assert_eq!(line.matches("\",\"").count(), 3, "expected 4 cells in {line}");
    }
    assert!(!csv.ends_with('\n'), "no trailing newline");
}

#[test]
fn csv_metric_labels_in_order() {
    let csv = scenario_csv(&worked_analysis());
    let labels: Vec<&str> = csv
        .split('\n')
        .skip(1)
        .map(|line| line.split("\",\"").next().unwrap().trim_start_matches('"'))
        .collect();

    assert_eq!(
        labels,
        [
            "Time Saved (hours/week)",
            "Labor Savings (weekly)",
            "Quality Savings (weekly)",
            "Total Savings (annual)",
            "Implementation Cost (Year 1)",
            "Net Savings (Year 1)",
            "ROI (Year 1)",
            "Payback Period (months)",
            "FTE Freed",
            "NPV (1 year)",
            "NPV (3 years)",
        ]
    );
}

/// Spot-check formatted values across the three scenarios.
#[test]
fn csv_reference_rows() {
    let csv = scenario_csv(&worked_analysis());
    let lines: Vec<&str> = csv.split('\n').collect();

    assert_eq!(lines[1], "\"Time Saved (hours/week)\",\"6.0\",\"12.0\",\"21.0\"");
    assert_eq!(lines[4], "\"Total Savings (annual)\",\"8244\",\"17532\",\"30420\"");
    assert_eq!(lines[7], "\"ROI (Year 1)\",\"-45.8%\",\"15.3%\",\"100.1%\"");
    assert_eq!(lines[8], "\"Payback Period (months)\",\"92.0\",\"9.3\",\"4.1\"");
    assert_eq!(lines[9], "\"FTE Freed\",\"0.16\",\"0.33\",\"0.57\"");
}

/// Input serializes under camelCase wire names and omits absent
/// optional fields entirely.
#[test]
fn input_json_contract() {
    let value = serde_json::to_value(ProcessInput::default()).unwrap();
    let object = value.as_object().unwrap();

    assert!(object.contains_key("hoursPerWeekPerPerson"));
    assert!(object.contains_key("implOneOff"));
    assert!(object.contains_key("qualityUpliftPct"));
    assert!(!object.contains_key("errorRatePct"));
    assert!(!object.contains_key("reworkHoursPerWeek"));

    assert_eq!(object["salaryPeriod"], "monthly");
    assert_eq!(object["confidence"]["automation"], "med");
    assert_eq!(object["automationPct"]["real"], 40.0);
}

#[test]
fn analysis_json_contract() {
    let value = serde_json::to_value(worked_analysis()).unwrap();

    let baseline = value["baseline"].as_object().unwrap();
    assert!(baseline.contains_key("hourlyRate"));
    assert!(baseline.contains_key("annualCost"));

    let real = value["scenarios"]["real"].as_object().unwrap();
    for key in [
        "timeSavedHoursWeek",
        "implAnnualYr2Plus",
        "netSavingsAnnual",
        "paybackMonths",
        "fteFreed",
        "npv1y",
        "npv3y",
    ] {
        assert!(real.contains_key(key), "missing {key}");
    }

    assert!(value["scenarios"]["pess"].is_object());
    assert!(value["scenarios"]["opt"].is_object());
}

#[test]
fn input_round_trips_through_json() {
    let mut input = worked_example();
    input.currency = "EUR".to_string();

    let json = serde_json::to_string(&input).unwrap();
    let back: ProcessInput = serde_json::from_str(&json).unwrap();
    assert_eq!(back, input);
}

/// A JSON input with only some fields deserializes against serde
/// defaults for the optional quality pair but requires the rest.
#[test]
fn json_missing_required_field_fails() {
    let result = serde_json::from_str::<ProcessInput>(r#"{"people": 3}"#);
    assert!(result.is_err());

    let value: Value = serde_json::to_value(ProcessInput::default()).unwrap();
    let back: ProcessInput = serde_json::from_value(value).unwrap();
    assert_eq!(back, ProcessInput::default());
}
