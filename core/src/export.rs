//! CSV rendering of the scenario comparison.
//!
//! Shape: one header row, then one row per metric with the three
//! scenario values. Every cell is double-quoted; rows join with '\n'.
//! Precision varies by metric and matches the report surfaces (hours
//! at one decimal, money at whole units, ROI as a percentage).

use crate::{
    analysis::RoiAnalysis,
    scenario::ScenarioProjection,
    types::{ScenarioKey, ScenarioTriple},
};

/// Render the three-scenario comparison as a CSV string.
pub fn scenario_csv(analysis: &RoiAnalysis) -> String {
    let scenarios = &analysis.scenarios;

    let mut rows: Vec<[String; 4]> = Vec::with_capacity(12);
    rows.push([
        "Metric".to_string(),
        ScenarioKey::Pess.label().to_string(),
        ScenarioKey::Real.label().to_string(),
        ScenarioKey::Opt.label().to_string(),
    ]);
    rows.push(metric_row(scenarios, "Time Saved (hours/week)", |s| {
        format!("{:.1}", s.time_saved_hours_week)
    }));
    rows.push(metric_row(scenarios, "Labor Savings (weekly)", |s| {
        format!("{:.0}", s.labor_savings_week)
    }));
    rows.push(metric_row(scenarios, "Quality Savings (weekly)", |s| {
        format!("{:.0}", s.quality_savings_week)
    }));
    rows.push(metric_row(scenarios, "Total Savings (annual)", |s| {
        format!("{:.0}", s.total_savings_annual)
    }));
    rows.push(metric_row(scenarios, "Implementation Cost (Year 1)", |s| {
        format!("{:.0}", s.impl_annual)
    }));
    rows.push(metric_row(scenarios, "Net Savings (Year 1)", |s| {
        format!("{:.0}", s.net_savings_annual)
    }));
    rows.push(metric_row(scenarios, "ROI (Year 1)", |s| {
        format!("{:.1}%", s.roi * 100.0)
    }));
    rows.push(metric_row(scenarios, "Payback Period (months)", |s| {
        format!("{:.1}", s.payback_months)
    }));
    rows.push(metric_row(scenarios, "FTE Freed", |s| {
        format!("{:.2}", s.fte_freed)
    }));
    rows.push(metric_row(scenarios, "NPV (1 year)", |s| {
        format!("{:.0}", s.npv1y)
    }));
    rows.push(metric_row(scenarios, "NPV (3 years)", |s| {
        format!("{:.0}", s.npv3y)
    }));

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{cell}\""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn metric_row(
    scenarios: &ScenarioTriple<ScenarioProjection>,
    label: &str,
    value: impl Fn(&ScenarioProjection) -> String,
) -> [String; 4] {
    [
        label.to_string(),
        value(&scenarios.pess),
        value(&scenarios.real),
        value(&scenarios.opt),
    ]
}
