//! Sensitivity analysis: how realistic-scenario ROI responds to a
//! plus/minus 10% shift in each key driver, one driver at a time.
//!
//! Each variant is a full recompute of the aggregate analysis rather
//! than a derivative approximation. The model is closed-form and cheap;
//! recomputing keeps the deltas exact.
//!
//! Variants may leave the validated input envelope (a salary at the cap
//! scaled by 1.1, for instance). That is intentional: this is a local
//! elasticity probe, not user input, and it never goes through
//! validation.

use crate::{analysis, input::ProcessInput};
use serde::{Deserialize, Serialize};

pub const LOW_FACTOR: f64 = 0.9;
pub const HIGH_FACTOR: f64 = 1.1;

/// The drivers probed, in fixed report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityDriver {
    HoursPerPerson,
    People,
    AvgSalary,
    AutomationPct,
}

impl SensitivityDriver {
    pub const ALL: [SensitivityDriver; 4] = [
        SensitivityDriver::HoursPerPerson,
        SensitivityDriver::People,
        SensitivityDriver::AvgSalary,
        SensitivityDriver::AutomationPct,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SensitivityDriver::HoursPerPerson => "Hours per Person",
            SensitivityDriver::People => "Number of People",
            SensitivityDriver::AvgSalary => "Average Salary",
            SensitivityDriver::AutomationPct => "Automation %",
        }
    }

    /// Build the input variant with this driver scaled by `factor`.
    /// People round to a whole count and never drop below one.
    /// Automation percentages cap at 100 per component.
    pub fn apply(&self, base: &ProcessInput, factor: f64) -> ProcessInput {
        let mut variant = base.clone();
        match self {
            SensitivityDriver::HoursPerPerson => {
                variant.hours_per_week_per_person = base.hours_per_week_per_person * factor;
            }
            SensitivityDriver::People => {
                variant.people = ((base.people as f64 * factor).round() as u32).max(1);
            }
            SensitivityDriver::AvgSalary => {
                variant.avg_salary = base.avg_salary * factor;
            }
            SensitivityDriver::AutomationPct => {
                variant.automation_pct = base.automation_pct.map(|pct| (pct * factor).min(100.0));
            }
        }
        variant
    }
}

/// One row of the sensitivity report: signed ROI deltas against the
/// unperturbed realistic scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityEntry {
    pub name: String,
    pub negative: f64,
    pub positive: f64,
}

/// Probe all four drivers. Output order matches [`SensitivityDriver::ALL`].
pub fn sensitivity_analysis(base: &ProcessInput) -> Vec<SensitivityEntry> {
    let base_roi = analysis::analyze(base).scenarios.real.roi;

    SensitivityDriver::ALL
        .iter()
        .map(|driver| {
            let low = analysis::analyze(&driver.apply(base, LOW_FACTOR));
            let high = analysis::analyze(&driver.apply(base, HIGH_FACTOR));

            SensitivityEntry {
                name: driver.label().to_string(),
                negative: low.scenarios.real.roi - base_roi,
                positive: high.scenarios.real.roi - base_roi,
            }
        })
        .collect()
}
