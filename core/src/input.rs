//! The process input record.
//!
//! Everything the engine needs to know about one manual process lives
//! in [`ProcessInput`]. Callers build a record (CLI file, share string,
//! embedding code), run [`ProcessInput::validate`] once at the
//! boundary, and the calculators treat it as trusted from then on.
//!
//! Serialization uses camelCase field names; this is the wire contract
//! shared with the export and share layers.

use crate::{
    constants::{CURRENCIES, DEPARTMENTS},
    error::{RoiError, RoiResult},
    types::{ConfidenceSet, Money, SalaryPeriod, ScenarioTriple},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessInput {
    // Effort
    pub hours_per_week_per_person: f64,
    pub people: u32,
    // Compensation
    pub avg_salary: Money,
    pub salary_period: SalaryPeriod,
    // Descriptive metadata, carried through but never used in arithmetic
    pub industry: String,
    pub department: String,
    pub category: Vec<String>,
    pub process_description: String,
    // Quality baseline. Absent means the process has no measured error
    // or rework burden; the scenario math substitutes zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_rate_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rework_hours_per_week: Option<f64>,
    // Three-point estimates, 0-100 per scenario
    pub automation_pct: ScenarioTriple<f64>,
    pub quality_uplift_pct: ScenarioTriple<f64>,
    // Costs
    pub impl_one_off: Money,
    pub run_monthly: Money,
    pub discount_rate_pct: f64,
    // Estimate confidence per driver
    pub confidence: ConfidenceSet,
    pub currency: String,
}

impl Default for ProcessInput {
    fn default() -> Self {
        Self {
            hours_per_week_per_person: 10.0,
            people: 3,
            avg_salary: 4000.0,
            salary_period: SalaryPeriod::Monthly,
            industry: "Technology".to_string(),
            department: "Operations".to_string(),
            category: vec!["data-entry".to_string(), "reporting".to_string()],
            process_description: "Weekly reporting and data consolidation across spreadsheets."
                .to_string(),
            error_rate_pct: None,
            rework_hours_per_week: None,
            automation_pct: ScenarioTriple { pess: 40.0, real: 40.0, opt: 40.0 },
            quality_uplift_pct: ScenarioTriple { pess: 0.0, real: 0.0, opt: 0.0 },
            impl_one_off: 10_000.0,
            run_monthly: 500.0,
            discount_rate_pct: 10.0,
            confidence: ConfidenceSet::default(),
            currency: "USD".to_string(),
        }
    }
}

impl ProcessInput {
    /// Check every field against its allowed range. Returns the first
    /// violation; the field name in the error is the camelCase wire name.
    pub fn validate(&self) -> RoiResult<()> {
        check_range("hoursPerWeekPerPerson", self.hours_per_week_per_person, 0.0, 60.0)?;

        if !(1..=10).contains(&self.people) {
            return Err(RoiError::Validation {
                field: "people",
                reason: format!("must be between 1 and 10, got {}", self.people),
            });
        }

        check_min("avgSalary", self.avg_salary, 0.0)?;

        if self.industry.is_empty() {
            return Err(RoiError::Validation {
                field: "industry",
                reason: "must not be empty".to_string(),
            });
        }

        if !DEPARTMENTS.contains(&self.department.as_str()) {
            return Err(RoiError::Validation {
                field: "department",
                reason: format!("unknown department '{}'", self.department),
            });
        }

        let description_chars = self.process_description.chars().count();
        if !(1..=280).contains(&description_chars) {
            return Err(RoiError::Validation {
                field: "processDescription",
                reason: format!("must be 1-280 characters, got {description_chars}"),
            });
        }

        if let Some(rate) = self.error_rate_pct {
            check_range("errorRatePct", rate, 0.0, 30.0)?;
        }
        if let Some(hours) = self.rework_hours_per_week {
            check_range("reworkHoursPerWeek", hours, 0.0, 60.0)?;
        }

        check_triple("automationPct", &self.automation_pct)?;
        check_triple("qualityUpliftPct", &self.quality_uplift_pct)?;

        check_min("implOneOff", self.impl_one_off, 0.0)?;
        check_min("runMonthly", self.run_monthly, 0.0)?;
        check_range("discountRatePct", self.discount_rate_pct, 0.0, 50.0)?;

        if !CURRENCIES.iter().any(|c| c.code == self.currency) {
            return Err(RoiError::Validation {
                field: "currency",
                reason: format!("unsupported currency '{}'", self.currency),
            });
        }

        Ok(())
    }
}

// Range checks go through `contains` so NaN fails them instead of
// slipping past a pair of comparisons.
fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> RoiResult<()> {
    if !(min..=max).contains(&value) {
        return Err(RoiError::Validation {
            field,
            reason: format!("must be between {min} and {max}, got {value}"),
        });
    }
    Ok(())
}

fn check_min(field: &'static str, value: f64, min: f64) -> RoiResult<()> {
    if value < min || !value.is_finite() {
        return Err(RoiError::Validation {
            field,
            reason: format!("must be at least {min}, got {value}"),
        });
    }
    Ok(())
}

fn check_triple(field: &'static str, triple: &ScenarioTriple<f64>) -> RoiResult<()> {
    for (key, value) in [
        ("pess", triple.pess),
        ("real", triple.real),
        ("opt", triple.opt),
    ] {
        if !(0.0..=100.0).contains(&value) {
            return Err(RoiError::Validation {
                field,
                reason: format!("{key} must be between 0 and 100, got {value}"),
            });
        }
    }
    Ok(())
}
