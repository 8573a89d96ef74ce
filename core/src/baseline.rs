//! Baseline cost derivation: what the process costs today.
//!
//! Pure arithmetic on the input record. Monotonic in salary, hours and
//! people: increasing any of them never lowers the annual cost.

use crate::{
    constants::{WEEKS_PER_YEAR, WORKING_HOURS_PER_WEEK},
    input::ProcessInput,
    types::{Money, SalaryPeriod},
};
use serde::{Deserialize, Serialize};

/// Weekly and annual cost of the status quo.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaselineCosts {
    pub hourly_rate: Money,
    pub total_hours_week: f64,
    pub weekly_cost: Money,
    pub annual_cost: Money,
}

/// Hourly rate implied by a salary figure. Monthly salaries annualize
/// at 12 months; the divisor is the standard 52-week, 40-hour year.
/// A salary of zero yields a rate of zero, not an error.
pub fn hourly_rate(avg_salary: Money, period: SalaryPeriod) -> Money {
    let annual_salary = match period {
        SalaryPeriod::Monthly => avg_salary * 12.0,
        SalaryPeriod::Yearly => avg_salary,
    };
    annual_salary / (WEEKS_PER_YEAR * WORKING_HOURS_PER_WEEK)
}

impl BaselineCosts {
    pub fn from_input(input: &ProcessInput) -> Self {
        let hourly_rate = hourly_rate(input.avg_salary, input.salary_period);
        let total_hours_week = input.hours_per_week_per_person * input.people as f64;
        let weekly_cost = total_hours_week * hourly_rate;
        let annual_cost = weekly_cost * WEEKS_PER_YEAR;

        Self {
            hourly_rate,
            total_hours_week,
            weekly_cost,
            annual_cost,
        }
    }
}
