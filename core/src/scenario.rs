//! Scenario projection: savings, return and capacity figures for one
//! automation/quality parameter set.
//!
//! All arithmetic is closed-form. The only guards are the epsilon
//! floors on the ROI and payback denominators; everything else follows
//! directly from the input and the baseline.

use crate::{
    baseline::BaselineCosts,
    constants::{COST_GUARD_EPSILON, WEEKS_PER_YEAR, WORKING_HOURS_PER_WEEK, WORKING_WEEKS_PER_YEAR},
    input::ProcessInput,
    types::{Money, ScenarioKey},
};
use serde::{Deserialize, Serialize};

/// Projected outcome of automating the process under one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioProjection {
    // Weekly savings
    pub time_saved_hours_week: f64,
    pub labor_savings_week: Money,
    pub quality_savings_week: Money,
    pub total_savings_week: Money,
    // Annualized savings
    pub time_saved_annual: f64,
    pub labor_savings_annual: Money,
    pub quality_savings_annual: Money,
    pub total_savings_annual: Money,
    // Costs
    pub impl_annual: Money,
    pub impl_annual_yr2_plus: Money,
    // Return
    pub net_savings_annual: Money,
    /// Year-1 return on year-1 implementation spend, as a fraction
    /// (0.5 = 50%). The denominator is floored at [`COST_GUARD_EPSILON`]
    /// so a zero-cost record yields a large finite value rather than an
    /// infinity that JSON cannot carry.
    pub roi: f64,
    /// Months until cumulative net benefit covers the one-off cost.
    /// Floored denominator: when monthly savings never exceed the run
    /// cost this becomes a very large finite number, which the display
    /// layer caps at "100+ months".
    pub payback_months: f64,
    // Capacity
    pub fte_freed: f64,
    // Discounted cash flow
    pub npv1y: Money,
    pub npv3y: Money,
}

impl ScenarioProjection {
    /// Project one scenario from a validated input and its baseline.
    pub fn project(input: &ProcessInput, baseline: &BaselineCosts, key: ScenarioKey) -> Self {
        let automation_pct = *input.automation_pct.get(key);
        let uplift_pct = *input.quality_uplift_pct.get(key);

        // Absent quality inputs mean no measured error/rework burden.
        // This is the single substitution point for the whole engine.
        let error_rate_pct = input.error_rate_pct.unwrap_or(0.0);
        let rework_hours_week = input.rework_hours_per_week.unwrap_or(0.0);

        // ── Weekly savings ─────────────────────────────────────

        let time_saved_hours_week = baseline.total_hours_week * automation_pct / 100.0;
        let labor_savings_week = time_saved_hours_week * baseline.hourly_rate;

        // Quality has two components: rework hours recovered, and the
        // cost of output errors avoided. Both scale with the uplift.
        let rework_savings_week =
            rework_hours_week * input.people as f64 * baseline.hourly_rate * uplift_pct / 100.0;
        let error_savings_week =
            baseline.weekly_cost * (error_rate_pct / 100.0) * uplift_pct / 100.0;

        let quality_savings_week = rework_savings_week + error_savings_week;
        let total_savings_week = labor_savings_week + quality_savings_week;

        // ── Annualized ─────────────────────────────────────────

        let time_saved_annual = time_saved_hours_week * WEEKS_PER_YEAR;
        let labor_savings_annual = labor_savings_week * WEEKS_PER_YEAR;
        let quality_savings_annual = quality_savings_week * WEEKS_PER_YEAR;
        let total_savings_annual = total_savings_week * WEEKS_PER_YEAR;

        // ── Costs and return ───────────────────────────────────

        let impl_annual = input.run_monthly * 12.0 + input.impl_one_off;
        let impl_annual_yr2_plus = input.run_monthly * 12.0;

        let net_savings_annual = total_savings_annual - impl_annual;
        let roi = net_savings_annual / impl_annual.max(COST_GUARD_EPSILON);

        let monthly_savings = total_savings_annual / 12.0;
        let payback_months =
            input.impl_one_off / (monthly_savings - input.run_monthly).max(COST_GUARD_EPSILON);

        // ── Freed capacity ─────────────────────────────────────

        // Freed hours land in working weeks, not calendar weeks.
        let fte_freed = (time_saved_hours_week * WEEKS_PER_YEAR)
            / (WORKING_HOURS_PER_WEEK * WORKING_WEEKS_PER_YEAR);

        // ── Discounted cash flow ───────────────────────────────

        // Year 1 carries the one-off cost; years 2 and 3 run at steady
        // state with no savings growth assumed.
        let discount_rate = input.discount_rate_pct / 100.0;
        let cf1 = total_savings_annual - impl_annual;
        let cf2 = total_savings_annual - impl_annual_yr2_plus;
        let cf3 = total_savings_annual - impl_annual_yr2_plus;

        let npv1y = cf1 / (1.0 + discount_rate);
        let npv3y = cf1 / (1.0 + discount_rate)
            + cf2 / (1.0 + discount_rate).powi(2)
            + cf3 / (1.0 + discount_rate).powi(3);

        Self {
            time_saved_hours_week,
            labor_savings_week,
            quality_savings_week,
            total_savings_week,
            time_saved_annual,
            labor_savings_annual,
            quality_savings_annual,
            total_savings_annual,
            impl_annual,
            impl_annual_yr2_plus,
            net_savings_annual,
            roi,
            payback_months,
            fte_freed,
            npv1y,
            npv3y,
        }
    }
}
